//! Event bus for ragdesk using tokio::broadcast
//!
//! Stores publish here; front ends subscribe to know when to redraw.

use crate::tab::Tab;
use tokio::sync::broadcast;

/// Events emitted by the stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Active tab changed in the settings store
    TabChanged(Tab),
    /// Session (role, guest mode, versions, ...) replaced in the auth store
    SessionChanged,
    /// A single visibility entry was written
    VisibilityChanged(String),
    /// Fixed visibility entries were rewritten after a tab/role change
    VisibilityRecomputed,
    /// The role guard asked for a full reload
    ReloadRequested,
}

/// Event bus for broadcasting UI events
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<UiEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (64 events)
    pub fn default_capacity() -> Self {
        Self::new(64)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: UiEvent) {
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();

        bus.publish(UiEvent::TabChanged(Tab::Retrieval));
        bus.publish(UiEvent::VisibilityChanged("custom-tab".to_string()));

        assert_eq!(rx.recv().await.unwrap(), UiEvent::TabChanged(Tab::Retrieval));
        assert!(
            matches!(rx.recv().await.unwrap(), UiEvent::VisibilityChanged(id) if id == "custom-tab")
        );
    }

    #[tokio::test]
    async fn test_cloned_bus_shares_channel() {
        let bus = EventBus::default_capacity();
        let clone = bus.clone();
        let mut rx = bus.subscribe();

        clone.publish(UiEvent::SessionChanged);

        assert_eq!(rx.recv().await.unwrap(), UiEvent::SessionChanged);
        assert_eq!(clone.subscriber_count(), 1);
    }

    #[test]
    fn test_event_bus_no_subscribers_ok() {
        let bus = EventBus::default_capacity();
        bus.publish(UiEvent::ReloadRequested);
    }
}
