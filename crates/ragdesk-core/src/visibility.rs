//! Tab visibility map and store
//!
//! The map is deliberately permissive. Tab panels stay mounted and are shown
//! or hidden through styling, so `knowledge-graph` and `retrieval` are always
//! visible and `documents`/`api` follow the administrative flag. Callers that
//! need to hide a tab do it in presentation; they must not use this map to
//! decide whether to mount a panel.

use crate::event::{EventBus, UiEvent};
use crate::tab::Tab;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tracing::debug;

/// Per-tab visibility flags keyed by tab identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibilityMap {
    entries: HashMap<String, bool>,
}

impl VisibilityMap {
    /// Map holding only the fixed entries for the given role
    pub fn baseline(is_admin: bool) -> Self {
        let mut map = Self::default();
        map.apply_baseline(is_admin);
        map
    }

    /// Rewrite the four fixed entries; custom entries are left alone
    pub fn apply_baseline(&mut self, is_admin: bool) {
        for tab in Tab::all() {
            let visible = !tab.requires_admin() || is_admin;
            self.entries.insert(tab.as_str().to_string(), visible);
        }
    }

    /// Stored flag, false for unknown identifiers
    pub fn is_visible(&self, tab_id: &str) -> bool {
        self.entries.get(tab_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, tab_id: impl Into<String>, visible: bool) {
        self.entries.insert(tab_id.into(), visible);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Shared visibility store with change notification
///
/// Recomputation is explicit: owners forward every observed (active tab,
/// administrative flag) pair to [`VisibilityStore::observe`], which rewrites
/// the fixed entries only when the pair differs from the last one seen.
pub struct VisibilityStore {
    map: RwLock<VisibilityMap>,
    last_observed: RwLock<(Tab, bool)>,
    event_bus: EventBus,
}

impl VisibilityStore {
    pub fn new(active_tab: Tab, is_admin: bool, event_bus: EventBus) -> Self {
        Self {
            map: RwLock::new(VisibilityMap::baseline(is_admin)),
            last_observed: RwLock::new((active_tab, is_admin)),
            event_bus,
        }
    }

    pub fn is_visible(&self, tab_id: &str) -> bool {
        self.map.read().is_visible(tab_id)
    }

    /// Insert or overwrite one entry and notify subscribers
    pub fn set_visibility(&self, tab_id: impl Into<String>, visible: bool) {
        let tab_id = tab_id.into();
        self.map.write().set(tab_id.clone(), visible);
        debug!(tab = %tab_id, visible, "Tab visibility set");
        self.event_bus.publish(UiEvent::VisibilityChanged(tab_id));
    }

    /// Recompute the fixed entries if (active tab, admin flag) changed.
    ///
    /// Returns whether a recomputation happened.
    pub fn observe(&self, active_tab: Tab, is_admin: bool) -> bool {
        {
            let mut last = self.last_observed.write();
            if *last == (active_tab, is_admin) {
                return false;
            }
            *last = (active_tab, is_admin);
        }

        self.map.write().apply_baseline(is_admin);
        debug!(tab = %active_tab, is_admin, "Tab visibility recomputed");
        self.event_bus.publish(UiEvent::VisibilityRecomputed);
        true
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.event_bus.subscribe()
    }

    pub fn snapshot(&self) -> VisibilityMap {
        self.map.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(is_admin: bool) -> VisibilityStore {
        VisibilityStore::new(Tab::KnowledgeGraph, is_admin, EventBus::default_capacity())
    }

    #[test]
    fn test_initial_map_has_every_known_tab() {
        let store = store(false);
        let snapshot = store.snapshot();

        assert_eq!(snapshot.len(), Tab::all().len());
        assert!(!store.is_visible("documents"));
        assert!(store.is_visible("knowledge-graph"));
        assert!(store.is_visible("retrieval"));
        assert!(!store.is_visible("api"));
    }

    #[test]
    fn test_unknown_tab_reads_as_hidden() {
        assert!(!store(true).is_visible("nope"));
    }

    #[test]
    fn test_set_visibility_touches_one_entry() {
        let store = store(true);
        store.set_visibility("api", false);

        assert!(!store.is_visible("api"));
        assert!(store.is_visible("documents"));
        assert!(store.is_visible("retrieval"));
    }

    #[test]
    fn test_observe_skips_unchanged_pair() {
        let store = store(false);
        store.set_visibility("documents", true);

        assert!(!store.observe(Tab::KnowledgeGraph, false));
        assert!(store.is_visible("documents"));

        assert!(store.observe(Tab::Retrieval, false));
        assert!(!store.is_visible("documents"));
    }

    #[test]
    fn test_notifications() {
        let store = store(false);
        let mut rx = store.subscribe();

        store.set_visibility("custom-tab", true);
        store.observe(Tab::Retrieval, true);

        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::VisibilityChanged("custom-tab".to_string())
        );
        assert_eq!(rx.try_recv().unwrap(), UiEvent::VisibilityRecomputed);
    }

    #[test]
    fn test_map_baseline_keeps_custom_entries() {
        let mut map = VisibilityMap::baseline(true);
        map.set("custom-tab", true);
        map.apply_baseline(false);

        assert!(map.is_visible("custom-tab"));
        assert!(!map.is_visible("api"));
    }
}
