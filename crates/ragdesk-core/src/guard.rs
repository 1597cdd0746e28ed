//! Role-downgrade guard
//!
//! A viewer holding only the non-administrative role must never stay on a
//! restricted tab, whether their role was downgraded mid-session or they
//! navigated there directly. When that happens the active tab is reset to
//! the fallback tab and the whole application is reloaded, so no state
//! built for the restricted tab survives in memory.

use crate::event::{EventBus, UiEvent};
use crate::store::{Reloader, SettingsStore};
use crate::tab::Tab;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of one guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// (active tab, user flag) unchanged since the last check
    Skipped,
    /// Active tab is allowed for the viewer
    Compliant,
    /// Active tab was reset and a reload requested
    Redirected { from: Tab },
}

/// Reactive role-downgrade check
pub struct RoleGuard {
    settings: Arc<dyn SettingsStore>,
    reloader: Arc<dyn Reloader>,
    event_bus: Option<EventBus>,
    last_observed: Mutex<Option<(Tab, bool)>>,
}

impl RoleGuard {
    pub fn new(settings: Arc<dyn SettingsStore>, reloader: Arc<dyn Reloader>) -> Self {
        Self {
            settings,
            reloader,
            event_bus: None,
            last_observed: Mutex::new(None),
        }
    }

    /// Also announce `UiEvent::ReloadRequested` on `bus`
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Tab the viewer must be moved to, if any
    pub fn evaluate(active_tab: Tab, is_user: bool) -> Option<Tab> {
        (is_user && active_tab.requires_admin()).then(Tab::fallback)
    }

    /// Run the guard against the current settings.
    ///
    /// Only acts when (active tab, user flag) changed since the previous call.
    pub fn check(&self, is_user: bool) -> GuardOutcome {
        let active_tab = self.settings.current_tab();

        {
            let mut last = self.last_observed.lock();
            if *last == Some((active_tab, is_user)) {
                return GuardOutcome::Skipped;
            }
            *last = Some((active_tab, is_user));
        }

        let Some(target) = Self::evaluate(active_tab, is_user) else {
            debug!(tab = %active_tab, is_user, "Role guard: tab permitted");
            return GuardOutcome::Compliant;
        };

        info!(
            from = %active_tab,
            to = %target,
            "Role guard: restricted tab, resetting and reloading"
        );
        self.settings.set_current_tab(target);
        *self.last_observed.lock() = Some((target, is_user));

        // Fire-and-forget; a reloaded app re-runs the guard from scratch
        self.reloader.reload();
        if let Some(bus) = &self.event_bus {
            bus.publish(UiEvent::ReloadRequested);
        }

        GuardOutcome::Redirected { from: active_tab }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SettingsState;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingReloader(AtomicUsize);

    impl Reloader for CountingReloader {
        fn reload(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn guard(tab: Tab) -> (RoleGuard, Arc<SettingsState>, Arc<CountingReloader>) {
        let bus = EventBus::default_capacity();
        let settings = Arc::new(SettingsState::new(tab, bus.clone()));
        let reloader = Arc::new(CountingReloader::default());
        let guard = RoleGuard::new(settings.clone(), reloader.clone()).with_event_bus(bus);
        (guard, settings, reloader)
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(RoleGuard::evaluate(Tab::Documents, true), Some(Tab::KnowledgeGraph));
        assert_eq!(RoleGuard::evaluate(Tab::Api, true), Some(Tab::KnowledgeGraph));
        assert_eq!(RoleGuard::evaluate(Tab::Retrieval, true), None);
        assert_eq!(RoleGuard::evaluate(Tab::Documents, false), None);
    }

    #[test]
    fn test_user_on_documents_is_redirected_once() {
        let (guard, settings, reloader) = guard(Tab::Documents);

        assert_eq!(
            guard.check(true),
            GuardOutcome::Redirected {
                from: Tab::Documents
            }
        );
        assert_eq!(settings.current_tab(), Tab::KnowledgeGraph);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 1);

        assert_eq!(guard.check(true), GuardOutcome::Skipped);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_user_on_knowledge_graph_is_left_alone() {
        let (guard, settings, reloader) = guard(Tab::KnowledgeGraph);

        assert_eq!(guard.check(true), GuardOutcome::Compliant);
        assert_eq!(settings.current_tab(), Tab::KnowledgeGraph);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_admin_keeps_restricted_tab() {
        let (guard, settings, reloader) = guard(Tab::Api);

        assert_eq!(guard.check(false), GuardOutcome::Compliant);
        assert_eq!(settings.current_tab(), Tab::Api);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_downgrade_mid_session() {
        let (guard, settings, reloader) = guard(Tab::Api);

        assert_eq!(guard.check(false), GuardOutcome::Compliant);
        assert_eq!(guard.check(true), GuardOutcome::Redirected { from: Tab::Api });
        assert_eq!(settings.current_tab(), Tab::KnowledgeGraph);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reload_request_published_on_bus() {
        let bus = EventBus::default_capacity();
        let settings = Arc::new(SettingsState::new(Tab::Api, bus.clone()));
        let reloader = Arc::new(CountingReloader::default());
        let guard = RoleGuard::new(settings, reloader).with_event_bus(bus.clone());
        let mut rx = bus.subscribe();

        guard.check(true);

        let events: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(events.last(), Some(&UiEvent::ReloadRequested));
    }

    #[test]
    fn test_guard_without_bus_still_redirects() {
        let settings = Arc::new(SettingsState::new(Tab::Documents, EventBus::default_capacity()));
        let reloader = Arc::new(CountingReloader::default());
        let guard = RoleGuard::new(settings.clone(), reloader.clone());

        assert_eq!(
            guard.check(true),
            GuardOutcome::Redirected {
                from: Tab::Documents
            }
        );
        assert_eq!(settings.current_tab(), Tab::KnowledgeGraph);
        assert_eq!(reloader.0.load(Ordering::SeqCst), 1);
    }
}
