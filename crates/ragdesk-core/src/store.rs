//! Store seams and their in-memory implementations
//!
//! The header and visibility code never reach a process-wide singleton: the
//! settings store, auth store, navigator and reloader are passed in. Front
//! ends supply browser- or terminal-backed implementations; `SettingsState`
//! and `AuthState` cover the in-process case and tests.

use crate::event::{EventBus, UiEvent};
use crate::session::SessionInfo;
use crate::tab::Tab;
use parking_lot::RwLock;
use tracing::debug;

/// Owner of the active tab
pub trait SettingsStore: Send + Sync {
    fn current_tab(&self) -> Tab;
    fn set_current_tab(&self, tab: Tab);
}

/// Owner of session state (role, guest mode, versions, site title)
pub trait AuthStore: Send + Sync {
    fn session(&self) -> SessionInfo;
}

/// Navigation service
pub trait Navigator: Send + Sync {
    fn navigate_to_login(&self);
    fn open_settings(&self);
    fn open_external(&self, url: &str);
}

/// Discards all in-memory view state and starts the application over
pub trait Reloader: Send + Sync {
    fn reload(&self);
}

/// In-memory settings store
pub struct SettingsState {
    current_tab: RwLock<Tab>,
    event_bus: EventBus,
}

impl SettingsState {
    pub fn new(current_tab: Tab, event_bus: EventBus) -> Self {
        Self {
            current_tab: RwLock::new(current_tab),
            event_bus,
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

impl SettingsStore for SettingsState {
    fn current_tab(&self) -> Tab {
        *self.current_tab.read()
    }

    fn set_current_tab(&self, tab: Tab) {
        let changed = {
            let mut current = self.current_tab.write();
            let changed = *current != tab;
            *current = tab;
            changed
        };

        if changed {
            debug!(tab = %tab, "Active tab changed");
            self.event_bus.publish(UiEvent::TabChanged(tab));
        }
    }
}

/// In-memory auth store
pub struct AuthState {
    session: RwLock<SessionInfo>,
    event_bus: EventBus,
}

impl AuthState {
    pub fn new(session: SessionInfo, event_bus: EventBus) -> Self {
        Self {
            session: RwLock::new(session),
            event_bus,
        }
    }

    /// Replace the session (login, logout, role change)
    pub fn set_session(&self, session: SessionInfo) {
        let changed = {
            let mut current = self.session.write();
            let changed = *current != session;
            *current = session;
            changed
        };

        if changed {
            debug!("Session replaced");
            self.event_bus.publish(UiEvent::SessionChanged);
        }
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

impl AuthStore for AuthState {
    fn session(&self) -> SessionInfo {
        self.session.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_publishes_only_on_change() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();
        let settings = SettingsState::new(Tab::Documents, bus);

        settings.set_current_tab(Tab::Documents);
        settings.set_current_tab(Tab::Retrieval);

        assert_eq!(settings.current_tab(), Tab::Retrieval);
        assert_eq!(rx.try_recv().unwrap(), UiEvent::TabChanged(Tab::Retrieval));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_auth_publishes_on_session_change() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();
        let auth = AuthState::new(SessionInfo::admin("ada"), bus);

        auth.set_session(SessionInfo::admin("ada"));
        assert!(rx.try_recv().is_err());

        auth.set_session(SessionInfo::user("ada"));
        assert_eq!(rx.try_recv().unwrap(), UiEvent::SessionChanged);
        assert!(auth.session().is_user());
    }
}
