//! Reactive stores provided through Leptos context
//!
//! Both implement the core store traits, so the role guard and header
//! controller run unchanged against signals.

use crate::browser;
use leptos::prelude::*;
use ragdesk_core::{AuthStore, Reloader, SessionInfo, SettingsStore, Tab};
use std::sync::Arc;

/// Active tab, persisted across page loads
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub current_tab: RwSignal<Tab>,
}

impl SettingsContext {
    pub fn new(initial: Tab) -> Self {
        Self {
            current_tab: RwSignal::new(initial),
        }
    }
}

impl SettingsStore for SettingsContext {
    fn current_tab(&self) -> Tab {
        self.current_tab.get_untracked()
    }

    fn set_current_tab(&self, tab: Tab) {
        browser::save_tab(tab);
        self.current_tab.set(tab);
    }
}

/// Session state supplied by the host page
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<SessionInfo>,
}

impl AuthContext {
    pub fn new(session: SessionInfo) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Replace the session after login or a role change
    pub fn set_session(&self, session: SessionInfo) {
        self.session.set(session);
    }
}

impl AuthStore for AuthContext {
    fn session(&self) -> SessionInfo {
        self.session.get_untracked()
    }
}

/// Side-effect services that are not stores
#[derive(Clone)]
pub struct Services {
    pub reloader: Arc<dyn Reloader>,
}

pub fn use_settings() -> SettingsContext {
    expect_context::<SettingsContext>()
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
