//! Tab visibility provider
//!
//! Tab panels are always mounted and hidden with styling; this context only
//! carries the permissive capability map. Do not use it to decide whether to
//! mount a panel.

use crate::context::{use_auth, use_settings};
use leptos::prelude::*;
use ragdesk_core::{SessionInfo, VisibilityMap};
use tracing::debug;

/// Visibility map shared with every component under the provider
#[derive(Clone, Copy)]
pub struct TabVisibilityContext {
    map: RwSignal<VisibilityMap>,
}

impl TabVisibilityContext {
    pub fn new(is_admin: bool) -> Self {
        Self {
            map: RwSignal::new(VisibilityMap::baseline(is_admin)),
        }
    }

    /// Reactive read; false for unknown identifiers
    pub fn is_visible(&self, tab_id: &str) -> bool {
        self.map.with(|m| m.is_visible(tab_id))
    }

    pub fn set_visibility(&self, tab_id: impl Into<String>, visible: bool) {
        let tab_id = tab_id.into();
        self.map.update(|m| m.set(tab_id, visible));
    }

    fn recompute(&self, is_admin: bool) {
        self.map.update(|m| m.apply_baseline(is_admin));
    }

    pub fn snapshot(&self) -> VisibilityMap {
        self.map.get_untracked()
    }
}

/// Provides [`TabVisibilityContext`] and keeps it in step with the active
/// tab and the administrative flag
#[component]
pub fn TabVisibilityProvider(children: Children) -> impl IntoView {
    let settings = use_settings();
    let auth = use_auth();

    let is_admin = Memo::new(move |_| auth.session.with(SessionInfo::is_admin));
    let context = TabVisibilityContext::new(is_admin.get_untracked());

    Effect::new(move |_| {
        let tab = settings.current_tab.get();
        let is_admin = is_admin.get();
        debug!(tab = %tab, is_admin, "Recomputing tab visibility");
        context.recompute(is_admin);
    });

    provide_context(context);

    children()
}

pub fn use_tab_visibility() -> TabVisibilityContext {
    expect_context::<TabVisibilityContext>()
}
