//! Browser-backed navigation, reload and persistence
//!
//! The active tab and the signed-in session live in `localStorage`; the
//! login page writes the session record and the app follows it through
//! `storage` events. Outside wasm32 every DOM call is a no-op so the crate's
//! unit tests run natively.

use crate::context::AuthContext;
use leptos::prelude::*;
use ragdesk_core::{Navigator, Reloader, SessionInfo, Tab};
use tracing::{debug, info, warn};

const TAB_STORAGE_KEY: &str = "ragdesk.current-tab";
const SESSION_STORAGE_KEY: &str = "ragdesk.session";
const LOGIN_HASH: &str = "#/login";

/// Navigator for the single-page app
///
/// Settings open as an in-page dialog; login is the `#/login` hash route.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    settings_open: RwSignal<bool>,
    signed_out: RwSignal<bool>,
}

impl BrowserNavigator {
    pub fn new(settings_open: RwSignal<bool>, signed_out: RwSignal<bool>) -> Self {
        Self {
            settings_open,
            signed_out,
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate_to_login(&self) {
        info!("Navigating to login");
        clear_session();
        self.settings_open.set(false);
        self.signed_out.set(true);
        dom::set_hash(LOGIN_HASH);
    }

    fn open_settings(&self) {
        self.settings_open.set(true);
    }

    fn open_external(&self, url: &str) {
        debug!(url, "Opening external link");
        dom::open_blank(url);
    }
}

/// Full page reload
#[derive(Clone, Copy, Default)]
pub struct BrowserReloader;

impl Reloader for BrowserReloader {
    fn reload(&self) {
        info!("Reloading page");
        dom::reload();
    }
}

/// Active tab persisted by a previous page load
pub fn load_tab() -> Option<Tab> {
    dom::load(TAB_STORAGE_KEY)?.parse().ok()
}

/// Persist the active tab so a reload lands on it
pub fn save_tab(tab: Tab) {
    debug!(key = TAB_STORAGE_KEY, tab = %tab, "Persisting active tab");
    dom::store(TAB_STORAGE_KEY, tab.as_str());
}

/// Decode a stored session record; malformed records are ignored
pub(crate) fn parse_session(raw: &str) -> Option<SessionInfo> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed session record");
            None
        }
    }
}

/// Session written by the login page, if any
pub fn load_session() -> Option<SessionInfo> {
    parse_session(&dom::load(SESSION_STORAGE_KEY)?)
}

pub fn clear_session() {
    dom::remove(SESSION_STORAGE_KEY);
}

/// Keep `auth` in step with session writes from the login page or other tabs
///
/// A removed record leaves an anonymous, non-guest session behind.
pub fn watch_session(auth: AuthContext) {
    dom::on_storage_change(SESSION_STORAGE_KEY, move |value| {
        let session = value.as_deref().and_then(parse_session).unwrap_or_default();
        info!(role = ?session.role, "Session changed in storage");
        auth.set_session(session);
    });
}

pub(crate) fn is_login_hash(hash: &str) -> bool {
    hash == LOGIN_HASH
}

/// Whether the page was opened on the login route
pub fn on_login_route() -> bool {
    is_login_hash(&dom::hash())
}

/// Follow back/forward navigation in and out of the login route
pub fn watch_login_route(signed_out: RwSignal<bool>) {
    dom::on_hash_change(move |hash| signed_out.set(is_login_hash(&hash)));
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use leptos::ev;
    use leptos::leptos_dom::helpers::window_event_listener;
    use tracing::warn;

    pub fn set_hash(hash: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().set_hash(hash) {
            warn!(hash, error = ?e, "Navigation failed");
        }
    }

    pub fn hash() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    pub fn open_blank(url: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!(url, error = ?e, "window.open failed");
        }
    }

    pub fn reload() {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().reload() {
            warn!(error = ?e, "location.reload failed");
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub fn store(key: &str, value: &str) {
        let Some(storage) = storage() else { return };
        if let Err(e) = storage.set_item(key, value) {
            warn!(key, error = ?e, "localStorage write failed");
        }
    }

    pub fn remove(key: &str) {
        let Some(storage) = storage() else { return };
        if let Err(e) = storage.remove_item(key) {
            warn!(key, error = ?e, "localStorage delete failed");
        }
    }

    pub fn on_storage_change(key: &'static str, on_change: impl Fn(Option<String>) + 'static) {
        let _ = window_event_listener(ev::storage, move |e| {
            if e.key().as_deref() == Some(key) {
                on_change(e.new_value());
            }
        });
    }

    pub fn on_hash_change(on_change: impl Fn(String) + 'static) {
        let _ = window_event_listener(ev::hashchange, move |_| on_change(hash()));
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod dom {
    pub fn set_hash(_hash: &str) {}

    pub fn hash() -> String {
        String::new()
    }

    pub fn open_blank(_url: &str) {}

    pub fn reload() {}

    pub fn load(_key: &str) -> Option<String> {
        None
    }

    pub fn store(_key: &str, _value: &str) {}

    pub fn remove(_key: &str) {}

    pub fn on_storage_change(_key: &'static str, _on_change: impl Fn(Option<String>) + 'static) {}

    pub fn on_hash_change(_on_change: impl Fn(String) + 'static) {}
}
