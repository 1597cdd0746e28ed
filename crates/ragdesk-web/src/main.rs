//! WASM entry point for the Leptos CSR app

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use ragdesk_core::{SessionInfo, SiteConfig};
use ragdesk_web::{browser, App, AuthContext};

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        // No stored record means auth is disabled server-side
        let auth = AuthContext::new(browser::load_session().unwrap_or_else(SessionInfo::guest));
        browser::watch_session(auth);
        view! { <App site=SiteConfig::default() auth /> }
    });
}
