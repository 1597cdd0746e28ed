//! Root Leptos component
//!
//! Builds the stores and services once and hands them down through context.
//! The session store is owned by the host so it can be fed from outside.

use crate::browser::{self, BrowserNavigator, BrowserReloader};
use crate::components::{AppSettings, SignedOut, SiteHeader, TabPanel};
use crate::context::{AuthContext, Services, SettingsContext};
use crate::visibility::TabVisibilityProvider;
use leptos::prelude::*;
use ragdesk_core::{HeaderController, SiteConfig, Tab};
use std::sync::Arc;

#[component]
pub fn App(site: SiteConfig, auth: AuthContext) -> impl IntoView {
    let settings = SettingsContext::new(browser::load_tab().unwrap_or_default());
    let settings_open = RwSignal::new(false);
    let signed_out = RwSignal::new(browser::on_login_route());
    browser::watch_login_route(signed_out);

    let controller = HeaderController::new(
        Arc::new(settings),
        Arc::new(BrowserNavigator::new(settings_open, signed_out)),
    );

    provide_context(settings);
    provide_context(auth);
    provide_context(site);
    provide_context(controller);
    provide_context(Services {
        reloader: Arc::new(BrowserReloader),
    });

    view! {
        <TabVisibilityProvider>
            <div class="app">
                <SiteHeader />
                <main
                    class="tab-panels"
                    style:display=move || if signed_out.get() { "none" } else { "" }
                >
                    {Tab::all()
                        .iter()
                        .map(|tab| view! { <TabPanel tab=*tab /> })
                        .collect_view()}
                </main>
                <Show when=move || signed_out.get()>
                    <SignedOut />
                </Show>
                <Show when=move || settings_open.get()>
                    <AppSettings open=settings_open />
                </Show>
            </div>
        </TabVisibilityProvider>
    }
}
