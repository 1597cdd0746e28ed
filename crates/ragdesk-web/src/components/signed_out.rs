//! Shown on the login route after logout

use leptos::prelude::*;
use ragdesk_core::SiteConfig;

#[component]
pub fn SignedOut() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let name = site.title.unwrap_or_else(|| "ragdesk".to_string());

    view! {
        <section class="signed-out">
            <h2>"Signed out"</h2>
            <p>{format!("Sign in to {} again to continue.", name)}</p>
        </section>
    }
}
