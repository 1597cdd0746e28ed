//! Settings dialog opened from the header

use crate::context::use_auth;
use crate::visibility::use_tab_visibility;
use leptos::prelude::*;
use ragdesk_core::Tab;

#[component]
pub fn AppSettings(open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let visibility = use_tab_visibility();

    let username = move || {
        auth.session
            .with(|s| s.username.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| open.set(false)></div>
        <div class="modal" role="dialog" aria-label="Settings">
            <h2 class="modal-title">"Settings"</h2>
            <p class="modal-row">
                <span class="modal-label">"User"</span>
                <span>{username}</span>
            </p>
            <ul class="visibility-list">
                {Tab::all()
                    .iter()
                    .map(|tab| {
                        let id = tab.as_str();
                        view! {
                            <li class:visibility-off=move || !visibility.is_visible(id)>
                                {tab.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="modal-close" on:click=move |_| open.set(false)>
                "Close"
            </button>
        </div>
    }
}
