//! Tab content panel
//!
//! Every panel stays mounted; inactive or hidden ones get `display: none`.

use crate::context::use_settings;
use crate::visibility::use_tab_visibility;
use leptos::prelude::*;
use ragdesk_core::Tab;

pub(crate) fn panel_display(active: bool, visible: bool) -> &'static str {
    if active && visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn TabPanel(tab: Tab) -> impl IntoView {
    let settings = use_settings();
    let visibility = use_tab_visibility();

    let display = move || {
        panel_display(
            settings.current_tab.get() == tab,
            visibility.is_visible(tab.as_str()),
        )
    };

    view! {
        <section class="tab-panel" data-tab=tab.as_str() style:display=display>
            <h2 class="tab-panel-title">{tab.label()}</h2>
        </section>
    }
}
