//! Site header: branding, tab navigation, session controls

use crate::context::{use_auth, use_settings, Services, SettingsContext};
use leptos::prelude::*;
use ragdesk_core::{
    HeaderAction, HeaderController, HeaderModel, RoleGuard, SessionInfo, SiteConfig, Tab,
};
use std::sync::Arc;

/// Class list for a navigation tab button
pub(crate) fn nav_tab_class(active: bool) -> &'static str {
    if active {
        "nav-tab nav-tab-active"
    } else {
        "nav-tab"
    }
}

/// Role guard writing through the reactive settings store
pub(crate) fn role_guard(settings: SettingsContext, services: &Services) -> RoleGuard {
    RoleGuard::new(Arc::new(settings), services.reloader.clone())
}

/// Header with branding, tabs and session controls
#[component]
pub fn SiteHeader() -> impl IntoView {
    let settings = use_settings();
    let auth = use_auth();
    let site = expect_context::<SiteConfig>();
    let controller = expect_context::<HeaderController>();

    let model = Memo::new(move |_| {
        let tab = settings.current_tab.get();
        auth.session.with(|session| HeaderModel::build(session, &site, tab))
    });

    let settings_controller = controller.clone();

    view! {
        <header class="site-header">
            <div class="site-branding">
                {move || {
                    model
                        .with(|m| m.branding.clone())
                        .map(|branding| {
                            view! {
                                <span class="site-title" title=branding.description>
                                    {branding.title}
                                </span>
                            }
                        })
                }}
            </div>

            <div class="site-tabs">
                <TabsNavigation model />
            </div>

            <nav class="site-controls">
                {move || {
                    model
                        .with(|m| m.version_label.clone())
                        .map(|version| view! { <span class="site-version">{version}</span> })
                }}
                {move || {
                    model
                        .with(|m| m.repository_url.clone())
                        .map(|url| {
                            view! {
                                <a
                                    class="icon-button"
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title="Project Repository"
                                    aria-label="Project Repository"
                                >
                                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                                        <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
                                        <path d="M9 18c-4.51 2-5-2-7-2"/>
                                    </svg>
                                </a>
                            }
                        })
                }}
                <button
                    class="icon-button"
                    title="Settings"
                    aria-label="Settings"
                    on:click=move |_| settings_controller.dispatch(HeaderAction::OpenSettings)
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                        <circle cx="12" cy="12" r="3"/>
                        <path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>
                    </svg>
                </button>
                {move || {
                    let controller = controller.clone();
                    model
                        .with(|m| m.logout.clone())
                        .map(move |logout| {
                            view! {
                                <button
                                    class="icon-button"
                                    title=logout.tooltip.clone()
                                    aria-label=logout.tooltip
                                    on:click=move |_| controller.dispatch(HeaderAction::Logout)
                                >
                                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                                        <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
                                        <polyline points="16 17 21 12 16 7"/>
                                        <line x1="21" x2="9" y1="12" y2="12"/>
                                    </svg>
                                </button>
                            }
                        })
                }}
            </nav>
        </header>
    }
}

/// Tab strip plus the role-downgrade guard
#[component]
pub fn TabsNavigation(model: Memo<HeaderModel>) -> impl IntoView {
    let settings = use_settings();
    let auth = use_auth();
    let services = expect_context::<Services>();

    let guard = role_guard(settings, &services);
    let is_user = Memo::new(move |_| auth.session.with(SessionInfo::is_user));

    // Re-runs whenever the active tab or the user flag changes
    Effect::new(move |_| {
        settings.current_tab.track();
        guard.check(is_user.get());
    });

    view! {
        <div class="tabs-navigation" role="tablist">
            {move || {
                model
                    .get()
                    .tabs
                    .into_iter()
                    .map(|t| view! { <NavigationTab tab=t.tab label=t.label active=t.active /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One tab button
#[component]
pub fn NavigationTab(tab: Tab, label: &'static str, active: bool) -> impl IntoView {
    let controller = expect_context::<HeaderController>();

    view! {
        <button
            role="tab"
            class=nav_tab_class(active)
            aria-selected=active.to_string()
            data-tab=tab.as_str()
            on:click=move |_| controller.dispatch(HeaderAction::SelectTab(tab))
        >
            {label}
        </button>
    }
}
