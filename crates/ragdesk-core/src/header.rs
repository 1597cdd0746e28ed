//! Site header view model
//!
//! [`HeaderModel::build`] is a pure function of (session, site config, active
//! tab). The web and terminal front ends render the same model, and user
//! interaction flows back through [`HeaderController::dispatch`].

use crate::config::SiteConfig;
use crate::session::{non_empty, SessionInfo};
use crate::store::{Navigator, SettingsStore};
use crate::tab::Tab;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Title block; only built when a title exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub title: String,
    /// Hover tooltip
    pub description: Option<String>,
}

/// One selectable navigation control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutControl {
    /// Hover label, e.g. `Logout (ada)`
    pub tooltip: String,
}

/// Everything the header shows
///
/// The settings entry point is not modelled: it is always rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    pub branding: Option<Branding>,
    pub tabs: Vec<NavTab>,
    /// Administrators only
    pub version_label: Option<String>,
    /// Administrators only
    pub repository_url: Option<String>,
    /// Absent for guest sessions
    pub logout: Option<LogoutControl>,
}

impl HeaderModel {
    pub fn build(session: &SessionInfo, site: &SiteConfig, active_tab: Tab) -> Self {
        let is_admin = session.is_admin();

        let title = non_empty(&session.title).or_else(|| non_empty(&site.title));
        let branding = title.map(|title| Branding {
            title: title.to_string(),
            description: non_empty(&session.description)
                .or_else(|| non_empty(&site.description))
                .map(str::to_string),
        });

        let tabs = Tab::permitted(is_admin)
            .map(|tab| NavTab {
                tab,
                label: tab.label(),
                active: tab == active_tab,
            })
            .collect();

        let logout = (!session.guest_mode).then(|| LogoutControl {
            tooltip: match non_empty(&session.username) {
                Some(name) => format!("Logout ({})", name),
                None => "Logout".to_string(),
            },
        });

        Self {
            branding,
            tabs,
            version_label: if is_admin {
                session.version_label()
            } else {
                None
            },
            repository_url: is_admin.then(|| site.repository_url.clone()),
            logout,
        }
    }

    /// The tab marked as the active selection, if it is shown
    pub fn active_tab(&self) -> Option<Tab> {
        self.tabs.iter().find(|t| t.active).map(|t| t.tab)
    }

    /// Tab shown `offset` positions away from the active one (wrapping)
    pub fn cycle(&self, offset: isize) -> Option<Tab> {
        if self.tabs.is_empty() {
            return None;
        }
        let len = self.tabs.len() as isize;
        let current = self.tabs.iter().position(|t| t.active).unwrap_or(0) as isize;
        let idx = (current + offset).rem_euclid(len) as usize;
        Some(self.tabs[idx].tab)
    }
}

/// User interaction with the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    SelectTab(Tab),
    OpenSettings,
    OpenRepository(String),
    Logout,
}

/// Applies header actions to the injected stores and navigator
#[derive(Clone)]
pub struct HeaderController {
    settings: Arc<dyn SettingsStore>,
    navigator: Arc<dyn Navigator>,
}

impl HeaderController {
    pub fn new(settings: Arc<dyn SettingsStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            settings,
            navigator,
        }
    }

    pub fn dispatch(&self, action: HeaderAction) {
        match action {
            HeaderAction::SelectTab(tab) => self.settings.set_current_tab(tab),
            HeaderAction::OpenSettings => self.navigator.open_settings(),
            HeaderAction::OpenRepository(url) => self.navigator.open_external(&url),
            HeaderAction::Logout => {
                info!("Logout requested");
                self.navigator.navigate_to_login();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_admin_sees_every_tab_and_controls() {
        let session = SessionInfo::admin("ada").with_versions("1.2.3", "4.5.6");
        let model = HeaderModel::build(&session, &site(), Tab::Api);

        let tabs: Vec<Tab> = model.tabs.iter().map(|t| t.tab).collect();
        assert_eq!(tabs, Tab::all());
        assert_eq!(model.active_tab(), Some(Tab::Api));
        assert_eq!(model.version_label.as_deref(), Some("v1.2.3/4.5.6"));
        assert!(model.repository_url.is_some());
        assert_eq!(model.logout.unwrap().tooltip, "Logout (ada)");
    }

    #[test]
    fn test_user_sees_unrestricted_tabs_only() {
        let session = SessionInfo::user("bob").with_versions("1.2.3", "4.5.6");
        let model = HeaderModel::build(&session, &site(), Tab::Retrieval);

        let tabs: Vec<Tab> = model.tabs.iter().map(|t| t.tab).collect();
        assert_eq!(tabs, vec![Tab::KnowledgeGraph, Tab::Retrieval]);
        assert_eq!(model.tabs.iter().filter(|t| t.active).count(), 1);
        assert!(model.version_label.is_none());
        assert!(model.repository_url.is_none());
    }

    #[test]
    fn test_branding_needs_a_title() {
        let session = SessionInfo::guest().with_description("only a description");
        assert!(HeaderModel::build(&session, &site(), Tab::KnowledgeGraph)
            .branding
            .is_none());

        let session = SessionInfo::guest().with_title("  ").with_description("desc");
        assert!(HeaderModel::build(&session, &site(), Tab::KnowledgeGraph)
            .branding
            .is_none());
    }

    #[test]
    fn test_branding_falls_back_to_site_config() {
        let site = SiteConfig {
            title: Some("Team RAG".to_string()),
            description: Some("Shared knowledge base".to_string()),
            ..SiteConfig::default()
        };
        let model = HeaderModel::build(&SessionInfo::guest(), &site, Tab::KnowledgeGraph);
        let branding = model.branding.unwrap();
        assert_eq!(branding.title, "Team RAG");
        assert_eq!(branding.description.as_deref(), Some("Shared knowledge base"));
    }

    #[test]
    fn test_guest_has_no_logout() {
        let model = HeaderModel::build(&SessionInfo::guest(), &site(), Tab::KnowledgeGraph);
        assert!(model.logout.is_none());
    }

    #[test]
    fn test_cycle_wraps() {
        let model = HeaderModel::build(&SessionInfo::user("bob"), &site(), Tab::Retrieval);
        assert_eq!(model.cycle(1), Some(Tab::KnowledgeGraph));
        assert_eq!(model.cycle(-1), Some(Tab::KnowledgeGraph));
        assert_eq!(model.cycle(0), Some(Tab::Retrieval));
    }
}
