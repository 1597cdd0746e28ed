//! ragdesk-core - Core library for ragdesk
//!
//! Provides the tab model, session model, store seams, tab visibility store,
//! role-downgrade guard and the header view model shared by the web and TUI
//! front ends.

pub mod config;
pub mod error;
pub mod event;
pub mod guard;
pub mod header;
pub mod session;
pub mod store;
pub mod tab;
pub mod visibility;

pub use config::SiteConfig;
pub use error::CoreError;
pub use event::{EventBus, UiEvent};
pub use guard::{GuardOutcome, RoleGuard};
pub use header::{Branding, HeaderAction, HeaderController, HeaderModel, LogoutControl, NavTab};
pub use session::{Role, SessionInfo};
pub use store::{AuthState, AuthStore, Navigator, Reloader, SettingsState, SettingsStore};
pub use tab::Tab;
pub use visibility::{VisibilityMap, VisibilityStore};
