//! ragdesk-web - Web frontend for ragdesk using Leptos

#![recursion_limit = "1024"]

pub mod app;
pub mod browser;
pub mod components;
pub mod context;
pub mod visibility;

pub use app::App;
pub use context::{AuthContext, SettingsContext};
pub use visibility::{use_tab_visibility, TabVisibilityContext, TabVisibilityProvider};
