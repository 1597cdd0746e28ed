//! Leptos UI components

mod app_settings;
mod header;
mod signed_out;
mod tab_panel;

pub use app_settings::AppSettings;
pub use header::{NavigationTab, SiteHeader, TabsNavigation};
pub use signed_out::SignedOut;
pub use tab_panel::TabPanel;
