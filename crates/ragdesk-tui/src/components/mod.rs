//! Reusable TUI components

mod header_bar;

pub use header_bar::HeaderBar;
