//! Terminal implementations of the navigation and reload seams
//!
//! Requests are queued and drained by the event loop; nothing here touches
//! the terminal directly.

use parking_lot::Mutex;
use ragdesk_core::{Navigator, Reloader};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Screen change requested through the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Login,
    Settings,
}

#[derive(Default)]
pub struct TerminalNavigator {
    pending: Mutex<Vec<NavRequest>>,
}

impl TerminalNavigator {
    pub fn drain(&self) -> Vec<NavRequest> {
        std::mem::take(&mut *self.pending.lock())
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_to_login(&self) {
        self.pending.lock().push(NavRequest::Login);
    }

    fn open_settings(&self) {
        self.pending.lock().push(NavRequest::Settings);
    }

    fn open_external(&self, url: &str) {
        debug!(url, "Opening external link");
        if let Err(e) = open::that(url) {
            warn!(url, error = %e, "Failed to open external link");
        }
    }
}

/// Set by the role guard; the event loop rebuilds the app when it sees it
#[derive(Default)]
pub struct ReloadFlag(AtomicBool);

impl ReloadFlag {
    /// Read and clear
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

impl Reloader for ReloadFlag {
    fn reload(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigator_queues_requests_in_order() {
        let nav = TerminalNavigator::default();
        nav.open_settings();
        nav.navigate_to_login();

        assert_eq!(nav.drain(), vec![NavRequest::Settings, NavRequest::Login]);
        assert!(nav.drain().is_empty());
    }

    #[test]
    fn test_reload_flag_take_clears() {
        let flag = ReloadFlag::default();
        assert!(!flag.take());
        flag.reload();
        flag.reload();
        assert!(flag.take());
        assert!(!flag.take());
    }
}
