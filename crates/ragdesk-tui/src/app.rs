//! TUI Application state and key handling

use crate::navigator::{NavRequest, ReloadFlag, TerminalNavigator};
use crossterm::event::KeyCode;
use ragdesk_core::{
    AuthState, AuthStore, HeaderAction, HeaderController, HeaderModel, RoleGuard, SettingsState,
    SettingsStore, SiteConfig, Tab, UiEvent, VisibilityStore,
};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

/// Which screen fills the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Settings,
    SignedOut,
}

/// TUI Application state
///
/// Built fresh on every reload; nothing here outlives a reload except the
/// settings and auth stores it was given.
pub struct App {
    pub settings: Arc<SettingsState>,
    pub auth: Arc<AuthState>,
    pub site: SiteConfig,
    pub visibility: VisibilityStore,
    guard: RoleGuard,
    controller: HeaderController,
    navigator: Arc<TerminalNavigator>,
    event_rx: broadcast::Receiver<UiEvent>,
    pub screen: Screen,
    pub should_quit: bool,
}

impl App {
    /// `settings` and `auth` must publish on the same event bus
    pub fn new(
        settings: Arc<SettingsState>,
        auth: Arc<AuthState>,
        site: SiteConfig,
        navigator: Arc<TerminalNavigator>,
        reloader: Arc<ReloadFlag>,
    ) -> Self {
        let bus = settings.event_bus().clone();
        let event_rx = bus.subscribe();
        let session = auth.session();
        let visibility =
            VisibilityStore::new(settings.current_tab(), session.is_admin(), bus.clone());
        let guard = RoleGuard::new(settings.clone(), reloader).with_event_bus(bus);
        let controller = HeaderController::new(settings.clone(), navigator.clone());

        Self {
            settings,
            auth,
            site,
            visibility,
            guard,
            controller,
            navigator,
            event_rx,
            screen: Screen::Main,
            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.settings.current_tab()
    }

    pub fn header_model(&self) -> HeaderModel {
        HeaderModel::build(&self.auth.session(), &self.site, self.active_tab())
    }

    /// Run the role guard and visibility recomputation against current state
    pub fn sync(&self) {
        let session = self.auth.session();
        self.guard.check(session.is_user());
        self.visibility
            .observe(self.settings.current_tab(), session.is_admin());
    }

    /// Drain store events and navigation requests (non-blocking)
    pub fn poll_events(&mut self) {
        let mut needs_sync = false;
        loop {
            match self.event_rx.try_recv() {
                Ok(UiEvent::TabChanged(_) | UiEvent::SessionChanged) => needs_sync = true,
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event receiver lagged");
                    needs_sync = true;
                }
                Err(_) => break,
            }
        }
        if needs_sync {
            self.sync();
        }

        for request in self.navigator.drain() {
            self.screen = match request {
                NavRequest::Login => Screen::SignedOut,
                NavRequest::Settings => Screen::Settings,
            };
        }
    }

    /// Handle keyboard input. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.screen {
            Screen::SignedOut => self.handle_signed_out_key(key),
            Screen::Settings => self.handle_settings_key(key),
            Screen::Main => self.handle_main_key(key),
        }
    }

    fn handle_signed_out_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('s') => {
                self.screen = Screen::Main;
                true
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    fn handle_main_key(&mut self, key: KeyCode) -> bool {
        let model = self.header_model();

        let action = match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Tab => model.cycle(1).map(HeaderAction::SelectTab),
            KeyCode::BackTab => model.cycle(-1).map(HeaderAction::SelectTab),
            KeyCode::Char(c) if c.is_ascii_digit() => Tab::from_shortcut(c)
                .filter(|tab| model.tabs.iter().any(|t| t.tab == *tab))
                .map(HeaderAction::SelectTab),
            KeyCode::Char('s') => Some(HeaderAction::OpenSettings),
            KeyCode::Char('g') => model.repository_url.map(HeaderAction::OpenRepository),
            KeyCode::Char('L') => model.logout.map(|_| HeaderAction::Logout),
            _ => None,
        };

        match action {
            Some(action) => {
                self.controller.dispatch(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragdesk_core::{EventBus, SessionInfo};

    fn app(tab: Tab, session: SessionInfo) -> (App, Arc<ReloadFlag>) {
        let bus = EventBus::default_capacity();
        let settings = Arc::new(SettingsState::new(tab, bus.clone()));
        let auth = Arc::new(AuthState::new(session, bus));
        let reloader = Arc::new(ReloadFlag::default());
        let app = App::new(
            settings,
            auth,
            SiteConfig::default(),
            Arc::new(TerminalNavigator::default()),
            reloader.clone(),
        );
        (app, reloader)
    }

    #[test]
    fn test_shortcut_ignores_restricted_tab_for_user() {
        let (mut app, _) = app(Tab::KnowledgeGraph, SessionInfo::user("bob"));

        assert!(!app.handle_key(KeyCode::Char('1')));
        assert_eq!(app.active_tab(), Tab::KnowledgeGraph);

        assert!(app.handle_key(KeyCode::Char('3')));
        assert_eq!(app.active_tab(), Tab::Retrieval);
    }

    #[test]
    fn test_tab_key_cycles_visible_tabs() {
        let (mut app, _) = app(Tab::Retrieval, SessionInfo::user("bob"));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.active_tab(), Tab::KnowledgeGraph);
    }

    #[test]
    fn test_logout_switches_to_signed_out_screen() {
        let (mut app, _) = app(Tab::KnowledgeGraph, SessionInfo::admin("ada"));

        assert!(app.handle_key(KeyCode::Char('L')));
        app.poll_events();
        assert_eq!(app.screen, Screen::SignedOut);
    }

    #[test]
    fn test_guest_cannot_logout() {
        let (mut app, _) = app(Tab::KnowledgeGraph, SessionInfo::guest());

        assert!(!app.handle_key(KeyCode::Char('L')));
        app.poll_events();
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn test_settings_opens_and_closes() {
        let (mut app, _) = app(Tab::KnowledgeGraph, SessionInfo::guest());

        app.handle_key(KeyCode::Char('s'));
        app.poll_events();
        assert_eq!(app.screen, Screen::Settings);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn test_role_downgrade_requests_reload() {
        let (mut app, reloader) = app(Tab::Api, SessionInfo::admin("ada"));
        app.sync();
        assert!(!reloader.take());

        app.auth.set_session(SessionInfo::user("ada"));
        app.poll_events();

        assert!(reloader.take());
        assert_eq!(app.active_tab(), Tab::KnowledgeGraph);
        assert!(!app.visibility.is_visible("api"));
    }
}
