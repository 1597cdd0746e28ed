//! ragdesk-tui - TUI frontend for ragdesk using Ratatui

pub mod app;
pub mod components;
pub mod navigator;
pub mod ui;

pub use app::App;

use crate::navigator::{ReloadFlag, TerminalNavigator};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ragdesk_core::{AuthState, SettingsState, SiteConfig};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run the TUI application
///
/// `settings` and `auth` outlive reloads; everything else is rebuilt.
pub fn run(settings: Arc<SettingsState>, auth: Arc<AuthState>, site: SiteConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, settings, auth, site);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: Arc<SettingsState>,
    auth: Arc<AuthState>,
    site: SiteConfig,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    'reload: loop {
        let reloader = Arc::new(ReloadFlag::default());
        let mut app = App::new(
            settings.clone(),
            auth.clone(),
            site.clone(),
            Arc::new(TerminalNavigator::default()),
            reloader.clone(),
        );
        app.sync();

        loop {
            if reloader.take() {
                info!("Reloading application state");
                terminal.clear()?;
                continue 'reload;
            }

            app.poll_events();

            terminal.draw(|f| ui::render(f, &app))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                return Ok(());
            }
        }
    }
}
