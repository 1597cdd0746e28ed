//! ragdesk - RAG console shell

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ragdesk_core::{AuthState, EventBus, Role, SessionInfo, SettingsState, SiteConfig, Tab};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Filter used when `RAGDESK_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(
    name = "ragdesk",
    version,
    about = "RAG console shell",
    long_about = "Site header, tab navigation and session controls for a RAG console.\n\
                  \n\
                  Examples:\n\
                    ragdesk --role admin --username ada      # Run TUI (default)\n\
                    ragdesk --role user --tab documents      # User on a restricted tab: redirected\n\
                    ragdesk header --json                    # Print the header model\n\
                  \n\
                  Environment Variables:\n\
                    RAGDESK_CONFIG                           # Site config file (TOML)\n\
                    RAGDESK_ROLE                             # admin | user\n\
                    RAGDESK_GUEST                            # Guest session (no logout)\n\
                    RAGDESK_USERNAME                         # Signed-in user\n\
                    RAGDESK_LOG                              # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Site config file (default: <config dir>/ragdesk/site.toml)
    #[arg(long, env = "RAGDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Role of the signed-in account
    #[arg(long, env = "RAGDESK_ROLE")]
    role: Option<Role>,

    /// Guest session (auth disabled)
    #[arg(long, env = "RAGDESK_GUEST")]
    guest: bool,

    /// Signed-in user name
    #[arg(long, env = "RAGDESK_USERNAME")]
    username: Option<String>,

    /// Initially active tab
    #[arg(long, default_value = "documents")]
    tab: Tab,

    /// Core version reported by the server
    #[arg(long)]
    core_version: Option<String>,

    /// API version reported by the server
    #[arg(long)]
    api_version: Option<String>,

    /// Title override (takes precedence over the site config)
    #[arg(long)]
    title: Option<String>,

    /// Description override
    #[arg(long)]
    description: Option<String>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print the header model and tab visibility, then exit
    Header {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Tui);

    init_logging(matches!(mode, Mode::Tui))?;

    let site = SiteConfig::resolve(cli.config.as_deref()).context("Failed to load site config")?;

    let session = SessionInfo {
        role: cli.role,
        guest_mode: cli.guest,
        username: cli.username,
        core_version: cli.core_version,
        api_version: cli.api_version,
        title: cli.title,
        description: cli.description,
    };
    info!(role = ?session.role, guest = session.guest_mode, tab = %cli.tab, "Starting ragdesk");

    let bus = EventBus::default_capacity();
    let settings = Arc::new(SettingsState::new(cli.tab, bus.clone()));
    let auth = Arc::new(AuthState::new(session, bus));

    match mode {
        Mode::Tui => ragdesk_tui::run(settings, auth, site),
        Mode::Header { json } => cli::run_header(settings, auth, &site, json),
    }
}

/// TUI mode logs to `<cache dir>/ragdesk/ragdesk.log`; everything else to stderr
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("RAGDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if to_file {
        let dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("ragdesk");
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let path = dir.join("ragdesk.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_log_filter_is_info() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
