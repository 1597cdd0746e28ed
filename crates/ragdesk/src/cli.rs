//! `header` command: evaluate the guard, then print the header model

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use ragdesk_core::{
    AuthState, AuthStore, GuardOutcome, HeaderModel, Reloader, RoleGuard, SettingsState,
    SettingsStore, SiteConfig, VisibilityMap, VisibilityStore,
};
use std::sync::Arc;
use tracing::info;

/// Nothing to reload in a one-shot command
struct LogReloader;

impl Reloader for LogReloader {
    fn reload(&self) {
        info!("Reload requested (no-op outside the TUI)");
    }
}

pub fn run_header(
    settings: Arc<SettingsState>,
    auth: Arc<AuthState>,
    site: &SiteConfig,
    json: bool,
) -> Result<()> {
    let bus = settings.event_bus().clone();
    let session = auth.session();

    let guard =
        RoleGuard::new(settings.clone(), Arc::new(LogReloader)).with_event_bus(bus.clone());
    let outcome = guard.check(session.is_user());

    let visibility = VisibilityStore::new(settings.current_tab(), session.is_admin(), bus);
    let model = HeaderModel::build(&session, site, settings.current_tab());

    if json {
        let output = serde_json::json!({
            "guard": outcome_label(outcome),
            "header": model,
            "visibility": visibility.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", header_table(&model));
        println!("{}", visibility_table(&visibility.snapshot()));
        if let GuardOutcome::Redirected { from } = outcome {
            println!(
                "Tab '{}' is restricted for this role; moved to '{}'",
                from,
                settings.current_tab()
            );
        }
    }

    Ok(())
}

pub(crate) fn outcome_label(outcome: GuardOutcome) -> String {
    match outcome {
        GuardOutcome::Skipped => "skipped".to_string(),
        GuardOutcome::Compliant => "compliant".to_string(),
        GuardOutcome::Redirected { from } => format!("redirected from {}", from),
    }
}

pub(crate) fn header_table(model: &HeaderModel) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Element", "Value"]);

    let absent = || Cell::new("-").fg(Color::DarkGrey);

    match &model.branding {
        Some(b) => {
            table.add_row(vec![Cell::new("Title"), Cell::new(&b.title)]);
            table.add_row(vec![
                Cell::new("Tooltip"),
                b.description.as_deref().map(Cell::new).unwrap_or_else(absent),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Title"), absent()]);
        }
    }

    let tabs = model
        .tabs
        .iter()
        .map(|t| {
            if t.active {
                format!("[{}]", t.label)
            } else {
                t.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    table.add_row(vec![Cell::new("Tabs"), Cell::new(tabs)]);

    table.add_row(vec![
        Cell::new("Version"),
        model.version_label.as_deref().map(Cell::new).unwrap_or_else(absent),
    ]);
    table.add_row(vec![
        Cell::new("Repository"),
        model.repository_url.as_deref().map(Cell::new).unwrap_or_else(absent),
    ]);
    table.add_row(vec![Cell::new("Settings"), Cell::new("shown")]);
    table.add_row(vec![
        Cell::new("Logout"),
        model
            .logout
            .as_ref()
            .map(|l| Cell::new(&l.tooltip))
            .unwrap_or_else(absent),
    ]);

    table
}

pub(crate) fn visibility_table(map: &VisibilityMap) -> Table {
    let mut entries: Vec<(&str, bool)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table.set_header(vec!["Tab", "Visible"]);
    for (id, visible) in entries {
        let cell = if visible {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };
        table.add_row(vec![Cell::new(id), cell]);
    }
    table
}
