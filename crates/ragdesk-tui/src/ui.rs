//! Frame layout: header, active tab body, footer

use crate::app::{App, Screen};
use crate::components::HeaderBar;
use ragdesk_core::{AuthStore, HeaderModel, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let model = app.header_model();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header + bottom border
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let header_inner = header_block.inner(chunks[0]);
    frame.render_widget(header_block, chunks[0]);
    frame.render_widget(HeaderBar::new(&model), header_inner);

    match app.screen {
        Screen::SignedOut => render_signed_out(frame, chunks[1], &model),
        Screen::Main | Screen::Settings => render_tab_body(frame, chunks[1], app),
    }

    render_footer(frame, chunks[2], &model);

    if app.screen == Screen::Settings {
        render_settings(frame, chunks[1], app);
    }
}

fn render_tab_body(frame: &mut Frame, area: Rect, app: &App) {
    let tab = app.active_tab();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", tab.label()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(vec![
            Span::styled("Panel: ", Style::default().fg(Color::DarkGray)),
            Span::raw(tab.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Visible: ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.visibility.is_visible(tab.as_str()).to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_signed_out(frame: &mut Frame, area: Rect, model: &HeaderModel) {
    let site = model
        .branding
        .as_ref()
        .map(|b| b.title.as_str())
        .unwrap_or("ragdesk");

    let text = vec![
        Line::from(Span::styled("Signed out", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("Sign in to {} again to continue.", site)),
        Line::from(Span::styled(
            "Press q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, model: &HeaderModel) {
    // Terminal stand-in for the title tooltip
    let description = model
        .branding
        .as_ref()
        .and_then(|b| b.description.clone())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Color::Green)),
        Span::raw(" switch  "),
        Span::styled("q", Style::default().fg(Color::Green)),
        Span::raw(" quit  "),
        Span::styled(description, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let session = app.auth.session();
    let muted = Style::default().fg(Color::DarkGray);
    let role = if session.guest_mode {
        "guest"
    } else if session.is_admin() {
        "admin"
    } else if session.is_user() {
        "user"
    } else {
        "none"
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("User:    ", muted),
            Span::raw(session.username.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![Span::styled("Role:    ", muted), Span::raw(role)]),
        Line::from(""),
        Line::from(Span::styled(
            "Tab visibility",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let snapshot = app.visibility.snapshot();
    for tab in Tab::all() {
        let visible = snapshot.is_visible(tab.as_str());
        lines.push(Line::from(vec![
            Span::styled(
                if visible { "  ● " } else { "  ○ " },
                Style::default().fg(if visible {
                    Color::Green
                } else {
                    Color::DarkGray
                }),
            ),
            Span::raw(tab.label()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .title_bottom(Line::from(" Esc close ").right_aligned());

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
