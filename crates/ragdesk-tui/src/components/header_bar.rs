//! Ratatui rendering of the site header row

use ragdesk_core::HeaderModel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

/// Width reserved for the branding block
const BRANDING_WIDTH: u16 = 24;

/// Single-row site header: branding, tab strip, session controls
pub struct HeaderBar<'a> {
    model: &'a HeaderModel,
}

impl<'a> HeaderBar<'a> {
    pub fn new(model: &'a HeaderModel) -> Self {
        Self { model }
    }

    fn branding_line(&self) -> Line<'static> {
        match &self.model.branding {
            Some(branding) => Line::from(vec![
                Span::styled("◈ ", Style::default().fg(Color::Green)),
                Span::styled(
                    branding.title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::default(),
        }
    }

    fn controls_line(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Green);
        let muted = Style::default().fg(Color::DarkGray);
        let mut spans = Vec::new();

        if let Some(version) = &self.model.version_label {
            spans.push(Span::styled(format!("{} ", version), muted));
        }
        if self.model.repository_url.is_some() {
            spans.push(Span::styled("[g]", key));
            spans.push(Span::raw("repo "));
        }
        spans.push(Span::styled("[s]", key));
        spans.push(Span::raw("settings"));
        if let Some(logout) = &self.model.logout {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("[L]", key));
            spans.push(Span::raw(logout.tooltip.clone()));
        }

        Line::from(spans)
    }

    /// Columns needed by the controls block
    fn controls_width(&self) -> u16 {
        self.controls_line().width() as u16
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BRANDING_WIDTH),
                Constraint::Min(0),
                Constraint::Length(self.controls_width()),
            ])
            .split(area);

        Paragraph::new(self.branding_line()).render(chunks[0], buf);

        let titles: Vec<Line> = self
            .model
            .tabs
            .iter()
            .map(|t| Line::from(format!("{} {}", t.tab.shortcut(), t.label)))
            .collect();
        let selected = self.model.tabs.iter().position(|t| t.active);

        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", Style::default().fg(Color::DarkGray)))
            .render(chunks[1], buf);

        Paragraph::new(self.controls_line())
            .alignment(Alignment::Right)
            .render(chunks[2], buf);
    }
}
