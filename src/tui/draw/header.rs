//! Header: logo, app name and tagline, clear-chat hint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::App;
use super::super::constants::{LIKED, LOGO_IDLE};
use super::spinner_frame;

const TAGLINE: &str = "Dynamic Generative UI • Terminal";

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect, accent: Color) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(area);

    let logo_symbol = if app.gate.shows_status() {
        spinner_frame()
    } else {
        LOGO_IDLE
    };
    let title = Line::from(vec![
        Span::styled(format!("{} ", logo_symbol), Style::default().fg(accent)),
        Span::styled(
            app::DISPLAY_NAME,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", TAGLINE), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    if app.has_messages() {
        let mut spans = Vec::new();
        if !app.liked.is_empty() {
            spans.push(Span::styled(
                format!("♥ {}  ", app.liked.len()),
                Style::default().fg(LIKED),
            ));
        }
        spans.push(Span::styled("Ctrl+N ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Clear Chat", Style::default().fg(accent)));
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            chunks[1],
        );
    }
}
