//! TUI rendering: landing screen, conversation split view, and toast.

mod header;
mod history;
mod input;
mod landing;
mod preview;

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::App;
use super::constants::{ACCENT, INPUT_LINES, LOGO_THINKING, PREVIEW_PERCENT};

const HEADER_HEIGHT: u16 = 2;
const SPINNER_FRAME_MS: u128 = 120;

/// Current spinner frame, advanced by wall-clock time.
pub(crate) fn spinner_frame() -> &'static str {
    static START: OnceLock<Instant> = OnceLock::new();
    let elapsed = START.get_or_init(Instant::now).elapsed().as_millis();
    let idx = (elapsed / SPINNER_FRAME_MS) as usize % LOGO_THINKING.len();
    LOGO_THINKING[idx]
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    if !app.has_messages() {
        app.history_area_rect = None;
        app.message_line_ranges.clear();
        landing::draw_landing(f, app, area);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)])
            .split(area);
        header::draw_header(f, app, rows[0], ACCENT);

        let (chat_area, preview_area) = if app.last_component().is_some() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(100 - PREVIEW_PERCENT),
                    Constraint::Percentage(PREVIEW_PERCENT),
                ])
                .split(rows[1]);
            (cols[0], Some(cols[1]))
        } else {
            (rows[1], None)
        };

        let chat = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(INPUT_LINES),
                Constraint::Length(1),
            ])
            .split(chat_area);
        history::draw_history(f, app, chat[0]);
        input::draw_status_line(f, app, chat[1]);
        input::draw_input_block(f, app, chat[2]);
        input::draw_bottom_bar(f, app, chat[3]);

        if let (Some(component), Some(preview_area)) = (app.last_component(), preview_area) {
            preview::draw_preview(f, component, preview_area);
        }
    }

    draw_toast(f, app, area);
}

/// Top right, below the header. Opaque background so it's visible over history.
fn draw_toast(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(toast) = app.active_toast(Instant::now()) else {
        return;
    };
    let text = format!(" {} ", toast.text);
    let color = if toast.is_error { Color::Red } else { ACCENT };
    let toast_width = (text.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width,
        height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
    };
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(Line::from(text))
        .block(block)
        .style(Style::default().fg(color).bg(Color::Black));
    f.render_widget(para, toast_area);
}
