//! Chat history: message blocks, liked markers, selection, typing indicator, scrollbar.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::Message;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, LIKED};
use super::super::text::content_lines;

const ASSISTANT_LABEL: &str = "Tambo AI";
const TYPING_INDICATOR: &str = "● ● ●";

/// Repeat a character to fill width (approximate; chars may have different display widths).
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Local wall-clock "HH:MM" for a Unix timestamp.
fn format_time(unix_secs: u64) -> Option<String> {
    let utc = DateTime::from_timestamp(i64::try_from(unix_secs).ok()?, 0)?;
    Some(utc.with_timezone(&Local).format("%H:%M").to_string())
}

struct BlockStyle {
    liked: bool,
    selected: bool,
    timestamp: Option<String>,
}

/// Add one message block with borders. Returns (start_line, end_line) in `lines`.
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    msg: &Message,
    wrap_width: usize,
    style: BlockStyle,
) -> (usize, usize) {
    let border_color = if style.selected {
        ACCENT
    } else if msg.is_user() {
        Color::DarkGray
    } else {
        ACCENT_SECONDARY
    };
    let border_style = Style::default().fg(border_color);
    let content_width = wrap_width.saturating_sub(4).max(1);
    let start = lines.len();

    // Top border: "┌─ Label 14:32 ♥ ───...──┐"
    let label = if msg.is_user() { "You" } else { ASSISTANT_LABEL };
    let mut top = vec![Span::styled("┌─ ", border_style)];
    top.push(Span::styled(
        label,
        border_style.add_modifier(Modifier::BOLD),
    ));
    let mut used = 3 + label.chars().count();
    if let Some(time) = style.timestamp {
        used += time.chars().count() + 1;
        top.push(Span::styled(
            format!(" {}", time),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if style.liked {
        used += 2;
        top.push(Span::styled(" ♥", Style::default().fg(LIKED)));
    }
    top.push(Span::styled(
        format!(" {}┐", repeat_char('─', wrap_width.saturating_sub(used + 2))),
        border_style,
    ));
    lines.push(Line::from(top));

    let body = content_lines(&msg.content, content_width, Style::default());
    for line in body {
        let mut spans = vec![Span::styled("│ ", border_style)];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }

    if let Some(component) = &msg.component {
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(
                format!("[component: {}]", component.title()),
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let bottom_line = format!("└{}┘", repeat_char('─', wrap_width.saturating_sub(2)));
    lines.push(Line::from(Span::styled(bottom_line, border_style)));

    (start, lines.len())
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;
    app.history_area_rect = Some(text_area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut message_line_ranges: Vec<(usize, usize, usize)> = Vec::new();
    let target = app.selected_message.as_ref();

    for (msg_idx, msg) in app.messages.iter().enumerate() {
        let style = BlockStyle {
            liked: msg.is_assistant() && app.liked.contains(&msg.id),
            selected: target == Some(&msg.id),
            timestamp: if app.show_timestamps {
                msg.timestamp.and_then(format_time)
            } else {
                None
            },
        };
        let (start, end) = add_message_block(&mut lines, msg, wrap_width, style);
        message_line_ranges.push((msg_idx, start, end));
    }

    if app.gate.is_generating() && !app.is_streaming_reply() {
        lines.push(Line::from(Span::styled(
            format!("  {}", TYPING_INDICATOR),
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::SLOW_BLINK),
        )));
    }

    app.message_line_ranges = message_line_ranges;

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line().min(max_scroll);
    let visible_lines: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible).collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
