//! Prompt input, generation status line, and bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::{
    ACCENT, FOLLOW_UP_PLACEHOLDER, GENERATING_STATUS, LANDING_PLACEHOLDER,
};
use super::super::shortcuts::labels;
use super::spinner_frame;

pub(crate) fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars()
                .take(max_width.saturating_sub(1))
                .collect::<String>()
        )
    }
}

fn placeholder(app: &App) -> &'static str {
    if app.gate.shows_status() {
        GENERATING_STATUS
    } else if app.has_messages() {
        FOLLOW_UP_PLACEHOLDER
    } else {
        LANDING_PLACEHOLDER
    }
}

/// Single-line input box. The view scrolls horizontally to keep the cursor visible.
pub(crate) fn draw_input_block(f: &mut Frame, app: &App, input_area: Rect) {
    let disabled = app.gate.is_input_disabled();
    let border_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(ACCENT)
    };
    let send_label = if disabled {
        format!(" {} Generating ", spinner_frame())
    } else {
        " Send ⏎ ".to_string()
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_bottom(Line::from(send_label).alignment(Alignment::Right));
    let inner = input_block.inner(input_area);
    let width = inner.width as usize;

    // Must be at char boundary or str[..n] panics (UTF-8 multi-byte chars: é, 你, emoji).
    let cursor_byte = app
        .input
        .floor_char_boundary(app.input_cursor.min(app.input.len()));
    let cursor_col = app.input[..cursor_byte].chars().count();
    let skip = cursor_col.saturating_sub(width.saturating_sub(1));

    let content = if app.input.is_empty() {
        Span::styled(placeholder(app), Style::default().fg(Color::DarkGray))
    } else {
        let visible: String = app.input.chars().skip(skip).take(width).collect();
        let style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(visible, style)
    };
    f.render_widget(
        Paragraph::new(Line::from(content)).block(input_block),
        input_area,
    );

    if !disabled {
        let cx = inner.x + (cursor_col - skip).min(width) as u16;
        f.set_cursor_position(Position::new(cx, inner.y));
    }
}

/// "Generating UI..." while a request is pending, else the last send error, else nothing.
pub(crate) fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.gate.shows_status() {
        Line::from(vec![
            Span::styled(format!("{} ", spinner_frame()), Style::default().fg(ACCENT)),
            Span::styled(
                GENERATING_STATUS,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else if let Some(err) = app.gate.error() {
        Line::from(Span::styled(err, Style::default().fg(Color::Red)))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Draw the bottom bar with the model on the left and keyboard shortcuts on the right.
pub(crate) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(64)])
        .split(area);
    let model_area = chunks[0];
    let shortcuts_area = chunks[1];

    let model = truncate_with_ellipsis(&app.model_name, model_area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            model,
            Style::default().fg(Color::DarkGray),
        ))),
        model_area,
    );
    let shortcuts = labels::bottom_bar(app.gate.shows_status(), app.has_messages());
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Right),
        shortcuts_area,
    );
}

#[cfg(test)]
mod tests {
    use super::truncate_with_ellipsis;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn truncate_exact_width_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        let result = truncate_with_ellipsis("hello world", 8);
        assert_eq!(result.chars().count(), 8); // 7 chars + ellipsis
        assert!(result.ends_with('…'));
    }

    #[test]
    fn truncate_utf8_chars() {
        let result = truncate_with_ellipsis("café", 3);
        assert!(result.ends_with('…'));
        assert!(result.len() <= 5); // é is 2 bytes
    }

    #[test]
    fn truncate_max_width_one() {
        let result = truncate_with_ellipsis("ab", 1);
        assert_eq!(result, "…");
    }
}
