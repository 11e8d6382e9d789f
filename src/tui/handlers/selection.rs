//! Mouse hit-testing over the rendered history.

use ratatui::layout::Position;

use super::super::app::App;

/// Check if position is over a message block; return Some(msg_idx) if so.
pub(crate) fn hit_test_message(app: &App, pos: Position) -> Option<usize> {
    let history_rect = app.history_area_rect?;
    if !history_rect.contains(pos) {
        return None;
    }
    let rel_row = pos.y.saturating_sub(history_rect.y) as usize;
    let clicked_line = app.scroll_line() + rel_row;
    app.message_line_ranges
        .iter()
        .find_map(|&(msg_idx, start, end)| {
            if start <= clicked_line && clicked_line < end {
                Some(msg_idx)
            } else {
                None
            }
        })
}

/// Select the assistant reply under the pointer. Clicks on user prompts are ignored.
pub(crate) fn select_message_at(app: &mut App, pos: Position) -> bool {
    let Some(msg_idx) = hit_test_message(app, pos) else {
        return false;
    };
    match app.messages.get(msg_idx) {
        Some(msg) if msg.is_assistant() => {
            app.selected_message = Some(msg.id.clone());
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn click_selects_assistant_reply() {
        let mut app = App::new("m".to_string(), false);
        app.push_user("q");
        app.append_assistant_chunk("a");
        app.history_area_rect = Some(Rect::new(0, 2, 40, 10));
        app.message_line_ranges = vec![(0, 0, 3), (1, 3, 6)];
        assert!(!select_message_at(&mut app, Position::new(1, 3)));
        assert!(select_message_at(&mut app, Position::new(1, 6)));
        assert_eq!(app.selected_message.as_ref(), Some(&app.messages[1].id));
        assert!(hit_test_message(&app, Position::new(1, 0)).is_none());
    }
}
