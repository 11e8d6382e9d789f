//! TUI application state: thread, liked set, input, scroll, selection, toasts.

mod messages;

use std::time::Instant;

use ratatui::layout::Rect;

use crate::core::generation::GenerationGate;
use crate::core::message::{Message, MessageId};
use crate::core::thread::LikedSet;

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

/// Short-lived notification in the top-right corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub text: &'static str,
    pub is_error: bool,
    pub until: Instant,
}

pub struct App {
    /// The current thread, oldest first.
    pub(crate) messages: Vec<Message>,
    /// Replies the user liked. Session-only.
    pub(crate) liked: LikedSet,
    /// Input gating and the last send error.
    pub(crate) gate: GenerationGate,
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index; used for Left/Right, insert, Backspace).
    pub(crate) input_cursor: usize,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Landing screen suggestion highlighted with Tab (example prompts, then tiles).
    pub selected_suggestion: Option<usize>,
    /// Assistant reply targeted by like/copy/delete.
    pub(crate) selected_message: Option<MessageId>,
    /// Model ID displayed in the header.
    pub model_name: String,
    /// (msg_idx, start_line, end_line) for each message; updated each draw.
    pub(crate) message_line_ranges: Vec<(usize, usize, usize)>,
    /// Whether to show timestamps next to role labels (from ADAPT_UI_SHOW_TIMESTAMPS).
    pub(crate) show_timestamps: bool,
    /// Rect of history text area; for click hit testing.
    pub(crate) history_area_rect: Option<Rect>,
    /// Mouse is over a message block; used for cursor style.
    pub(crate) hovering_message_block: bool,
    pub(crate) toast: Option<Toast>,
    /// Esc was pressed; next key = Option+key (Mac terminals with "Use option as meta").
    pub(crate) escape_pending: bool,
}

impl App {
    pub fn new(model_name: String, show_timestamps: bool) -> Self {
        Self {
            messages: vec![],
            liked: LikedSet::default(),
            gate: GenerationGate::default(),
            input: String::new(),
            input_cursor: 0,
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            selected_suggestion: None,
            selected_message: None,
            model_name,
            message_line_ranges: vec![],
            show_timestamps,
            history_area_rect: None,
            hovering_message_block: false,
            toast: None,
            escape_pending: false,
        }
    }

    pub(crate) fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }

    pub(crate) fn show_toast(&mut self, text: &'static str, is_error: bool, now: Instant) {
        self.toast = Some(Toast {
            text,
            is_error,
            until: now + super::constants::TOAST_DURATION,
        });
    }

    /// Toast still visible at `now`; expired toasts are dropped.
    pub(crate) fn active_toast(&mut self, now: Instant) -> Option<&Toast> {
        if self.toast.as_ref().is_some_and(|t| t.until <= now) {
            self.toast = None;
        }
        self.toast.as_ref()
    }

    /// Move the suggestion highlight forward (or back), wrapping around.
    pub(crate) fn cycle_suggestion(&mut self, forward: bool) {
        let count = super::constants::suggestion_count();
        self.selected_suggestion = Some(match (self.selected_suggestion, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        let at = self.input.floor_char_boundary(self.input_cursor.min(self.input.len()));
        self.input.insert(at, c);
        self.input_cursor = at + c.len_utf8();
        self.gate.clear_error();
    }

    pub(crate) fn delete_char_before_cursor(&mut self) {
        let at = self.input.floor_char_boundary(self.input_cursor.min(self.input.len()));
        if let Some((start, _)) = self.input[..at].char_indices().next_back() {
            self.input.replace_range(start..at, "");
            self.input_cursor = start;
            self.gate.clear_error();
        }
    }

    pub(crate) fn move_cursor_left(&mut self) {
        let at = self.input_cursor.min(self.input.len());
        self.input_cursor = self.input[..at]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub(crate) fn move_cursor_right(&mut self) {
        let at = self.input_cursor.min(self.input.len());
        self.input_cursor = self.input[at..]
            .chars()
            .next()
            .map(|c| at + c.len_utf8())
            .unwrap_or(at);
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }
}

#[cfg(test)]
mod tests;
