//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                                  |
//! |-----------------|---------------------------------------|
//! | Send            | Enter                                 |
//! | Suggestions     | Tab / Shift+Tab (landing screen)      |
//! | Scroll          | ↑ ↓ PageUp PageDown                   |
//! | Select message  | Alt+↑ Alt+↓, Esc+k Esc+j              |
//! | Like            | Alt+L, Esc+l                          |
//! | Copy            | Alt+C, Esc+c                          |
//! | Delete          | Alt+D, Esc+d                          |
//! | Clear chat      | Ctrl+N                                |
//! | Cancel          | Esc (while generating)                |
//! | Quit            | Ctrl+C                                |
//!
//! On macOS, Option+key sends Esc+key when the terminal has "Use option as meta key"
//! enabled, so every Alt shortcut also has an Esc-prefixed form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Toggle the liked marker on the selected reply
    Like,
    /// Copy the selected reply to the clipboard
    Copy,
    /// Delete the selected reply and the prompt before it
    Delete,
    /// Select the previous assistant reply
    SelectPrev,
    /// Select the next assistant reply
    SelectNext,
    /// Clear chat (Ctrl+N)
    ClearChat,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Handles Esc+key sequence when terminal
    /// sends Option as Meta (e.g. macOS "Use option as meta key").
    pub fn match_key(key: &KeyEvent, escape_pending: bool) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if escape_pending || key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('l') => Some(Shortcut::Like),
                KeyCode::Char('c') => Some(Shortcut::Copy),
                KeyCode::Char('d') => Some(Shortcut::Delete),
                KeyCode::Up | KeyCode::Char('k') => Some(Shortcut::SelectPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Shortcut::SelectNext),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ClearChat)
            }
            _ => None,
        }
    }

    /// True if key is Escape (start of Option+key sequence on some terminals).
    pub fn is_escape(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press && key.code == KeyCode::Esc
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn is_escape() {
        assert!(Shortcut::is_escape(&key(KeyCode::Esc, KeyModifiers::empty())));
        assert!(!Shortcut::is_escape(&key(
            KeyCode::Char('c'),
            KeyModifiers::empty()
        )));
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_clear_chat_ctrl_n() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL), false),
            Some(Shortcut::ClearChat)
        );
    }

    #[test]
    fn match_alt_actions() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::ALT), false),
            Some(Shortcut::Like)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::ALT), false),
            Some(Shortcut::Copy)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('d'), KeyModifiers::ALT), false),
            Some(Shortcut::Delete)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Up, KeyModifiers::ALT), false),
            Some(Shortcut::SelectPrev)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Down, KeyModifiers::ALT), false),
            Some(Shortcut::SelectNext)
        );
    }

    #[test]
    fn match_escape_pending_letters() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::empty()), true),
            Some(Shortcut::Like)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('k'), KeyModifiers::empty()), true),
            Some(Shortcut::SelectPrev)
        );
    }

    #[test]
    fn plain_letters_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::empty()), false),
            None
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Up, KeyModifiers::empty()), false),
            None
        );
    }

    #[test]
    fn match_key_release_ignored() {
        let key_release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&key_release, false), None);
    }
}

/// Labels for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar(is_generating: bool, has_messages: bool) -> Text<'static> {
        if is_generating {
            return Text::from(Line::from(vec![
                Span::styled("Esc ", Color::Yellow),
                Span::raw("cancel"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]));
        }
        if !has_messages {
            return Text::from(Line::from(vec![
                Span::styled("Enter ", DIM),
                Span::raw("send"),
                Span::styled("  Tab ", DIM),
                Span::raw("suggestions"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]));
        }
        Text::from(vec![
            Line::from(vec![
                Span::styled("Enter ", DIM),
                Span::raw("send"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
                Span::styled("  Alt+↑↓ ", DIM),
                Span::raw("select"),
            ]),
            Line::from(vec![
                Span::styled("Alt+L ", DIM),
                Span::raw("like"),
                Span::styled("  Alt+C ", DIM),
                Span::raw("copy"),
                Span::styled("  Alt+D ", DIM),
                Span::raw("delete"),
                Span::styled("  Ctrl+N ", DIM),
                Span::raw("clear chat"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]),
        ])
    }
}
