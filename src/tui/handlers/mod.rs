//! Event handlers for the TUI: keyboard and mouse.

mod chat_spawn;
mod input;
mod selection;
mod shortcuts;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::generation::GenerationStage;
use crate::core::llm;

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

use self::shortcuts::handle_shortcut;

/// Holds receivers for a request in progress (stages, streamed content, final result).
pub struct PendingChat {
    pub stage_rx: mpsc::Receiver<GenerationStage>,
    pub stream_rx: mpsc::Receiver<String>,
    pub result_rx: mpsc::Receiver<Result<llm::Reply, llm::ChatError>>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Set cursor to pointer (hand) or default. Uses OSC 22 (Kitty, iTerm2, Ghostty, Foot).
pub fn set_cursor_shape(pointer: bool) {
    use std::io::Write;
    let seq = if pointer {
        b"\x1b]22;pointer\x07"
    } else {
        b"\x1b]22;default\x07"
    };
    let _ = std::io::stdout().write_all(seq);
    let _ = std::io::stdout().flush();
}

/// True when Esc would start Option+key (escape_pending) rather than cancel a request.
pub(crate) fn would_esc_start_meta_sequence(
    key: &crossterm::event::KeyEvent,
    pending_chat: &Option<PendingChat>,
) -> bool {
    Shortcut::is_escape(key) && pending_chat.is_none()
}

/// Handle a mouse event.
pub fn handle_mouse(mouse: crossterm::event::MouseEvent, app: &mut App) -> HandleResult {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            selection::select_message_at(app, pos);
        }
        MouseEventKind::Moved => {
            let over_message = selection::hit_test_message(app, pos).is_some();
            if over_message != app.hovering_message_block {
                app.hovering_message_block = over_message;
                set_cursor_shape(over_message);
            }
        }
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub pending_chat: &'a mut Option<PendingChat>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: crossterm::event::KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        config,
        pending_chat,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Esc+key sequence (Option as Meta on Mac terminals)
    if app.escape_pending {
        app.escape_pending = false;
        if let Some(shortcut) = Shortcut::match_key(&key, true) {
            return handle_shortcut(shortcut, app, pending_chat);
        }
    }

    if let Some(shortcut) = Shortcut::match_key(&key, false) {
        return handle_shortcut(shortcut, app, pending_chat);
    }

    // Esc: cancel in-flight request, else start Option+key sequence.
    if Shortcut::is_escape(&key) {
        if let Some(pc) = pending_chat.as_ref() {
            log::info!("cancelling in-flight request");
            pc.cancel_token.cancel();
            return HandleResult::Continue;
        }
        app.escape_pending = true;
        return HandleResult::Continue;
    }

    input::handle_main_input(key.code, key.modifiers, app, config, pending_chat, rt)
}
