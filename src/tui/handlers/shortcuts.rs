//! Shortcut key handling (message actions, selection, clear chat).

use std::time::Instant;

use crate::tui::shortcuts::Shortcut;

use super::super::app::App;
use super::{HandleResult, PendingChat};

pub(super) fn handle_shortcut(
    shortcut: Shortcut,
    app: &mut App,
    pending_chat: &mut Option<PendingChat>,
) -> HandleResult {
    match shortcut {
        Shortcut::Like => app.toggle_like_selected(),
        Shortcut::Copy => app.copy_selected(Instant::now()),
        Shortcut::Delete => {
            // The reply being streamed stays in place until the result arrives.
            if pending_chat.is_none() {
                app.delete_selected();
            }
        }
        Shortcut::SelectPrev => app.select_reply(false),
        Shortcut::SelectNext => app.select_reply(true),
        Shortcut::ClearChat => {
            if let Some(pc) = pending_chat.take() {
                pc.cancel_token.cancel();
            }
            app.clear_chat();
        }
        Shortcut::Quit => return HandleResult::Break,
    }
    HandleResult::Continue
}
