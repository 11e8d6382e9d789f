//! Handler for main input (prompt editing, submit, suggestions, scroll).

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use tokio::runtime::Runtime;

use crate::core::config::Config;

use super::super::app::App;
use super::super::constants;
use super::PendingChat;
use super::chat_spawn;

/// Submit `prompt` on the current thread. Blank prompts and submits while input is
/// disabled are ignored; returns true when a request was spawned.
pub(crate) fn submit_prompt(
    raw: &str,
    app: &mut App,
    config: &Arc<Config>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> bool {
    let prompt = raw.trim();
    if prompt.is_empty() || pending_chat.is_some() {
        return false;
    }
    if !app.gate.begin_submit(Instant::now()) {
        return false;
    }
    log::info!("submitting prompt ({} chars)", prompt.chars().count());
    let history = app.messages.clone();
    app.push_user(prompt);
    app.selected_suggestion = None;
    *pending_chat = Some(chat_spawn::spawn_chat(
        rt,
        Arc::clone(config),
        history,
        prompt.to_string(),
    ));
    true
}

/// Prompt for the highlighted landing suggestion, if it may be sent right now.
fn selected_suggestion_prompt(app: &App) -> Option<&'static str> {
    let index = app.selected_suggestion?;
    if constants::is_example_prompt(index) && !app.gate.example_prompts_enabled() {
        return None;
    }
    constants::suggestion_prompt(index)
}

/// Handle main input keys.
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    config: &Arc<Config>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> super::HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) if !app.has_messages() => {
            let forward =
                key_code == KeyCode::Tab && !key_modifiers.contains(KeyModifiers::SHIFT);
            app.cycle_suggestion(forward);
        }
        (KeyCode::Enter, _) => {
            if app.input.trim().is_empty() {
                if !app.has_messages()
                    && let Some(prompt) = selected_suggestion_prompt(app)
                {
                    submit_prompt(prompt, app, config, pending_chat, rt);
                }
            } else {
                let input = app.input.clone();
                if submit_prompt(&input, app, config, pending_chat, rt) {
                    app.clear_input();
                }
            }
        }
        (KeyCode::Backspace, _) => {
            if !app.gate.is_input_disabled() {
                app.delete_char_before_cursor();
            }
        }
        (KeyCode::Left, _) => app.move_cursor_left(),
        (KeyCode::Right, _) => app.move_cursor_right(),
        (KeyCode::Home, _) => app.input_cursor = 0,
        (KeyCode::End, _) => app.input_cursor = app.input.len(),
        (KeyCode::Up, _) => app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => app.clear_input(),
        (KeyCode::Char(c), mods) => {
            // Ignore Alt+key: user likely intended a shortcut (e.g. Alt+L)
            if mods.contains(KeyModifiers::ALT) || mods.contains(KeyModifiers::CONTROL) {
                return super::HandleResult::Continue;
            }
            if !app.gate.is_input_disabled() {
                app.insert_char(c);
            }
        }
        _ => {}
    }
    super::HandleResult::Continue
}
