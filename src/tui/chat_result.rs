//! Applying provider events to the app: stages, streamed chunks, and the final result.

use std::time::Instant;

use crate::core::generation::{API_ERROR_MESSAGE, GenerationStage};
use crate::core::llm;

use super::app::App;

pub(super) fn handle_stage(app: &mut App, stage: GenerationStage) {
    log::debug!("generation stage: {}", stage.label());
    app.gate.observe_stage(stage);
}

/// Process a finished request: attach the reply, note a cancel, or surface the error.
pub(super) fn handle_chat_result(app: &mut App, result: Result<llm::Reply, llm::ChatError>) {
    match result {
        Ok(reply) => {
            app.apply_reply(reply);
            app.gate.finish();
        }
        Err(llm::ChatError::Cancelled) => {
            app.append_cancelled_notice();
            app.gate.finish();
        }
        // Already logged by `send_thread_message`.
        Err(_) => {
            app.remove_last_if_empty_assistant();
            app.gate.fail();
            app.show_toast(API_ERROR_MESSAGE, true, Instant::now());
        }
    }
}
