//! Thread provider: sends a prompt with the thread so far, reports generation stages,
//! streams the reply text, and hydrates the component the model picked.

mod error;
mod generation_loop;
mod prompt;
mod stream;

use async_openai::Client;
use tokio_util::sync::CancellationToken;

use crate::core::components::RenderedComponent;
use crate::core::config::Config;
use crate::core::generation::GenerationStage;
use crate::core::message::Message;

pub use error::{ChatError, map_api_error};

/// Finished assistant reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub content: String,
    pub component: Option<RenderedComponent>,
}

/// Callback for each reported generation stage.
pub type OnStage = Box<dyn Fn(GenerationStage) + Send>;

/// Callback for each streamed content chunk (text only).
pub type OnContentChunk = Box<dyn Fn(&str) + Send>;

/// What to send: the prompt plus the thread it continues.
pub struct ChatRequest<'a> {
    pub config: &'a Config,
    pub model: &'a str,
    pub history: &'a [Message],
    pub prompt: &'a str,
}

#[derive(Default)]
pub struct ChatOptions {
    pub on_stage: Option<OnStage>,
    pub on_content_chunk: Option<OnContentChunk>,
    pub cancel_token: Option<CancellationToken>,
}

/// Send a user prompt on the current thread.
/// - prior messages are flattened to plain text
/// - the model may call one component tool; its arguments become the component props
/// - a follow-up round streams the text reply with tools disabled
pub async fn send_thread_message(
    request: ChatRequest<'_>,
    options: ChatOptions,
) -> Result<Reply, ChatError> {
    let client = Client::with_config(request.config.openai_config.clone());
    let mut messages = prompt::build_messages(request.history, request.prompt);
    log::debug!(
        "sending prompt to {} with {} prior messages",
        request.model,
        messages.len().saturating_sub(2)
    );

    let result = generation_loop::run_generation_loop(
        generation_loop::LoopParams {
            client: &client,
            model: request.model,
            messages: &mut messages,
        },
        generation_loop::LoopCallbacks {
            on_stage: options.on_stage.as_deref(),
            on_content_chunk: options.on_content_chunk.as_deref(),
            cancel_token: options.cancel_token.as_ref(),
        },
    )
    .await;

    if let Err(ref e) = result
        && !matches!(e, ChatError::Cancelled)
    {
        log::error!("generation failed: {}", e);
        if let Some(ref cb) = options.on_stage {
            cb(GenerationStage::Error);
        }
    }
    result
}
