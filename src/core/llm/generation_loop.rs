//! Generation loop: one round to pick and hydrate a component, one round to stream the reply.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use futures::StreamExt;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::components::{self, RenderedComponent};
use crate::core::generation::GenerationStage;

use super::prompt::component_rendered_result;
use super::stream::{
    MAX_CONTENT_BYTES, chunk_error, first_delta, merge_tool_call_delta, push_content,
};
use super::{ChatError, Reply, map_api_error};

/// Stage, streaming and cancellation hooks for one generation.
pub(super) struct LoopCallbacks<'a> {
    pub on_stage: Option<&'a (dyn Fn(GenerationStage) + Send)>,
    pub on_content_chunk: Option<&'a (dyn Fn(&str) + Send)>,
    pub cancel_token: Option<&'a CancellationToken>,
}

impl LoopCallbacks<'_> {
    fn stage(&self, stage: GenerationStage) {
        if let Some(cb) = self.on_stage {
            cb(stage);
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_token.is_some_and(|t| t.is_cancelled())
    }
}

pub(super) struct LoopParams<'a> {
    pub client: &'a Client<OpenAIConfig>,
    pub model: &'a str,
    pub messages: &'a mut Vec<Value>,
}

/// Streamed output of a single API round.
#[derive(Default)]
struct RoundOutput {
    content: String,
    tool_calls: Vec<Value>,
}

/// Stream one completion. Content chunks are forwarded as they arrive; the first one
/// reports `StreamingResponse`.
async fn stream_round(
    client: &Client<OpenAIConfig>,
    body: Value,
    callbacks: &LoopCallbacks<'_>,
) -> Result<RoundOutput, ChatError> {
    let chat_api = client.chat();
    let stream_future = chat_api.create_stream_byot::<_, Value>(body);

    let stream_result = if let Some(token) = callbacks.cancel_token {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(ChatError::Cancelled);
            }
            result = stream_future => result,
        }
    } else {
        stream_future.await
    };

    let mut stream = stream_result.map_err(map_api_error)?;
    let mut out = RoundOutput::default();
    let mut streaming = false;

    loop {
        let chunk_opt = if let Some(token) = callbacks.cancel_token {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    return Err(ChatError::Cancelled);
                }
                chunk = stream.next() => chunk,
            }
        } else {
            stream.next().await
        };

        let Some(chunk_result) = chunk_opt else { break };
        let chunk = chunk_result.map_err(map_api_error)?;

        if let Some(msg) = chunk_error(&chunk) {
            return Err(ChatError::ApiMessage(msg));
        }

        let Some(delta) = first_delta(&chunk) else {
            continue;
        };

        if let Some(content) = delta["content"].as_str()
            && !content.is_empty()
        {
            if !push_content(&mut out.content, content) {
                log::warn!("reply exceeded {} bytes; truncating", MAX_CONTENT_BYTES);
                break;
            }
            if !streaming {
                streaming = true;
                callbacks.stage(GenerationStage::StreamingResponse);
            }
            if let Some(cb) = callbacks.on_content_chunk {
                cb(content);
            }
        }

        if let Some(tc_arr) = delta["tool_calls"].as_array() {
            for tc in tc_arr {
                merge_tool_call_delta(&mut out.tool_calls, tc);
            }
        }
    }

    Ok(out)
}

/// Hydrate the first tool call naming a registered component. Every call gets a tool
/// result so the follow-up round sees a well-formed exchange.
fn hydrate_tool_calls(
    tool_calls: &[Value],
    messages: &mut Vec<Value>,
) -> Option<RenderedComponent> {
    let mut component = None;
    for tc in tool_calls {
        let id = tc["id"].as_str().unwrap_or("");
        let name = tc["function"]["name"].as_str().unwrap_or("");
        let arguments = tc["function"]["arguments"].as_str().unwrap_or("");

        let result = if component.is_some() {
            "Only one component can be shown per reply; this call was ignored.".to_string()
        } else {
            match components::hydrate(name, arguments) {
                Ok(rendered) => {
                    log::info!("hydrated component {}", name);
                    component = Some(rendered);
                    component_rendered_result(name)
                }
                Err(e) => {
                    log::warn!("component hydration failed: {}", e);
                    format!("Error: {}", e)
                }
            }
        };

        messages.push(json!({
            "role": "tool",
            "tool_call_id": id,
            "content": result,
        }));
    }
    component
}

/// Run the generation: pick a component (or answer directly), then stream a short reply.
pub(super) async fn run_generation_loop(
    params: LoopParams<'_>,
    callbacks: LoopCallbacks<'_>,
) -> Result<Reply, ChatError> {
    if callbacks.is_cancelled() {
        return Err(ChatError::Cancelled);
    }

    callbacks.stage(GenerationStage::FetchingContext);
    let tools = components::tool_definitions();
    let first_body = json!({
        "model": params.model,
        "messages": &*params.messages,
        "tool_choice": "auto",
        "tools": tools,
        "stream": true,
    });
    callbacks.stage(GenerationStage::ChoosingComponent);
    let first = stream_round(params.client, first_body, &callbacks).await?;

    if first.tool_calls.is_empty() {
        callbacks.stage(GenerationStage::Complete);
        return Ok(Reply {
            content: first.content,
            component: None,
        });
    }

    callbacks.stage(GenerationStage::HydratingComponent);
    params.messages.push(json!({
        "role": "assistant",
        "content": first.content,
        "tool_calls": first.tool_calls.iter().map(|tc| json!({
            "id": tc["id"].as_str().unwrap_or(""),
            "type": "function",
            "function": tc["function"].clone()
        })).collect::<Vec<_>>()
    }));
    let component = hydrate_tool_calls(&first.tool_calls, params.messages);

    if callbacks.is_cancelled() {
        return Err(ChatError::Cancelled);
    }

    // Follow-up round: tools stay declared for the history but cannot be called.
    let second_body = json!({
        "model": params.model,
        "messages": &*params.messages,
        "tool_choice": "none",
        "tools": tools,
        "stream": true,
    });
    let second = stream_round(params.client, second_body, &callbacks).await?;

    let mut content = first.content;
    if !content.is_empty() && !second.content.is_empty() {
        content.push_str("\n\n");
    }
    content.push_str(&second.content);

    if content.trim().is_empty()
        && let Some(ref rendered) = component
    {
        content = fallback_reply(rendered);
        if let Some(cb) = callbacks.on_content_chunk {
            cb(&content);
        }
    }

    callbacks.stage(GenerationStage::Complete);
    Ok(Reply { content, component })
}

/// Text used when the model rendered a component but said nothing.
pub(super) fn fallback_reply(component: &RenderedComponent) -> String {
    format!("Here is your {}.", component.title())
}
