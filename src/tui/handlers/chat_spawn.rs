//! Spawns provider requests in a background thread with stage/stream/result channels.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm;
use crate::core::message::Message;

use super::PendingChat;

/// Spawn a send on the current thread. `history` excludes the new prompt.
pub fn spawn_chat(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    history: Vec<Message>,
    prompt: String,
) -> PendingChat {
    let (stage_tx, stage_rx) = mpsc::channel();
    let (stream_tx, stream_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();

    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let on_stage: llm::OnStage = Box::new(move |stage| {
            let _ = stage_tx.send(stage);
        });
        let on_content_chunk: llm::OnContentChunk = Box::new(move |s| {
            let _ = stream_tx.send(s.to_string());
        });
        let result = rt_clone.block_on(llm::send_thread_message(
            llm::ChatRequest {
                config: config.as_ref(),
                model: &config.model_id,
                history: &history,
                prompt: &prompt,
            },
            llm::ChatOptions {
                on_stage: Some(on_stage),
                on_content_chunk: Some(on_content_chunk),
                cancel_token: Some(cancel_token_clone),
            },
        ));
        let _ = result_tx.send(result);
    });

    PendingChat {
        stage_rx,
        stream_rx,
        result_rx,
        cancel_token,
    }
}
