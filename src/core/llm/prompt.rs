//! Request messages: system prompt naming the registered components, and the thread
//! flattened into chat-completion messages.

use serde_json::{Value, json};

use crate::core::components::ComponentKind;
use crate::core::message::Message;
use crate::core::thread::extract_plain_text;

/// Tool result fed back after a component was rendered.
pub(super) fn component_rendered_result(name: &str) -> String {
    format!(
        "{} is now displayed to the user. Reply with a short summary; do not repeat the component content.",
        name
    )
}

pub(super) fn system_prompt() -> String {
    let mut s = String::from(
        "You are a generative UI assistant. When the user's request matches one of the \
         components below, call that component's tool exactly once with complete props; \
         otherwise answer in text.\n\nComponents:\n",
    );
    for kind in ComponentKind::ALL {
        s.push_str(&format!("- {}: {}\n", kind.name(), kind.description()));
    }
    s.push_str(
        "\nText formatting: only **bold**, numbered lists (\"1. \") and bullet lists (\"- \") \
         are rendered. Do not use any other markup.",
    );
    s
}

/// System prompt, then prior turns (empty bodies skipped), then the new prompt.
pub(super) fn build_messages(history: &[Message], prompt: &str) -> Vec<Value> {
    let mut messages = vec![json!({ "role": "system", "content": system_prompt() })];
    for msg in history {
        let text = extract_plain_text(&msg.content);
        if text.trim().is_empty() {
            continue;
        }
        messages.push(json!({ "role": msg.role.as_str(), "content": text }));
    }
    messages.push(json!({ "role": "user", "content": prompt }));
    messages
}
