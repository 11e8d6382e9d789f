//! Streaming reply chunks: content deltas, component tool-call merging, size limits.

use serde_json::{Value, json};

/// Max tool calls to accept from a single response (guards against malformed API).
pub(super) const MAX_TOOL_CALLS: usize = 8;
/// Max content size (512KB) to prevent unbounded memory growth from malformed streams.
pub(super) const MAX_CONTENT_BYTES: usize = 512 * 1024;
/// Max size for a single tool call's arguments JSON (64KB).
pub(super) const MAX_TOOL_CALL_ARGS_BYTES: usize = 64 * 1024;

/// Error object embedded in a streamed chunk, if any.
pub(super) fn chunk_error(chunk: &Value) -> Option<String> {
    let err = chunk.get("error")?;
    Some(
        err.get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
    )
}

/// The `delta` of the first choice, if present.
pub(super) fn first_delta(chunk: &Value) -> Option<&Value> {
    chunk
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("delta"))
}

/// Merge a tool_calls delta into accumulated tool calls (by index). Arguments are concatenated.
/// Skips deltas with out-of-bounds index to handle malformed API responses.
/// Append a content chunk unless it would take the reply past `MAX_CONTENT_BYTES`.
/// Returns false when the chunk was refused; the caller stops reading the round.
pub(super) fn push_content(out: &mut String, chunk: &str) -> bool {
    if out.len() + chunk.len() > MAX_CONTENT_BYTES {
        return false;
    }
    out.push_str(chunk);
    true
}

pub(super) fn merge_tool_call_delta(acc: &mut Vec<Value>, delta_tc: &Value) {
    let index = match delta_tc["index"].as_u64() {
        Some(i) if i < MAX_TOOL_CALLS as u64 => i as usize,
        _ => return,
    };
    while acc.len() <= index {
        acc.push(json!({
            "id": "",
            "type": "function",
            "function": { "name": "", "arguments": "" }
        }));
    }
    let entry = &mut acc[index];
    if let Some(id) = delta_tc["id"].as_str()
        && !id.is_empty()
    {
        entry["id"] = json!(id);
    }
    if let Some(fn_part) = delta_tc.get("function") {
        if let Some(name) = fn_part["name"].as_str()
            && !name.is_empty()
        {
            entry["function"]["name"] = json!(name);
        }
        if let Some(args) = fn_part["arguments"].as_str()
            && !args.is_empty()
        {
            let current = entry["function"]["arguments"].as_str().unwrap_or("");
            if current.len() + args.len() <= MAX_TOOL_CALL_ARGS_BYTES {
                entry["function"]["arguments"] = json!(format!("{}{}", current, args));
            }
        }
    }
}
