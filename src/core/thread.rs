//! State transitions over a thread: liked markers, paired deletion, and flattening
//! content to plain text for the clipboard.
//!
//! Every function takes its state by value and returns the next state, so the UI
//! owns the only copy and never mutates through a shared map.

use std::collections::HashSet;

use crate::core::message::{Content, Message, MessageId, Role};

/// Ids of messages the user liked during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet(HashSet<MessageId>);

impl LikedSet {
    pub fn contains(&self, id: &MessageId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flip membership of `id`.
pub fn toggle_liked(mut set: LikedSet, id: &MessageId) -> LikedSet {
    if !set.0.remove(id) {
        set.0.insert(id.clone());
    }
    set
}

/// Remove the message with `id`, plus the message right before it when that one is
/// a user turn. Unknown ids leave the list untouched.
pub fn delete_message(mut messages: Vec<Message>, id: &MessageId) -> Vec<Message> {
    let Some(index) = messages.iter().position(|m| &m.id == id) else {
        return messages;
    };
    let start = if index > 0 && messages[index - 1].role == Role::User {
        index - 1
    } else {
        index
    };
    messages.drain(start..=index);
    messages
}

/// Flatten content to plain text. Parts are concatenated in order; a part without
/// `text` contributes nothing.
pub fn extract_plain_text(content: &Content) -> String {
    match content {
        Content::Text(s) => s.clone(),
        Content::Parts(parts) => parts
            .iter()
            .map(|p| p.text.as_deref().unwrap_or(""))
            .collect(),
    }
}
