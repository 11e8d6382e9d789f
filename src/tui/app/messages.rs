//! Thread updates driven by the event loop and the message actions.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::core::clipboard;
use crate::core::components::RenderedComponent;
use crate::core::llm::Reply;
use crate::core::message::{Content, Message};
use crate::core::thread::{self, LikedSet};

use super::{App, ScrollPosition};

pub(crate) const COPIED_TOAST: &str = "Copied to clipboard!";
pub(crate) const COPY_FAILED_TOAST: &str = "Copy failed";
const CANCELLED_NOTICE: &str = "**[Request cancelled]**";

fn unix_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl App {
    pub(crate) fn push_user(&mut self, text: &str) {
        self.messages
            .push(Message::user(text).with_timestamp(unix_timestamp_secs()));
        self.scroll = ScrollPosition::Bottom;
    }

    /// Append a streamed content chunk to the trailing assistant reply, or start one.
    pub(crate) fn append_assistant_chunk(&mut self, chunk: &str) {
        match self.messages.last_mut() {
            Some(msg) if msg.is_assistant() => {
                if let Content::Text(s) = &mut msg.content {
                    s.push_str(chunk);
                } else {
                    let mut text = thread::extract_plain_text(&msg.content);
                    text.push_str(chunk);
                    msg.content = Content::Text(text);
                }
            }
            _ => {
                self.messages
                    .push(Message::assistant(chunk).with_timestamp(unix_timestamp_secs()));
            }
        }
    }

    /// True while the trailing assistant reply is being streamed into.
    pub(crate) fn is_streaming_reply(&self) -> bool {
        self.gate.is_generating() && self.messages.last().is_some_and(Message::is_assistant)
    }

    /// Finish the trailing reply with the final text and component.
    pub(crate) fn apply_reply(&mut self, reply: Reply) {
        match self.messages.last_mut() {
            Some(msg) if msg.is_assistant() => {
                msg.content = Content::Text(reply.content);
                msg.component = reply.component;
            }
            _ => {
                let mut msg = Message::assistant(reply.content).with_timestamp(unix_timestamp_secs());
                msg.component = reply.component;
                self.messages.push(msg);
            }
        }
        self.scroll = ScrollPosition::Bottom;
    }

    /// Keep whatever was streamed and mark the reply as cancelled.
    pub(crate) fn append_cancelled_notice(&mut self) {
        self.remove_last_if_empty_assistant();
        match self.messages.last_mut() {
            Some(msg) if msg.is_assistant() => {
                let mut text = thread::extract_plain_text(&msg.content);
                text.push_str("\n\n");
                text.push_str(CANCELLED_NOTICE);
                msg.content = Content::Text(text);
            }
            _ => {
                self.messages.push(
                    Message::assistant(CANCELLED_NOTICE).with_timestamp(unix_timestamp_secs()),
                );
            }
        }
    }

    /// Remove the last message if it is an assistant reply with no text yet.
    pub(crate) fn remove_last_if_empty_assistant(&mut self) {
        if self.messages.last().is_some_and(|m| {
            m.is_assistant()
                && m.component.is_none()
                && thread::extract_plain_text(&m.content).is_empty()
        }) {
            self.messages.pop();
        }
    }

    /// Most recent message carrying a component; shown in the preview panel.
    pub(crate) fn last_component_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.component.is_some())
    }

    pub(crate) fn last_component(&self) -> Option<&RenderedComponent> {
        self.last_component_message()
            .and_then(|m| m.component.as_ref())
    }

    /// Ids of assistant replies, in thread order. Only these carry actions.
    fn assistant_ids(&self) -> Vec<&crate::core::message::MessageId> {
        self.messages
            .iter()
            .filter(|m| m.is_assistant())
            .map(|m| &m.id)
            .collect()
    }

    /// Selected reply, falling back to the latest one.
    pub(crate) fn action_target(&self) -> Option<crate::core::message::MessageId> {
        let ids = self.assistant_ids();
        self.selected_message
            .as_ref()
            .filter(|sel| ids.contains(sel))
            .or_else(|| ids.last().copied())
            .cloned()
    }

    /// Move the selection across assistant replies. Starts from the latest one.
    pub(crate) fn select_reply(&mut self, forward: bool) {
        let ids = self.assistant_ids();
        if ids.is_empty() {
            self.selected_message = None;
            return;
        }
        let current = self
            .selected_message
            .as_ref()
            .and_then(|sel| ids.iter().position(|id| *id == sel));
        let next = match (current, forward) {
            (None, _) => ids.len() - 1,
            (Some(i), true) => (i + 1).min(ids.len() - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        let chosen = ids[next].clone();
        self.selected_message = Some(chosen);
    }

    pub(crate) fn toggle_like_selected(&mut self) {
        let Some(id) = self.action_target() else {
            return;
        };
        self.liked = thread::toggle_liked(std::mem::take(&mut self.liked), &id);
    }

    /// Delete the targeted reply and the prompt right before it.
    pub(crate) fn delete_selected(&mut self) {
        let Some(id) = self.action_target() else {
            return;
        };
        self.messages = thread::delete_message(std::mem::take(&mut self.messages), &id);
        if self.selected_message.as_ref() == Some(&id) {
            self.selected_message = None;
        }
        self.materialize_scroll();
    }

    pub(crate) fn copy_selected(&mut self, now: Instant) {
        let Some(msg) = self
            .action_target()
            .and_then(|id| self.messages.iter().find(|m| m.id == id))
        else {
            return;
        };
        match clipboard::copy_content(&msg.content) {
            Ok(()) => self.show_toast(COPIED_TOAST, false, now),
            Err(e) => {
                log::warn!("copy failed: {}", e);
                self.show_toast(COPY_FAILED_TOAST, true, now);
            }
        }
    }

    /// Start a new empty thread. Typed input is kept.
    pub(crate) fn clear_chat(&mut self) {
        self.messages.clear();
        self.liked = LikedSet::default();
        self.gate.reset();
        self.selected_message = None;
        self.selected_suggestion = None;
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
        self.message_line_ranges.clear();
    }
}
