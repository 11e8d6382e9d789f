use std::time::{Duration, Instant};

use crate::core::components::{ProjectProps, RenderedComponent};
use crate::core::generation::GenerationStage;
use crate::core::llm::Reply;

use super::{App, ScrollPosition};

fn app() -> App {
    App::new("test/model".to_string(), false)
}

fn thread_with_two_turns(app: &mut App) {
    app.push_user("first");
    app.append_assistant_chunk("reply one");
    app.push_user("second");
    app.append_assistant_chunk("reply ");
    app.append_assistant_chunk("two");
}

#[test]
fn chunks_accumulate_in_one_reply() {
    let mut app = app();
    thread_with_two_turns(&mut app);
    assert_eq!(app.messages.len(), 4);
    assert_eq!(
        crate::core::thread::extract_plain_text(&app.messages[3].content),
        "reply two"
    );
}

#[test]
fn apply_reply_attaches_component() {
    let mut app = app();
    app.push_user("ideas");
    app.append_assistant_chunk("partial");
    app.apply_reply(Reply {
        content: "Here you go".to_string(),
        component: Some(RenderedComponent::Project(ProjectProps::default())),
    });
    assert_eq!(app.messages.len(), 2);
    assert!(app.last_component().is_some());
    assert_eq!(app.last_component_message().map(|m| &m.id), Some(&app.messages[1].id));
}

#[test]
fn like_targets_latest_reply_by_default() {
    let mut app = app();
    thread_with_two_turns(&mut app);
    app.toggle_like_selected();
    assert!(app.liked.contains(&app.messages[3].id));
    app.toggle_like_selected();
    assert!(app.liked.is_empty());
}

#[test]
fn select_reply_moves_between_assistant_messages() {
    let mut app = app();
    thread_with_two_turns(&mut app);
    app.select_reply(false);
    assert_eq!(app.selected_message.as_ref(), Some(&app.messages[3].id));
    app.select_reply(false);
    assert_eq!(app.selected_message.as_ref(), Some(&app.messages[1].id));
    app.select_reply(false);
    assert_eq!(app.selected_message.as_ref(), Some(&app.messages[1].id));
    app.select_reply(true);
    assert_eq!(app.selected_message.as_ref(), Some(&app.messages[3].id));
}

#[test]
fn delete_selected_removes_reply_and_prompt() {
    let mut app = app();
    thread_with_two_turns(&mut app);
    app.select_reply(false);
    app.select_reply(false);
    app.delete_selected();
    assert_eq!(app.messages.len(), 2);
    assert!(app.selected_message.is_none());
    assert_eq!(
        crate::core::thread::extract_plain_text(&app.messages[0].content),
        "second"
    );
}

#[test]
fn cancelled_notice_keeps_partial_text() {
    let mut app = app();
    app.push_user("q");
    app.append_assistant_chunk("half");
    app.append_cancelled_notice();
    let text = crate::core::thread::extract_plain_text(&app.messages[1].content);
    assert!(text.starts_with("half"));
    assert!(text.contains("Request cancelled"));
}

#[test]
fn clear_chat_resets_thread_but_keeps_input() {
    let mut app = app();
    thread_with_two_turns(&mut app);
    app.toggle_like_selected();
    app.insert_char('x');
    app.gate.begin_submit(Instant::now());
    app.gate.observe_stage(GenerationStage::StreamingResponse);
    app.clear_chat();
    assert!(!app.has_messages());
    assert!(app.liked.is_empty());
    assert!(!app.gate.shows_status());
    assert_eq!(app.input, "x");
    assert!(app.scroll == ScrollPosition::Line(0));
}

#[test]
fn cursor_editing_handles_multibyte() {
    let mut app = app();
    for c in "héllo".chars() {
        app.insert_char(c);
    }
    app.move_cursor_left();
    app.move_cursor_left();
    app.move_cursor_left();
    app.delete_char_before_cursor();
    assert_eq!(app.input, "hllo");
    app.move_cursor_right();
    app.insert_char('!');
    assert_eq!(app.input, "hl!lo");
}

#[test]
fn typing_clears_send_error() {
    let mut app = app();
    app.gate.begin_submit(Instant::now());
    app.gate.fail();
    assert!(app.gate.error().is_some());
    app.insert_char('a');
    assert!(app.gate.error().is_none());
}

#[test]
fn suggestions_wrap_both_ways() {
    let mut app = app();
    app.cycle_suggestion(false);
    assert_eq!(app.selected_suggestion, Some(5));
    app.cycle_suggestion(true);
    assert_eq!(app.selected_suggestion, Some(0));
}

#[test]
fn toast_expires() {
    let mut app = app();
    let now = Instant::now();
    app.show_toast("Copied to clipboard!", false, now);
    assert!(app.active_toast(now).is_some());
    assert!(app.active_toast(now + Duration::from_secs(3)).is_none());
    assert!(app.toast.is_none());
}
