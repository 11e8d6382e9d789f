use ratatui::style::{Modifier, Style};
use ratatui::text::Line;

use crate::core::format;
use crate::core::message::{Content, ContentPart};

use super::{block_lines, content_lines, wrap_styled};

fn plain(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn wrap_styled_keeps_bold_across_break() {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let runs = vec![
        ("see ".to_string(), Style::default()),
        ("very important words".to_string(), bold),
    ];
    let lines = wrap_styled(&runs, 10);
    assert!(lines.len() >= 2);
    let last = lines.last().unwrap();
    assert!(last.iter().all(|s| s.style == bold));
}

#[test]
fn wrap_styled_splits_long_word() {
    let runs = vec![("abcdefghij".to_string(), Style::default())];
    let lines = wrap_styled(&runs, 4);
    let texts: Vec<String> = lines
        .iter()
        .map(|l| l.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn wrap_styled_empty_input_yields_one_line() {
    assert_eq!(wrap_styled(&[], 10).len(), 1);
}

#[test]
fn bold_span_gets_bold_modifier() {
    let blocks = format::format("Hello **world**!");
    let lines = block_lines(&blocks[0], 40, Style::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(plain(&lines[0]), "Hello world!");
    let world = lines[0]
        .spans
        .iter()
        .find(|s| s.content.contains("world"))
        .unwrap();
    assert!(world.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn list_item_hangs_continuation() {
    let blocks = format::format("1. one two three four");
    let lines = block_lines(&blocks[0], 10, Style::default());
    assert!(plain(&lines[0]).starts_with("1. "));
    assert!(plain(&lines[1]).starts_with("   "));
}

#[test]
fn bullet_uses_glyph() {
    let blocks = format::format("- item");
    let lines = block_lines(&blocks[0], 40, Style::default());
    assert_eq!(plain(&lines[0]), "• item");
}

#[test]
fn content_lines_skip_parts_without_text() {
    let content = Content::Parts(vec![
        ContentPart::text("hi"),
        ContentPart {
            kind: "image".to_string(),
            text: None,
        },
        ContentPart {
            kind: "text".to_string(),
            text: None,
        },
    ]);
    let lines = content_lines(&content, 40, Style::default());
    assert_eq!(lines.len(), 1);
    assert_eq!(plain(&lines[0]), "hi");
}

#[test]
fn wrap_styled_keeps_words_whole() {
    let runs = vec![("one two three".to_string(), Style::default())];
    let texts: Vec<String> = wrap_styled(&runs, 7)
        .iter()
        .map(|l| l.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(texts, vec!["one two", "three"]);
}

#[test]
fn wrap_styled_merges_same_style_words_into_one_span() {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let runs = vec![
        ("plain ".to_string(), Style::default()),
        ("bold text".to_string(), bold),
    ];
    let lines = wrap_styled(&runs, 40);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[0][0].content, "plain ");
    assert_eq!(lines[0][1].content, "bold text");
    assert_eq!(lines[0][1].style, bold);
}

#[test]
fn empty_line_becomes_blank_line() {
    let lines = content_lines(&Content::Text("a\n\nb".to_string()), 40, Style::default());
    assert_eq!(lines.len(), 3);
    assert_eq!(plain(&lines[1]), "");
}
