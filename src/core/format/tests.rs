use super::{
    BULLET, FormattedPart, ListMarker, RenderBlock, Span, format, format_content,
    parse_inline_emphasis,
};
use crate::core::message::{Content, ContentPart};

fn plain(s: &str) -> Span {
    Span::PlainText(s.to_string())
}

fn bold(s: &str) -> Span {
    Span::Bold(s.to_string())
}

fn paragraph(spans: Vec<Span>) -> RenderBlock {
    RenderBlock::Paragraph { spans }
}

/// Rebuild a line from its spans, putting `**` back around bold runs.
fn reconstruct(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s {
            Span::PlainText(t) => t.clone(),
            Span::Bold(t) => format!("**{}**", t),
        })
        .collect()
}

#[test]
fn format_empty_is_single_line_break() {
    assert_eq!(format(""), vec![RenderBlock::LineBreak]);
}

#[test]
fn format_whitespace_only_line_is_line_break() {
    assert_eq!(format("   \t"), vec![RenderBlock::LineBreak]);
}

#[test]
fn format_bold_only() {
    assert_eq!(format("**bold**"), vec![paragraph(vec![bold("bold")])]);
}

#[test]
fn format_bold_inside_sentence() {
    assert_eq!(
        format("Hello **world**!"),
        vec![paragraph(vec![plain("Hello "), bold("world"), plain("!")])]
    );
}

#[test]
fn format_numbered_list() {
    assert_eq!(
        format("1. First\n2. Second"),
        vec![
            RenderBlock::ListItem {
                marker: ListMarker::Ordinal("1.".to_string()),
                spans: vec![plain("First")],
            },
            RenderBlock::ListItem {
                marker: ListMarker::Ordinal("2.".to_string()),
                spans: vec![plain("Second")],
            },
        ]
    );
}

#[test]
fn format_bulleted_list() {
    let blocks = format("- a\n* b");
    assert_eq!(
        blocks,
        vec![
            RenderBlock::ListItem {
                marker: ListMarker::Bullet,
                spans: vec![plain("a")],
            },
            RenderBlock::ListItem {
                marker: ListMarker::Bullet,
                spans: vec![plain("b")],
            },
        ]
    );
    assert_eq!(ListMarker::Bullet.as_str(), BULLET);
}

#[test]
fn format_preserves_empty_lines_between_blocks() {
    let blocks = format("Intro\n\n- item");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1], RenderBlock::LineBreak);
}

#[test]
fn format_trailing_newline_adds_line_break() {
    let blocks = format("text\n");
    assert_eq!(blocks, vec![paragraph(vec![plain("text")]), RenderBlock::LineBreak]);
}

#[test]
fn format_indented_numbered_item_is_classified_after_trim() {
    let blocks = format("   10.   Tenth **item**  ");
    assert_eq!(
        blocks,
        vec![RenderBlock::ListItem {
            marker: ListMarker::Ordinal("10.".to_string()),
            spans: vec![plain("Tenth "), bold("item")],
        }]
    );
}

#[test]
fn format_number_without_space_is_paragraph() {
    assert_eq!(format("3.14 is pi"), vec![paragraph(vec![plain("3.14 is pi")])]);
    assert_eq!(format("1."), vec![paragraph(vec![plain("1.")])]);
}

#[test]
fn format_bullet_strips_only_two_character_prefix() {
    assert_eq!(
        format("-  spaced"),
        vec![RenderBlock::ListItem {
            marker: ListMarker::Bullet,
            spans: vec![plain(" spaced")],
        }]
    );
}

#[test]
fn format_dash_without_space_is_paragraph() {
    assert_eq!(format("-dash"), vec![paragraph(vec![plain("-dash")])]);
}

#[test]
fn format_paragraph_keeps_untrimmed_line() {
    assert_eq!(
        format("  indented **text** "),
        vec![paragraph(vec![plain("  indented "), bold("text"), plain(" ")])]
    );
}

#[test]
fn format_bullet_with_bold_item() {
    assert_eq!(
        format("* **Rust**: systems language"),
        vec![RenderBlock::ListItem {
            marker: ListMarker::Bullet,
            spans: vec![bold("Rust"), plain(": systems language")],
        }]
    );
}

#[test]
fn format_is_deterministic() {
    let input = "Plan:\n1. **Learn** basics\n- practice\n\nDone";
    assert_eq!(format(input), format(input));
}

#[test]
fn inline_empty_line_has_no_spans() {
    assert!(parse_inline_emphasis("").is_empty());
}

#[test]
fn inline_plain_text_only() {
    assert_eq!(parse_inline_emphasis("no markup"), vec![plain("no markup")]);
}

#[test]
fn inline_multiple_bold_runs() {
    assert_eq!(
        parse_inline_emphasis("**a** and **b**"),
        vec![bold("a"), plain(" and "), bold("b")]
    );
}

#[test]
fn inline_unterminated_marker_stays_plain() {
    assert_eq!(
        parse_inline_emphasis("**done** then **open"),
        vec![bold("done"), plain(" then **open")]
    );
    assert_eq!(parse_inline_emphasis("a **b"), vec![plain("a **b")]);
}

#[test]
fn inline_empty_bold_is_not_a_match() {
    assert_eq!(parse_inline_emphasis("****"), vec![plain("****")]);
}

#[test]
fn inline_extra_asterisk_is_part_of_bold_content() {
    assert_eq!(parse_inline_emphasis("***a**"), vec![bold("*a")]);
}

#[test]
fn inline_shortest_match_wins() {
    assert_eq!(
        parse_inline_emphasis("**a**b**"),
        vec![bold("a"), plain("b**")]
    );
}

#[test]
fn inline_bold_does_not_cross_carriage_return() {
    assert_eq!(parse_inline_emphasis("**a\r**"), vec![plain("**a\r**")]);
}

#[test]
fn inline_handles_multibyte_text() {
    assert_eq!(
        parse_inline_emphasis("café **naïve** ✓"),
        vec![plain("café "), bold("naïve"), plain(" ✓")]
    );
}

#[test]
fn inline_spans_reconstruct_original_line() {
    let lines = [
        "Hello **world**!",
        "**a** and **b**",
        "dangling ** marker",
        "***a**",
        "****",
        "**a**b**",
        "x **y** z **",
        "plain",
    ];
    for line in lines {
        let spans = parse_inline_emphasis(line);
        assert_eq!(reconstruct(&spans), line, "line: {:?}", line);
    }
}

#[test]
fn format_content_text_is_formatted() {
    let content = Content::Text("**hi**".to_string());
    assert_eq!(
        format_content(&content),
        vec![FormattedPart::Blocks(vec![paragraph(vec![bold("hi")])])]
    );
}

#[test]
fn format_content_passes_non_text_parts_through() {
    let image = ContentPart {
        kind: "image".to_string(),
        text: None,
    };
    let content = Content::Parts(vec![ContentPart::text("- a"), image.clone()]);
    let parts = format_content(&content);
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], FormattedPart::Blocks(b) if b.len() == 1));
    assert_eq!(parts[1], FormattedPart::Passthrough(&image));
}

#[test]
fn format_content_text_part_without_text_is_empty() {
    let content = Content::Parts(vec![ContentPart {
        kind: "text".to_string(),
        text: None,
    }]);
    assert_eq!(format_content(&content), vec![FormattedPart::Blocks(vec![])]);
}

#[test]
fn render_blocks_serialize_with_closed_tags() {
    let json = serde_json::to_value(format("1. **x**\n\n- y")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "list_item", "marker": "1.", "spans": [{"type": "bold", "text": "x"}]},
            {"type": "line_break"},
            {"type": "list_item", "marker": "•", "spans": [{"type": "plain_text", "text": "y"}]}
        ])
    );
}
