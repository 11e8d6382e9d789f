//! Markdown-subset formatter for message bodies.
//!
//! Supports exactly three constructs: `**bold**` spans, numbered list items (`1. `)
//! and bulleted list items (`- ` / `* `). Everything else in model output is plain
//! text; no other markup is ever interpreted.

use serde::{Serialize, Serializer};

use crate::core::message::{Content, ContentPart};

/// Marker glyph for unordered list items.
pub const BULLET: &str = "•";

const BOLD_DELIMITER: &str = "**";

/// Inline run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    PlainText(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(s) | Span::Bold(s) => s,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Span::Bold(_))
    }
}

/// Marker shown in front of a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// Literal ordinal as written in the source, including the dot (`"3."`).
    Ordinal(String),
    Bullet,
}

impl ListMarker {
    pub fn as_str(&self) -> &str {
        match self {
            ListMarker::Ordinal(s) => s,
            ListMarker::Bullet => BULLET,
        }
    }
}

impl Serialize for ListMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Display block. Every input line maps to exactly one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    Paragraph { spans: Vec<Span> },
    LineBreak,
    ListItem { marker: ListMarker, spans: Vec<Span> },
}

impl RenderBlock {
    pub fn spans(&self) -> &[Span] {
        match self {
            RenderBlock::Paragraph { spans } | RenderBlock::ListItem { spans, .. } => spans,
            RenderBlock::LineBreak => &[],
        }
    }
}

/// One formatted piece of a message: blocks for text, or a part handed back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedPart<'a> {
    Blocks(Vec<RenderBlock>),
    /// Structured part that carries no formattable text; left to the renderer.
    Passthrough(&'a ContentPart),
}

/// Format a plain-text body into display blocks, one per `\n`-separated line.
pub fn format(text: &str) -> Vec<RenderBlock> {
    text.split('\n').map(format_line).collect()
}

/// Format message content. Text parts are formatted in order; a text part without
/// text yields no blocks; any other part is passed through as-is.
pub fn format_content(content: &Content) -> Vec<FormattedPart<'_>> {
    match content {
        Content::Text(text) => vec![FormattedPart::Blocks(format(text))],
        Content::Parts(parts) => parts
            .iter()
            .map(|part| match part.text.as_deref() {
                Some(text) if part.is_text() => FormattedPart::Blocks(format(text)),
                None if part.is_text() => FormattedPart::Blocks(Vec::new()),
                _ => FormattedPart::Passthrough(part),
            })
            .collect(),
    }
}

fn format_line(line: &str) -> RenderBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return RenderBlock::LineBreak;
    }
    if let Some((ordinal, rest)) = split_ordered_prefix(trimmed) {
        return RenderBlock::ListItem {
            marker: ListMarker::Ordinal(format!("{}.", ordinal)),
            spans: parse_inline_emphasis(rest),
        };
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return RenderBlock::ListItem {
            marker: ListMarker::Bullet,
            spans: parse_inline_emphasis(rest),
        };
    }
    // Paragraphs keep the untrimmed line so leading indentation survives.
    RenderBlock::Paragraph {
        spans: parse_inline_emphasis(line),
    }
}

/// Split `"12.  rest"` into `("12", "rest")`. Requires ASCII digits, a dot and at
/// least one whitespace character; all whitespace after the dot is consumed.
fn split_ordered_prefix(s: &str) -> Option<(&str, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after_dot = s[digits..].strip_prefix('.')?;
    let rest = after_dot.trim_start();
    if rest.len() == after_dot.len() {
        return None;
    }
    Some((&s[..digits], rest))
}

#[derive(Clone, Copy)]
enum ScanState {
    Plain,
    InsideBold { open: usize },
}

/// Split a line into plain and bold spans.
///
/// Left-to-right, non-overlapping, shortest match: an opening `**`, at least one
/// character, then the nearest closing `**`. An opener without a closer is
/// skipped and scanning resumes one byte later, so unterminated markers end up
/// in the trailing plain span.
pub fn parse_inline_emphasis(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut emitted = 0;
    let mut pos = 0;
    let mut state = ScanState::Plain;

    loop {
        match state {
            ScanState::Plain => match line[pos..].find(BOLD_DELIMITER) {
                Some(offset) => {
                    state = ScanState::InsideBold { open: pos + offset };
                }
                None => break,
            },
            ScanState::InsideBold { open } => {
                let inner_start = open + BOLD_DELIMITER.len();
                match find_closing_delimiter(line, inner_start) {
                    Some(close) => {
                        if open > emitted {
                            spans.push(Span::PlainText(line[emitted..open].to_string()));
                        }
                        spans.push(Span::Bold(line[inner_start..close].to_string()));
                        emitted = close + BOLD_DELIMITER.len();
                        pos = emitted;
                    }
                    // '*' is ASCII, so open + 1 is a char boundary.
                    None => pos = open + 1,
                }
                state = ScanState::Plain;
            }
        }
    }

    if emitted < line.len() {
        spans.push(Span::PlainText(line[emitted..].to_string()));
    }
    spans
}

/// Byte offset of the `**` closing a bold run whose content starts at `inner_start`.
/// The content is at least one character and never crosses a line terminator.
fn find_closing_delimiter(line: &str, inner_start: usize) -> Option<usize> {
    let inner = &line[inner_start..];
    let first = inner.chars().next()?;
    if is_line_terminator(first) {
        return None;
    }
    let bound = inner.find(is_line_terminator).unwrap_or(inner.len());
    let from = first.len_utf8();
    inner[from..bound]
        .find(BOLD_DELIMITER)
        .map(|i| inner_start + from + i)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests;
