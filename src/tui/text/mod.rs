//! Formatted message bodies as terminal lines: bold spans, list markers, wrapping.

mod wrap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::core::display_width;

use crate::core::format::{self, FormattedPart, RenderBlock, Span as TextSpan};
use crate::core::message::Content;

use super::constants::ACCENT;

pub(crate) use wrap::wrap_styled;

fn span_runs(spans: &[TextSpan], base: Style) -> Vec<(String, Style)> {
    spans
        .iter()
        .map(|s| {
            let style = if s.is_bold() {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            (s.text().to_string(), style)
        })
        .collect()
}

/// Lines for one block. List items hang their continuation lines under the text.
pub(crate) fn block_lines(block: &RenderBlock, width: usize, base: Style) -> Vec<Line<'static>> {
    match block {
        RenderBlock::LineBreak => vec![Line::default()],
        RenderBlock::Paragraph { spans } => wrap_styled(&span_runs(spans, base), width)
            .into_iter()
            .map(Line::from)
            .collect(),
        RenderBlock::ListItem { marker, spans } => {
            let marker_text = format!("{} ", marker.as_str());
            let indent = display_width(&marker_text);
            let wrapped = wrap_styled(&span_runs(spans, base), width.saturating_sub(indent));
            wrapped
                .into_iter()
                .enumerate()
                .map(|(i, mut line)| {
                    let lead = if i == 0 {
                        Span::styled(marker_text.clone(), Style::default().fg(ACCENT))
                    } else {
                        Span::raw(" ".repeat(indent))
                    };
                    line.insert(0, lead);
                    Line::from(line)
                })
                .collect()
        }
    }
}

/// Format and wrap message content. Non-text parts draw nothing.
pub(crate) fn content_lines(content: &Content, width: usize, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for part in format::format_content(content) {
        if let FormattedPart::Blocks(blocks) = part {
            for block in &blocks {
                lines.extend(block_lines(block, width, base));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests;
