//! Text wrapping for display.

use ratatui::style::Style;
use ratatui::text::Span;
use textwrap::WordSeparator;
use textwrap::core::{Word, break_words};
use textwrap::wrap_algorithms::wrap_first_fit;

/// Word wrap over styled runs using textwrap's first-fit algorithm. Styles survive
/// line breaks; words wider than `width` are broken.
pub(crate) fn wrap_styled(runs: &[(String, Style)], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut words: Vec<Word> = Vec::new();
    let mut styles: Vec<Style> = Vec::new();
    for (text, style) in runs {
        let broken = break_words(WordSeparator::AsciiSpace.find_words(text), width);
        styles.extend(std::iter::repeat_n(*style, broken.len()));
        words.extend(broken);
    }
    if words.is_empty() {
        return vec![Vec::new()];
    }

    let mut lines = Vec::new();
    let mut idx = 0;
    for line_words in wrap_first_fit(&words, &[width as f64]) {
        let mut current: Vec<Span<'static>> = Vec::new();
        let last = line_words.len().saturating_sub(1);
        for (i, word) in line_words.iter().enumerate() {
            let style = styles[idx + i];
            push_run(&mut current, word.word, style);
            if i < last {
                push_run(&mut current, word.whitespace, style);
            }
        }
        idx += line_words.len();
        lines.push(current);
    }
    lines
}

/// Append to the last span when the style matches, otherwise start a new span.
fn push_run(line: &mut Vec<Span<'static>>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = line.last_mut()
        && last.style == style
    {
        last.content.to_mut().push_str(text);
        return;
    }
    line.push(Span::styled(text.to_string(), style));
}
