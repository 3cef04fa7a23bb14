//! Word wrapping for pre-laid-out pages.
//!
//! Pages are wrapped here rather than with ratatui's `Wrap` so the number
//! of rows is known up front; scroll limits and section offsets depend on
//! it.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` at word boundaries to `width` columns.
///
/// Words wider than the line are split. Explicit newlines are kept. Empty
/// input yields one empty row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        rows.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        rows.push(current);
    }

    rows
}

/// Wrap `text` and style every row, putting `prefix` in front of each.
pub fn wrap_styled(
    text: &str,
    width: usize,
    style: Style,
    prefix: &'static str,
    prefix_style: Style,
) -> Vec<Line<'static>> {
    let content_width = width.saturating_sub(prefix.width());
    wrap_text(text, content_width)
        .into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(prefix, prefix_style),
                Span::styled(row, style),
            ])
        })
        .collect()
}

/// Lines of a code block, verbatim, cut at `width` rather than wrapped.
pub fn code_rows(code: &str, width: usize) -> Vec<String> {
    code.lines()
        .map(|line| {
            let line = line.replace('\t', "    ");
            let mut row = String::new();
            let mut row_width = 0;
            for ch in line.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width {
                    break;
                }
                row.push(ch);
                row_width += ch_width;
            }
            row
        })
        .collect()
}
