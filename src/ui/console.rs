//! The console panel: transcript above, input line at the bottom.

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::palette::Palette;
use super::text::wrap_text;
use crate::console::ConsoleSession;

/// Smallest panel: borders, one transcript row and the input row.
pub const MIN_CONSOLE_HEIGHT: u16 = 4;

/// Transcript rows at `width` columns.
fn transcript_lines(session: &ConsoleSession, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    session
        .transcript()
        .lines()
        .iter()
        .flat_map(|line| {
            let style = palette.line(line.kind);
            wrap_text(&line.content, width)
                .into_iter()
                .map(move |row| Line::from(Span::styled(row, style)))
        })
        .collect()
}

/// Rows the panel may take out of a page `height` rows tall: two fifths.
pub fn console_budget(height: u16) -> u16 {
    (u32::from(height) * 2 / 5) as u16
}

/// The part of the input that fits in `width` columns with the cursor
/// visible, and the cursor column within it.
///
/// Leading characters scroll off once the cursor reaches the right edge.
fn input_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let width = width.max(1);
    let chars: Vec<(char, usize)> = text
        .chars()
        .map(|ch| (ch, ch.width().unwrap_or(0)))
        .collect();
    let cursor_col: usize = chars.iter().take(cursor).map(|(_, w)| w).sum();

    let mut start = 0;
    let mut skipped = 0;
    // Keep one column free for the cursor itself.
    while cursor_col - skipped > width - 1 && start < chars.len() {
        skipped += chars[start].1;
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for &(ch, ch_width) in &chars[start..] {
        if used + ch_width > width {
            break;
        }
        visible.push(ch);
        used += ch_width;
    }
    (visible, cursor_col - skipped)
}

/// Height the panel wants at `width` columns, clamped to `max`.
pub fn console_height(session: &ConsoleSession, width: u16, max: u16) -> u16 {
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let rows: usize = session
        .transcript()
        .lines()
        .iter()
        .map(|line| wrap_text(&line.content, inner_width).len())
        .sum();
    let wanted = (rows + 1 + 2).min(u16::MAX as usize) as u16;
    wanted.clamp(MIN_CONSOLE_HEIGHT, max.max(MIN_CONSOLE_HEIGHT))
}

/// Draw the panel and place the terminal cursor on the input line.
pub fn render_console(frame: &mut Frame, area: Rect, session: &ConsoleSession, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .title(Span::styled(" terminal ", palette.muted()))
        .style(palette.code());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut lines = transcript_lines(session, inner.width as usize, palette);

    let prompt = session.prompt();
    let prompt_width = prompt.width() + 1;
    let input_width = (inner.width as usize).saturating_sub(prompt_width);
    let line = session.line();
    let (input, cursor_col) = if line.is_empty() {
        (Span::styled(session.placeholder(), palette.muted()), 0)
    } else {
        let (visible, col) = input_window(line.text(), line.cursor(), input_width);
        (Span::styled(visible, palette.code()), col)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", prompt), palette.accent()),
        input,
    ]));

    // Bottom-align: keep the input row and as much recent output as fits.
    let skip = lines.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line<'static>> = lines.into_iter().skip(skip).collect();
    let input_row = inner.y + visible.len().saturating_sub(1) as u16;
    frame.render_widget(Paragraph::new(visible), inner);

    let cursor_x = inner.x as usize + prompt_width + cursor_col;
    let max_x = (inner.x + inner.width).saturating_sub(1) as usize;
    frame.set_cursor_position(Position::new(cursor_x.min(max_x) as u16, input_row));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::PromptSet;
    use crate::ui::palette::DARK;
    use crate::theme::{MemoryThemeStore, ThemeContext};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn session() -> ConsoleSession {
        let registry = crate::commands::blog::registry().unwrap();
        ConsoleSession::new(registry, PromptSet::new("me", "blog"), Duration::ZERO)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_placeholder_when_empty() {
        let session = session();
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| render_console(f, f.area(), &session, &DARK))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("me@blog ~ % Type 'help' for commands"));
    }

    #[test]
    fn test_recent_output_is_visible() {
        let mut session = session();
        let mut theme = ThemeContext::hydrate(Box::new(MemoryThemeStore::new()), None);
        for i in 0..10 {
            session.dispatch(&format!("echo line{}", i), &mut theme, &[]);
        }
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| render_console(f, f.area(), &session, &DARK))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("line9"));
        assert!(!text.contains("line0"));
    }

    #[test]
    fn test_console_budget_handles_tall_terminals() {
        assert_eq!(console_budget(10), 4);
        assert_eq!(console_budget(u16::MAX), 26214);
    }

    #[test]
    fn test_input_window_short_text_is_untouched() {
        assert_eq!(input_window("help", 4, 20), ("help".to_string(), 4));
        assert_eq!(input_window("help", 0, 20), ("help".to_string(), 0));
    }

    #[test]
    fn test_input_window_scrolls_to_cursor() {
        let text = "echo abcdefghijklmnopqrstuvwxyz";
        let (visible, col) = input_window(text, text.chars().count(), 10);
        assert_eq!(visible, "rstuvwxyz");
        assert_eq!(col, 9);
        assert!(text.ends_with(&visible));
    }

    #[test]
    fn test_long_input_end_is_rendered() {
        let mut session = session();
        session.line_mut().set("search the quick brown fox jumps over the lazy dog");
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| render_console(f, f.area(), &session, &DARK))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("lazy dog"));
        assert!(!text.contains("search the"));
    }

    #[test]
    fn test_console_height_clamps() {
        let mut session = session();
        assert_eq!(console_height(&session, 40, 20), MIN_CONSOLE_HEIGHT);

        let mut theme = ThemeContext::hydrate(Box::new(MemoryThemeStore::new()), None);
        for _ in 0..30 {
            session.dispatch("echo x", &mut theme, &[]);
        }
        assert_eq!(console_height(&session, 40, 12), 12);
    }
}
