//! Site header: name on the left, page links and theme on the right.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::palette::Palette;
use crate::app::{App, Page};

pub const HEADER_HEIGHT: u16 = 2;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let page = app.page();
    let nav_style = |active: bool| {
        if active {
            palette.accent()
        } else {
            palette.muted()
        }
    };

    let right = vec![
        Span::styled("home", nav_style(page == Page::Home)),
        Span::raw("  "),
        Span::styled("blog", nav_style(page != Page::Home)),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.theme.current()), palette.muted()),
    ];
    let right_width: usize = right.iter().map(|s| s.content.width()).sum();
    let title = &app.catalog.profile.site_title;
    let gap = (area.width as usize)
        .saturating_sub(title.width() + right_width)
        .max(1);

    let mut spans = vec![
        Span::styled(title.clone(), palette.heading()),
        Span::raw(" ".repeat(gap)),
    ];
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border()),
    );
    frame.render_widget(header, area);
}
