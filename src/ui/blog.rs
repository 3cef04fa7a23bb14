//! Blog index: heading, console and the filtered post list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::console::{console_budget, console_height, render_console};
use super::palette::Palette;
use super::text::wrap_styled;
use crate::app::App;
use crate::content::{BlogPost, PostFilter};

pub const EMPTY_LIST_MESSAGE: &str = "No posts found matching your criteria.";

/// Shown under the empty message while a filter is active.
pub const CLEAR_FILTERS_HINT: &str = "Press enter on an empty line to clear filters.";

/// Rows of the post list and the row range of each entry.
pub struct ListLayout {
    pub lines: Vec<Line<'static>>,
    pub entries: Vec<(u16, u16)>,
}

pub fn layout_list(
    posts: &[&BlogPost],
    selected: usize,
    filter_active: bool,
    width: usize,
    palette: &Palette,
) -> ListLayout {
    let mut lines = Vec::new();
    let mut entries = Vec::new();

    if posts.is_empty() {
        lines.push(Line::from(Span::styled(EMPTY_LIST_MESSAGE, palette.muted())));
        if filter_active {
            lines.push(Line::from(Span::styled(CLEAR_FILTERS_HINT, palette.accent())));
        }
        return ListLayout { lines, entries };
    }

    for (i, post) in posts.iter().enumerate() {
        let start = lines.len() as u16;
        let (marker, title_style) = if i == selected {
            ("▸ ", palette.heading())
        } else {
            ("  ", palette.strong())
        };

        lines.push(Line::from(vec![
            Span::styled(marker, palette.accent()),
            Span::styled(post.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} · {} min read",
                post.published_label(),
                post.reading_time_minutes
            ),
            palette.muted(),
        )));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(post.tag_list(), palette.accent()),
        ]));
        lines.extend(wrap_styled(&post.summary, width, palette.base(), "  ", palette.base()));
        lines.push(Line::default());
        entries.push((start, lines.len() as u16));
    }

    ListLayout { lines, entries }
}

fn filter_status(filter: &PostFilter) -> String {
    match filter {
        PostFilter::All => "Showing all posts".to_string(),
        PostFilter::Search(query) => format!("Posts matching \"{}\"", query),
        PostFilter::Tag(tag) => format!("Posts tagged {}", tag),
    }
}

pub fn render_blog(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let console_rows = console_height(&app.blog_console, area.width, console_budget(area.height));
    let [heading, console, _gap, list, hint] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(console_rows),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let heading_lines = vec![
        Line::from(Span::styled("Blog", palette.heading())),
        Line::from(Span::styled(filter_status(&app.blog_filter), palette.muted())),
    ];
    frame.render_widget(Paragraph::new(heading_lines), heading);
    render_console(frame, console, &app.blog_console, palette);

    let layout = {
        let posts = app.visible_posts();
        layout_list(
            &posts,
            app.selected_post,
            app.blog_filter.is_active(),
            list.width as usize,
            palette,
        )
    };
    let total = layout.lines.len() as u16;
    app.scroll.set_max(total.saturating_sub(list.height));

    // Keep the selected entry on screen.
    if let Some(&(start, end)) = layout.entries.get(app.selected_post) {
        let target = app.scroll.target();
        if start < target {
            app.scroll.scroll_to(start);
        } else if end > target.saturating_add(list.height) {
            app.scroll.scroll_to(end - list.height);
        }
    }

    frame.render_widget(
        Paragraph::new(layout.lines).scroll((app.scroll.offset(), 0)),
        list,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "tab select · enter open · ctrl+t theme · ctrl+c quit",
            palette.muted(),
        ))),
        hint,
    );
}
