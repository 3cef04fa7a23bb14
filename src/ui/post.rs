//! A single blog post.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::palette::Palette;
use super::text::{code_rows, wrap_styled};
use crate::app::App;
use crate::content::{BlogPost, Section};

fn meta_line(post: &BlogPost) -> String {
    let mut parts = vec![format!("Published {}", post.published_label())];
    if let Some(updated) = post.updated_label() {
        parts.push(format!("Updated {}", updated));
    }
    parts.push(format!("{} min read", post.reading_time_minutes));
    parts.join(" · ")
}

fn push_section(lines: &mut Vec<Line<'static>>, section: &Section, width: usize, palette: &Palette) {
    match section {
        Section::Heading { content } => {
            lines.push(Line::default());
            lines.extend(wrap_styled(content, width, palette.heading(), "", palette.heading()));
        }
        Section::Heading2 { content } => {
            lines.extend(wrap_styled(content, width, palette.subheading(), "", palette.subheading()));
        }
        Section::Text { content } => {
            lines.extend(wrap_styled(content, width, palette.base(), "", palette.base()));
            lines.push(Line::default());
        }
        Section::Code { language, code } => {
            if let Some(language) = language {
                lines.push(Line::from(Span::styled(language.clone(), palette.muted())));
            }
            for row in code_rows(code, width.saturating_sub(2)) {
                lines.push(Line::from(vec![
                    Span::styled("│ ", palette.border()),
                    Span::styled(row, palette.code()),
                ]));
            }
            lines.push(Line::default());
        }
        Section::List { items } => {
            for item in items {
                lines.extend(
                    wrap_styled(item, width.saturating_sub(2), palette.base(), "", palette.base())
                        .into_iter()
                        .enumerate()
                        .map(|(i, mut line)| {
                            let bullet = if i == 0 { "• " } else { "  " };
                            line.spans.insert(0, Span::styled(bullet, palette.accent()));
                            line
                        }),
                );
            }
            lines.push(Line::default());
        }
        Section::Quote { content } => {
            let style = palette.muted().add_modifier(Modifier::ITALIC);
            lines.extend(wrap_styled(content, width, style, "┃ ", palette.accent()));
            lines.push(Line::default());
        }
        Section::Image { src, alt, caption } => {
            let label = if alt.is_empty() { src.as_str() } else { alt.as_str() };
            lines.push(Line::from(vec![
                Span::styled("[image] ", palette.muted()),
                Span::styled(label.to_string(), palette.link()),
            ]));
            if let Some(caption) = caption {
                lines.extend(wrap_styled(caption, width, palette.muted(), "", palette.muted()));
            }
            lines.push(Line::default());
        }
        Section::Link { href, label } => {
            let text = match label {
                Some(label) => format!("{} ({})", label, href),
                None => href.clone(),
            };
            lines.extend(wrap_styled(&text, width, palette.link(), "→ ", palette.accent()));
            lines.push(Line::default());
        }
    }
}

/// Tags as individual chips, the picked one highlighted.
fn tag_chips(tags: &[String], selected: Option<usize>, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if selected == Some(i) {
            palette.accent().add_modifier(Modifier::REVERSED)
        } else {
            palette.accent()
        };
        spans.push(Span::styled(format!("#{}", tag.to_lowercase()), style));
    }
    Line::from(spans)
}

/// Lay a post out at `width` columns.
pub fn layout_post(
    post: &BlogPost,
    selected_tag: Option<usize>,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(wrap_styled(&post.title, width, palette.heading(), "", palette.heading()));
    lines.push(Line::from(Span::styled(meta_line(post), palette.muted())));
    lines.push(tag_chips(&post.tags, selected_tag, palette));
    lines.push(Line::default());
    lines.extend(wrap_styled(
        &post.summary,
        width,
        palette.muted().add_modifier(Modifier::ITALIC),
        "",
        palette.muted(),
    ));

    if !post.highlights.is_empty() {
        lines.push(Line::default());
        for highlight in &post.highlights {
            lines.extend(wrap_styled(highlight, width, palette.base(), "✓ ", palette.accent()));
        }
    }

    for section in &post.sections {
        push_section(&mut lines, section, width, palette);
    }

    lines.push(Line::from(vec![
        Span::styled("Source: ", palette.muted()),
        Span::styled(post.github.clone(), palette.link()),
    ]));
    lines
}

fn layout_missing(slug: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Post not found", palette.heading())),
        Line::from(Span::styled(
            format!("There is no post called '{}'.", slug),
            palette.muted(),
        )),
    ]
}

pub fn render_post(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette, slug: &str) {
    let [body, hint] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let lines = match app.current_post() {
        Some(post) => layout_post(post, app.selected_tag, body.width as usize, palette),
        None => layout_missing(slug, palette),
    };
    let total = lines.len().min(u16::MAX as usize) as u16;
    app.scroll.set_max(total.saturating_sub(body.height));

    frame.render_widget(Paragraph::new(lines).scroll((app.scroll.offset(), 0)), body);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "esc back · tab tag · enter filter by tag · o repository · ↑↓ scroll",
            palette.muted(),
        ))),
        hint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::ui::palette::DARK;

    #[test]
    fn test_meta_line_includes_update_when_different() {
        let catalog = Catalog::load_embedded().unwrap();
        let post = catalog.post("aera").unwrap();
        assert_eq!(
            meta_line(post),
            "Published July 26, 2025 · Updated July 29, 2025 · 14 min read"
        );
    }

    #[test]
    fn test_layout_ends_with_source_link() {
        let catalog = Catalog::load_embedded().unwrap();
        let post = catalog.post("aera").unwrap();
        let lines = layout_post(post, None, 80, &DARK);
        let last = lines.last().unwrap();
        assert_eq!(last.spans[1].content, post.github);
        assert_eq!(lines[0].spans[1].content, "Aera");
    }

    #[test]
    fn test_tag_chips_highlight_selection() {
        let tags = vec!["C++".to_string(), "CMake".to_string()];
        let line = tag_chips(&tags, Some(1), &DARK);
        assert_eq!(line.spans[0].content, "#c++");
        assert_eq!(line.spans[2].content, "#cmake");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::REVERSED));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_missing_post() {
        let lines = layout_missing("nope", &DARK);
        assert_eq!(lines[0].spans[0].content, "Post not found");
    }
}
