//! Home page: intro and the four sections above the pinned console.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::console::{console_budget, console_height, render_console};
use super::palette::Palette;
use super::text::{code_rows, wrap_styled};
use crate::app::App;
use crate::content::{Anchor, Catalog};

/// Page body rows plus the row each section starts on.
pub struct HomeLayout {
    pub lines: Vec<Line<'static>>,
    pub anchors: HashMap<Anchor, u16>,
}

fn section_heading(lines: &mut Vec<Line<'static>>, anchor: Anchor, width: usize, palette: &Palette) {
    lines.push(Line::from(Span::styled(anchor.title(), palette.heading())));
    lines.push(Line::from(Span::styled(
        "─".repeat(width.min(40)),
        palette.border(),
    )));
}

fn tag_line(tags: &[String], palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(format!("[{}]", tags.join(", ")), palette.accent()))
}

/// Lay the home page out at `width` columns.
pub fn layout_home(catalog: &Catalog, width: usize, palette: &Palette) -> HomeLayout {
    let profile = &catalog.profile;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors = HashMap::new();

    for intro in &profile.intro {
        lines.extend(wrap_styled(intro, width, palette.strong(), "", palette.muted()));
    }
    lines.push(Line::default());

    for anchor in Anchor::ALL {
        anchors.insert(anchor, lines.len().min(u16::MAX as usize) as u16);
        section_heading(&mut lines, anchor, width, palette);

        match anchor {
            Anchor::Projects => {
                for project in &catalog.projects {
                    lines.push(Line::from(vec![
                        Span::styled(project.title.clone(), palette.strong()),
                        Span::styled(format!("  ({})", project.slug), palette.muted()),
                    ]));
                    lines.push(tag_line(&project.tags, palette));
                    lines.extend(wrap_styled(
                        &project.description,
                        width,
                        palette.base(),
                        "",
                        palette.muted(),
                    ));
                    lines.push(Line::from(Span::styled(
                        format!("{} · {}", project.snippet_title, project.language),
                        palette.muted(),
                    )));
                    for row in code_rows(&project.snippet, width.saturating_sub(2)) {
                        lines.push(Line::from(vec![
                            Span::styled("│ ", palette.border()),
                            Span::styled(row, palette.code()),
                        ]));
                    }
                    lines.push(Line::from(Span::styled(project.github.clone(), palette.link())));
                    lines.push(Line::default());
                }
            }
            Anchor::Work => {
                for job in &catalog.experience {
                    lines.push(Line::from(vec![
                        Span::styled(job.title.clone(), palette.strong()),
                        Span::styled(format!(" @ {}", job.company), palette.accent()),
                    ]));
                    lines.push(Line::from(Span::styled(job.date.clone(), palette.muted())));
                    lines.push(tag_line(&job.stack, palette));
                    lines.extend(wrap_styled(
                        &job.description,
                        width,
                        palette.base(),
                        "",
                        palette.muted(),
                    ));
                    lines.push(Line::default());
                }
            }
            Anchor::About => {
                lines.extend(wrap_styled(&profile.about, width, palette.base(), "", palette.muted()));
                if let Some(fun_fact) = &profile.fun_fact {
                    lines.push(Line::default());
                    lines.extend(wrap_styled(fun_fact, width, palette.muted(), "", palette.muted()));
                }
                lines.push(Line::default());
            }
            Anchor::Contact => {
                let entries = [
                    ("email", profile.email.clone()),
                    ("github", profile.github.clone()),
                    ("linkedin", profile.linkedin.clone()),
                    ("resume", "type 'resume' below".to_string()),
                ];
                for (label, value) in entries {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:<9}", label), palette.muted()),
                        Span::styled(value, palette.link()),
                    ]));
                }
                lines.push(Line::default());
            }
        }
    }

    HomeLayout { lines, anchors }
}

pub fn render_home(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let console_rows = console_height(&app.home_console, area.width, console_budget(area.height));
    let [body, console] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(console_rows),
    ])
    .areas(area);

    let layout = layout_home(&app.catalog, body.width as usize, palette);
    let total = layout.lines.len().min(u16::MAX as usize) as u16;
    app.set_page_layout(layout.anchors, total.saturating_sub(body.height));

    let page = Paragraph::new(layout.lines).scroll((app.scroll.offset(), 0));
    frame.render_widget(page, body);
    render_console(frame, console, &app.home_console, palette);
}
