//! Application state and logic for the TUI.
//!
//! [`App`] owns the content, the theme and both consoles, tracks which
//! page is shown and applies the effects the consoles release:
//! - `navigation` - route changes and page teardown
//! - `effects` - the [`EffectSink`](crate::console::EffectSink) implementation
//! - `handlers` - keyboard, paste and mouse input
//! - [`SmoothScroll`] - eased page scrolling
//! - [`UrlOpener`] - links opened outside the terminal

mod effects;
mod handlers;
mod navigation;
mod opener;
mod scroll;

pub use opener::{SystemOpener, UrlOpener};
pub use scroll::SmoothScroll;

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::commands::{blog, home};
use crate::console::{viewport_width, ConsoleSession, PromptSet};
use crate::content::{Anchor, BlogPost, Catalog, PostFilter, Route};
use crate::error::FolioResult;
use crate::theme::ThemeContext;

/// Which input surface keys go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    BlogIndex,
    BlogPost,
}

impl Page {
    pub fn of(route: &Route) -> Page {
        match route {
            Route::Home { .. } => Page::Home,
            Route::BlogIndex { .. } => Page::BlogIndex,
            Route::BlogPost { .. } => Page::BlogPost,
        }
    }
}

pub struct App {
    /// Current page
    pub route: Route,
    pub catalog: Catalog,
    pub theme: ThemeContext,
    /// Console on the home page
    pub home_console: ConsoleSession,
    /// Console on the blog index
    pub blog_console: ConsoleSession,
    /// Posts shown on the blog index
    pub blog_filter: PostFilter,
    /// Index into the filtered post list
    pub selected_post: usize,
    /// Tag picked on the post page
    pub selected_tag: Option<usize>,
    /// Scroll of the page body
    pub scroll: SmoothScroll,
    /// Row of each home section within the page body, from the last render
    pub anchor_offsets: HashMap<Anchor, u16>,
    /// Anchor requested before its offset was known
    pending_anchor: Option<Anchor>,
    /// Viewport width in pixels (estimated from columns when unknown)
    pub viewport_width: u32,
    /// Terminal height in rows
    pub viewport_rows: u16,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    opener: Box<dyn UrlOpener>,
}

impl App {
    /// Build the app on the home page.
    ///
    /// `data_dir` is where the resume is looked up.
    pub fn new(
        catalog: Catalog,
        theme: ThemeContext,
        opener: Box<dyn UrlOpener>,
        effect_delay: Duration,
        data_dir: &Path,
    ) -> FolioResult<Self> {
        let handle = catalog.profile.handle.clone();
        let home_console = ConsoleSession::new(
            home::registry(&catalog.profile, data_dir)?,
            PromptSet::new(&handle, home::HOST),
            effect_delay,
        );
        let blog_console = ConsoleSession::new(
            blog::registry()?,
            PromptSet::new(&handle, blog::HOST),
            effect_delay,
        );

        Ok(Self {
            route: Route::home(),
            catalog,
            theme,
            home_console,
            blog_console,
            blog_filter: PostFilter::All,
            selected_post: 0,
            selected_tag: None,
            scroll: SmoothScroll::new(),
            anchor_offsets: HashMap::new(),
            pending_anchor: None,
            viewport_width: viewport_width(80, 0),
            viewport_rows: 24,
            needs_redraw: true,
            should_quit: false,
            opener,
        })
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn page(&self) -> Page {
        Page::of(&self.route)
    }

    /// The console on the current page, if it has one.
    pub fn active_console(&self) -> Option<&ConsoleSession> {
        match self.page() {
            Page::Home => Some(&self.home_console),
            Page::BlogIndex => Some(&self.blog_console),
            Page::BlogPost => None,
        }
    }

    pub fn active_console_mut(&mut self) -> Option<&mut ConsoleSession> {
        match self.page() {
            Page::Home => Some(&mut self.home_console),
            Page::BlogIndex => Some(&mut self.blog_console),
            Page::BlogPost => None,
        }
    }

    /// Posts passing the blog filter, newest first.
    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        self.blog_filter.apply(&self.catalog.posts)
    }

    pub fn selected_slug(&self) -> Option<String> {
        self.visible_posts()
            .get(self.selected_post)
            .map(|post| post.slug.clone())
    }

    /// The post the current route points at, if it exists.
    pub fn current_post(&self) -> Option<&BlogPost> {
        match &self.route {
            Route::BlogPost { slug } => self.catalog.post(slug),
            _ => None,
        }
    }

    /// Terminal resized (or first measured).
    pub fn update_viewport(&mut self, columns: u16, rows: u16, pixel_width: u16) {
        self.viewport_width = viewport_width(columns, pixel_width);
        self.viewport_rows = rows;
        self.home_console.set_viewport_width(self.viewport_width);
        self.blog_console.set_viewport_width(self.viewport_width);
        self.mark_dirty();
    }

    /// Record where the home sections were laid out and the scroll limit.
    ///
    /// Resolves an anchor requested before the first layout.
    pub fn set_page_layout(&mut self, anchor_offsets: HashMap<Anchor, u16>, max_scroll: u16) {
        self.anchor_offsets = anchor_offsets;
        self.scroll.set_max(max_scroll);
        if let Some(anchor) = self.pending_anchor.take() {
            self.scroll_to_anchor(anchor);
        }
    }

    fn scroll_to_anchor(&mut self, anchor: Anchor) {
        match self.anchor_offsets.get(&anchor) {
            Some(&offset) => self.scroll.scroll_to(offset),
            None => self.pending_anchor = Some(anchor),
        }
    }

    /// Animation step, called on every loop tick.
    pub fn tick(&mut self) {
        if self.scroll.tick() {
            self.mark_dirty();
        }
    }

    /// Half a screen, at least one row.
    pub fn page_step(&self) -> i32 {
        i32::from((self.viewport_rows / 2).max(1))
    }
}
