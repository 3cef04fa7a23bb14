//! Route changes.

use tracing::{debug, info};

use super::{App, Page};
use crate::content::{PostFilter, Route};

impl App {
    /// Show `route`.
    ///
    /// Moving to a different page tears down the console of the page being
    /// left, so nothing it queued fires later. Staying on the same page
    /// (a new anchor, a new tag) keeps the console.
    pub fn navigate_to(&mut self, route: Route) {
        info!("Navigate: {} -> {}", self.route, route);

        if !route.same_page(&self.route) {
            self.leave_page();
            self.scroll.reset();
            self.selected_post = 0;
            self.selected_tag = None;
        }

        self.route = route;
        match &self.route {
            Route::BlogIndex { tag } => {
                self.blog_filter = tag.clone().map(PostFilter::tag).unwrap_or_default();
                self.clamp_selection();
            }
            Route::Home {
                anchor: Some(anchor),
            } => {
                let anchor = *anchor;
                self.scroll_to_anchor(anchor);
            }
            _ => {}
        }
        self.mark_dirty();
    }

    fn leave_page(&mut self) {
        match self.page() {
            Page::Home => self.home_console.reset(),
            Page::BlogIndex => self.blog_console.reset(),
            Page::BlogPost => {}
        }
        debug!("Left page {}", self.route);
    }

    /// Keep the blog selection inside the visible list.
    pub(super) fn clamp_selection(&mut self) {
        let count = self.visible_posts().len();
        if self.selected_post >= count {
            self.selected_post = count.saturating_sub(1);
        }
    }

    /// Tab / BackTab on the blog index. Wraps around.
    pub fn select_post(&mut self, forward: bool) {
        let count = self.visible_posts().len();
        if count == 0 {
            return;
        }
        self.selected_post = if forward {
            (self.selected_post + 1) % count
        } else {
            (self.selected_post + count - 1) % count
        };
        self.mark_dirty();
    }

    /// Tab / BackTab on a post page: cycle through its tags.
    pub fn select_tag(&mut self, forward: bool) {
        let count = self.current_post().map_or(0, |post| post.tags.len());
        if count == 0 {
            return;
        }
        self.selected_tag = Some(match (self.selected_tag, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
        self.mark_dirty();
    }

    /// The tag picked on the post page, as written in the post.
    pub fn selected_tag_name(&self) -> Option<&str> {
        let index = self.selected_tag?;
        self.current_post()
            .and_then(|post| post.tags.get(index))
            .map(String::as_str)
    }

    /// Enter on a post page: show the blog filtered by the picked tag.
    pub fn open_selected_tag(&mut self) {
        if let Some(tag) = self.selected_tag_name().map(str::to_lowercase) {
            self.navigate_to(Route::BlogIndex { tag: Some(tag) });
        }
    }

    /// Enter on an empty blog console line.
    pub fn open_selected_post(&mut self) {
        if let Some(slug) = self.selected_slug() {
            self.navigate_to(Route::BlogPost { slug });
        }
    }
}
