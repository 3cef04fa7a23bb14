//! Applying console effects to the app.

use std::time::Instant;

use tracing::{debug, warn};

use super::{App, Page};
use crate::console::{Effect, EffectSink};
use crate::content::{Anchor, ExternalLink, PostFilter, Route};

impl EffectSink for App {
    fn scroll_to(&mut self, anchor: Anchor) {
        self.scroll_to_anchor(anchor);
    }

    fn navigate(&mut self, route: Route) {
        self.navigate_to(route);
    }

    fn open_external(&mut self, link: ExternalLink) {
        if let Err(e) = self.opener.open(&link.target) {
            warn!("Failed to open {}: {}", link.label, e);
            let message = format!("Could not open {}: {}", link.label, e.user_message());
            if let Some(console) = self.active_console_mut() {
                console.push_error(message);
            }
        }
    }

    /// Tag filters are reflected in the route; searches filter in place on
    /// plain `/blog`.
    fn apply_filter(&mut self, filter: PostFilter) {
        let tag = match &filter {
            PostFilter::Tag(tag) => Some(tag.clone()),
            PostFilter::All | PostFilter::Search(_) => None,
        };
        self.route = Route::BlogIndex { tag };
        self.blog_filter = filter;
        self.selected_post = 0;
        self.scroll.reset();
        self.mark_dirty();
    }

    fn reset_filter(&mut self) {
        self.apply_filter(PostFilter::All);
    }
}

impl App {
    /// A frame was drawn: start the clock on everything queued so far.
    pub fn mark_rendered(&mut self, now: Instant) {
        self.home_console.mark_rendered(now);
        self.blog_console.mark_rendered(now);
    }

    /// Apply every effect of the active console that is due.
    ///
    /// Stops at the first page change; the rest belonged to the console
    /// that was just torn down. Returns whether anything was applied.
    pub fn flush_effects(&mut self, now: Instant) -> bool {
        let ready = match self.page() {
            Page::Home => self.home_console.drain_ready(now),
            Page::BlogIndex => self.blog_console.drain_ready(now),
            Page::BlogPost => return false,
        };
        if ready.is_empty() {
            return false;
        }

        let page = self.route.clone();
        let mut applied = false;
        for effect in ready {
            if !self.route.same_page(&page) {
                debug!("Dropping {:?} after leaving {}", effect, page);
                continue;
            }
            effect.apply_to(self);
            applied = true;
        }

        self.mark_dirty();
        applied
    }

    /// Open the current post's repository.
    pub fn open_post_repo(&mut self) {
        let Some(link) = self
            .current_post()
            .map(|post| ExternalLink::new("repository", &post.github))
        else {
            return;
        };
        Effect::OpenExternal(link).apply_to(self);
    }
}
