//! Side effects requested by commands and applied after the next render.
//!
//! Commands never act on the app directly. They push an [`Effect`] and the
//! session queues it here. Nothing is released until the app reports that
//! the frame showing the command's output has been drawn. Navigation and
//! external opens additionally wait out a short delay so the confirmation
//! stays readable.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::content::{Anchor, ExternalLink, PostFilter, Route};

/// Default hold time for navigation and external opens.
pub const DEFAULT_EFFECT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollTo(Anchor),
    Navigate(Route),
    OpenExternal(ExternalLink),
    ApplyFilter(PostFilter),
    ResetFilter,
    /// Handled by the session itself; never reaches a sink.
    ClearScreen,
}

impl Effect {
    /// Whether the effect waits for the configured delay after render.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Effect::Navigate(_) | Effect::OpenExternal(_))
    }

    /// Hand the effect to a sink.
    pub fn apply_to(self, sink: &mut dyn EffectSink) {
        match self {
            Effect::ScrollTo(anchor) => sink.scroll_to(anchor),
            Effect::Navigate(route) => sink.navigate(route),
            Effect::OpenExternal(link) => sink.open_external(link),
            Effect::ApplyFilter(filter) => sink.apply_filter(filter),
            Effect::ResetFilter => sink.reset_filter(),
            Effect::ClearScreen => {}
        }
    }
}

/// Receiver of released effects.
pub trait EffectSink {
    fn scroll_to(&mut self, anchor: Anchor);
    fn navigate(&mut self, route: Route);
    fn open_external(&mut self, link: ExternalLink);
    fn apply_filter(&mut self, filter: PostFilter);
    fn reset_filter(&mut self);
}

#[derive(Debug)]
struct Pending {
    effect: Effect,
    /// Set once the requesting output has been rendered.
    due: Option<Instant>,
}

/// Effects waiting for render and, for deferred ones, their delay.
#[derive(Debug)]
pub struct EffectQueue {
    pending: Vec<Pending>,
    delay: Duration,
}

impl Default for EffectQueue {
    fn default() -> Self {
        Self::new(DEFAULT_EFFECT_DELAY)
    }
}

impl EffectQueue {
    pub fn new(delay: Duration) -> Self {
        Self {
            pending: Vec::new(),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, effect: Effect) {
        debug!("Queued effect: {:?}", effect);
        self.pending.push(Pending { effect, due: None });
    }

    /// Start the clock on everything queued before this render.
    pub fn mark_rendered(&mut self, now: Instant) {
        let delay = self.delay;
        for pending in self.pending.iter_mut().filter(|p| p.due.is_none()) {
            let wait = if pending.effect.is_deferred() {
                delay
            } else {
                Duration::ZERO
            };
            pending.due = Some(now + wait);
        }
    }

    /// Remove and return every effect whose time has come, in queue order.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<Effect> {
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due.is_some_and(|due| due <= now));
        self.pending = waiting;
        ready.into_iter().map(|p| p.effect).collect()
    }

    /// Earliest scheduled release, if any effect has been rendered.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.due).min()
    }

    /// Whether something was queued but not yet rendered.
    pub fn awaiting_render(&self) -> bool {
        self.pending.iter().any(|p| p.due.is_none())
    }

    /// Drop everything pending. Returns how many effects were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        if cancelled > 0 {
            debug!("Cancelled {} pending effect(s)", cancelled);
        }
        self.pending.clear();
        cancelled
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_nothing_released_before_render() {
        let mut queue = EffectQueue::new(DELAY);
        queue.push(Effect::ScrollTo(Anchor::Work));
        let later = Instant::now() + Duration::from_secs(10);
        assert!(queue.drain_ready(later).is_empty());
        assert!(queue.awaiting_render());
    }

    #[test]
    fn test_immediate_effect_after_render() {
        let mut queue = EffectQueue::new(DELAY);
        queue.push(Effect::ScrollTo(Anchor::Work));
        let now = Instant::now();
        queue.mark_rendered(now);
        assert_eq!(queue.drain_ready(now), vec![Effect::ScrollTo(Anchor::Work)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_navigation_waits_for_delay() {
        let mut queue = EffectQueue::new(DELAY);
        queue.push(Effect::Navigate(Route::blog()));
        let now = Instant::now();
        queue.mark_rendered(now);

        assert!(queue.drain_ready(now + Duration::from_millis(499)).is_empty());
        assert_eq!(queue.next_due(), Some(now + DELAY));
        assert_eq!(
            queue.drain_ready(now + DELAY),
            vec![Effect::Navigate(Route::blog())]
        );
    }

    #[test]
    fn test_ready_effects_keep_queue_order() {
        let mut queue = EffectQueue::new(Duration::ZERO);
        queue.push(Effect::Navigate(Route::home()));
        queue.push(Effect::ResetFilter);
        let now = Instant::now();
        queue.mark_rendered(now);
        assert_eq!(
            queue.drain_ready(now),
            vec![Effect::Navigate(Route::home()), Effect::ResetFilter]
        );
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = EffectQueue::new(DELAY);
        queue.push(Effect::Navigate(Route::blog()));
        queue.push(Effect::ResetFilter);
        assert_eq!(queue.cancel_all(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
    }

    #[test]
    fn test_deferred_classification() {
        assert!(Effect::Navigate(Route::home()).is_deferred());
        assert!(Effect::OpenExternal(ExternalLink::new("x", "y")).is_deferred());
        assert!(!Effect::ApplyFilter(PostFilter::All).is_deferred());
        assert!(!Effect::ClearScreen.is_deferred());
    }
}
