//! Page scroll position with eased movement toward a target.

/// Vertical scroll offset in rows.
///
/// `offset` is what is drawn; `target` is where it is heading. Each
/// [`tick`](Self::tick) covers a third of the remaining distance, at least
/// one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothScroll {
    offset: u16,
    target: u16,
    max: u16,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn is_animating(&self) -> bool {
        self.offset != self.target
    }

    /// Largest reachable offset, from the last layout. Clamps both positions.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Animate toward `target`.
    pub fn scroll_to(&mut self, target: u16) {
        self.target = target.min(self.max);
    }

    /// Jump by `delta` rows without animating.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max));
        self.offset = next as u16;
        self.target = self.offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.target = 0;
    }

    /// Advance one animation step. Returns whether the offset moved.
    pub fn tick(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }

        let distance = self.offset.abs_diff(self.target);
        let step = (distance / 3).max(1);
        if self.offset < self.target {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        true
    }
}
