// crates/certilife-core/src/scroll.rs
// Scroll position -> header chrome flag and smoothed progress ratio

use crate::spring::{Spring, SpringConfig};

/// Default offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Raw measurements taken from a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    /// Fraction of the scrollable range covered, in `[0, 1]`. Zero when the
    /// page is shorter than the viewport.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !range.is_finite() || range <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }
}

/// What one scroll event tells the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignals {
    pub scrolled: bool,
    /// Unsmoothed progress, also the spring's new target.
    pub raw_progress: f64,
}

/// `true` strictly above the threshold: 50 is not scrolled, 51 is.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    progress: Spring,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLLED_THRESHOLD_PX, SpringConfig::default())
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64, spring: SpringConfig) -> Self {
        Self {
            threshold,
            progress: Spring::new(spring, 0.0),
        }
    }

    /// Feed a scroll event. The two signals are independent: the flag is
    /// exact, the progress only retargets the spring.
    pub fn observe(&mut self, sample: ScrollSample) -> ScrollSignals {
        let raw_progress = sample.progress();
        self.progress.set_target(raw_progress);
        ScrollSignals {
            scrolled: is_scrolled(sample.scroll_y, self.threshold),
            raw_progress,
        }
    }

    /// Advance the progress spring by one frame. `Some(ratio)` while it is
    /// moving; `None` once it has settled and no more frames are needed.
    pub fn step(&mut self, dt_secs: f64) -> Option<f64> {
        if self.progress.is_at_rest() {
            return None;
        }
        self.progress.step(dt_secs);
        Some(self.progress.value())
    }

    /// Smoothed ratio, for the bar's scale.
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn is_settled(&self) -> bool {
        self.progress.is_at_rest()
    }
}
