use crate::foundation::core::{TriggerGeometry, clamp_unit};
use crate::foundation::math::sanitize_length;

/// Scroll interval during which a section is pinned and scroll drives progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollRegion {
    /// Document-space top of the trigger element.
    pub trigger_top: f64,
    /// Trigger element height.
    pub trigger_height: f64,
    /// Scroll distance the region stays pinned for.
    pub total_scroll_distance: f64,
}

impl ScrollRegion {
    /// Region bound to `trigger`. Non-finite or negative distances collapse to `0`.
    pub fn new(trigger: TriggerGeometry, total_scroll_distance: f64) -> Self {
        Self {
            trigger_top: if trigger.top.is_finite() { trigger.top } else { 0.0 },
            trigger_height: sanitize_length(trigger.height),
            total_scroll_distance: sanitize_length(total_scroll_distance),
        }
    }

    /// Scroll position where pinning starts (trigger top reaches viewport top).
    pub fn pin_start(&self) -> f64 {
        self.trigger_top
    }

    /// Scroll position where pinning ends.
    pub fn pin_end(&self) -> f64 {
        self.trigger_top + self.total_scroll_distance
    }

    /// A region with nothing to scrub through never pins.
    pub fn is_pinnable(&self) -> bool {
        self.total_scroll_distance > 0.0
    }

    /// Whether `scroll_y` lies inside the pinned interval.
    pub fn is_pinned_at(&self, scroll_y: f64) -> bool {
        self.is_pinnable() && scroll_y >= self.pin_start() && scroll_y <= self.pin_end()
    }

    /// Progress at `scroll_y`, clamped to `[0, 1]`.
    ///
    /// Degenerate regions report a constant `0`.
    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        if !self.is_pinnable() {
            return 0.0;
        }
        clamp_unit((scroll_y - self.pin_start()) / self.total_scroll_distance)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pin/region.rs"]
mod tests;
