use crate::foundation::core::Viewport;
use crate::foundation::error::{StageError, StageResult};
use crate::foundation::math::sanitize_length;

/// Extra travel past the last item, as a fraction of one item's width.
pub const DEFAULT_SLACK_ITEM_FRACTION: f64 = 0.15;
/// Leading no-motion scroll distance, as a fraction of viewport height.
pub const DEFAULT_BUFFER_VIEWPORT_FRACTION: f64 = 0.3;

/// Per-carousel tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Buffer distance as a fraction of viewport height.
    pub buffer_viewport_fraction: f64,
    /// Slack as a fraction of one item's width.
    pub slack_item_fraction: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            buffer_viewport_fraction: DEFAULT_BUFFER_VIEWPORT_FRACTION,
            slack_item_fraction: DEFAULT_SLACK_ITEM_FRACTION,
        }
    }
}

impl CarouselConfig {
    /// Both fractions must be finite and non-negative.
    pub fn validate(&self) -> StageResult<()> {
        if !(self.buffer_viewport_fraction.is_finite() && self.buffer_viewport_fraction >= 0.0) {
            return Err(StageError::validation("buffer_viewport_fraction must be finite and >= 0"));
        }
        if !(self.slack_item_fraction.is_finite() && self.slack_item_fraction >= 0.0) {
            return Err(StageError::validation("slack_item_fraction must be finite and >= 0"));
        }
        Ok(())
    }
}

/// DOM measurements a carousel's geometry is derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselMeasurements {
    /// Full scrollable width of the track.
    pub content_width: f64,
    /// Visible width of the container.
    pub viewport_width: f64,
    /// Viewport height, used for the buffer distance.
    pub viewport_height: f64,
    /// Width of one item.
    pub item_width: f64,
}

impl CarouselMeasurements {
    /// Measurements for `item_count` items of `item_width` separated by `gap`.
    pub fn from_items(item_count: usize, item_width: f64, gap: f64, viewport: Viewport) -> Self {
        let content_width = if item_count == 0 {
            0.0
        } else {
            item_width * item_count as f64 + gap * (item_count - 1) as f64
        };
        Self {
            content_width,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            item_width,
        }
    }
}

/// Scroll geometry of a horizontally translated container.
///
/// Always rebuilt wholesale from fresh measurements; never patched in place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CarouselGeometry {
    /// Measured content width.
    pub content_width: f64,
    /// Measured viewport width.
    pub viewport_width: f64,
    /// Leading scroll distance with no horizontal motion.
    pub buffer_distance: f64,
    /// Extra travel past the last item.
    pub slack: f64,
    /// Horizontal distance the content moves.
    pub travel_distance: f64,
    /// `buffer_distance + travel_distance`.
    pub total_scroll_distance: f64,
}

impl CarouselGeometry {
    /// Derive geometry from measurements.
    pub fn measure(m: &CarouselMeasurements, cfg: &CarouselConfig) -> Self {
        let slack = sanitize_length(m.item_width) * sanitize_length(cfg.slack_item_fraction);
        let buffer =
            sanitize_length(m.viewport_height) * sanitize_length(cfg.buffer_viewport_fraction);
        Self::from_parts(m.content_width, m.viewport_width, slack, buffer)
    }

    /// Geometry from already-resolved lengths.
    pub fn from_parts(
        content_width: f64,
        viewport_width: f64,
        slack: f64,
        buffer_distance: f64,
    ) -> Self {
        let content_width = sanitize_length(content_width);
        let viewport_width = sanitize_length(viewport_width);
        let slack = sanitize_length(slack);
        let buffer_distance = sanitize_length(buffer_distance);

        let travel_distance = (content_width - viewport_width + slack).max(0.0);

        Self {
            content_width,
            viewport_width,
            buffer_distance,
            slack,
            travel_distance,
            total_scroll_distance: buffer_distance + travel_distance,
        }
    }

    /// `true` when nothing needs to move.
    pub fn is_degenerate(&self) -> bool {
        self.travel_distance <= 0.0
    }

    /// Leading fraction of progress that produces no motion.
    pub fn buffer_ratio(&self) -> f64 {
        if self.total_scroll_distance <= 0.0 {
            return 0.0;
        }
        self.buffer_distance / self.total_scroll_distance
    }

    /// Distance the owning region should pin for; `0` when there is nothing to scroll.
    pub fn pinned_scroll_distance(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.total_scroll_distance
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/geometry.rs"]
mod tests;
