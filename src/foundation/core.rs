use crate::foundation::error::{StageError, StageResult};

pub use kurbo::Rect;

/// Clamp `v` into `[0, 1]`. NaN maps to `0`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport (finite, non-negative dimensions).
    pub fn new(width: f64, height: f64) -> StageResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    /// Check that both dimensions are finite and non-negative.
    pub fn validate(&self) -> StageResult<()> {
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(StageError::geometry("viewport width must be finite and >= 0"));
        }
        if !(self.height.is_finite() && self.height >= 0.0) {
            return Err(StageError::geometry("viewport height must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Vertical placement of a trigger element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerGeometry {
    /// Document-space top edge.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl TriggerGeometry {
    /// Convert a viewport-relative bounding rect into document space.
    ///
    /// `scroll_y` is the scroll position at the time `rect` was measured.
    pub fn from_viewport_rect(rect: Rect, scroll_y: f64) -> Self {
        Self {
            top: rect.y0 + scroll_y,
            height: rect.height(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
