use serde::{Deserialize, Serialize};

use crate::foundation::error::{StageError, StageResult};

/// Recorded browser input driving a replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollTrace {
    /// Events in time order.
    pub events: Vec<TraceEvent>,
}

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Scroll position changed.
    Scroll {
        /// Timestamp in milliseconds.
        at_ms: f64,
        /// Document scroll position.
        y: f64,
    },
    /// Viewport resized.
    Resize {
        /// Timestamp in milliseconds.
        at_ms: f64,
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
    /// Animation frame boundary.
    Frame {
        /// Timestamp in milliseconds.
        at_ms: f64,
    },
}

impl TraceEvent {
    /// Event timestamp.
    pub fn at_ms(&self) -> f64 {
        match *self {
            Self::Scroll { at_ms, .. } | Self::Resize { at_ms, .. } | Self::Frame { at_ms } => {
                at_ms
            }
        }
    }
}

impl ScrollTrace {
    /// Parse and validate JSON.
    pub fn from_json_str(s: &str) -> StageResult<Self> {
        let trace: Self = serde_json::from_str(s)?;
        trace.validate()?;
        Ok(trace)
    }

    /// Timestamps must be finite and non-decreasing.
    pub fn validate(&self) -> StageResult<()> {
        let mut prev = f64::NEG_INFINITY;
        for (i, e) in self.events.iter().enumerate() {
            let t = e.at_ms();
            if !t.is_finite() {
                return Err(StageError::validation(format!(
                    "trace event {i} has a non-finite timestamp"
                )));
            }
            if t < prev {
                return Err(StageError::validation(format!(
                    "trace event {i} goes back in time ({t} < {prev})"
                )));
            }
            prev = t;
        }
        Ok(())
    }

    /// Synthetic trace: scroll linearly from `from_y` to `to_y` over `frames` frames of
    /// `frame_ms`, with one scroll event and one frame per step.
    pub fn linear(from_y: f64, to_y: f64, frames: usize, frame_ms: f64) -> Self {
        let mut events = Vec::with_capacity(frames * 2 + 2);
        for i in 0..=frames {
            let t = if frames == 0 { 1.0 } else { i as f64 / frames as f64 };
            let at_ms = i as f64 * frame_ms;
            events.push(TraceEvent::Scroll {
                at_ms,
                y: from_y + (to_y - from_y) * t,
            });
            events.push(TraceEvent::Frame { at_ms });
        }
        Self { events }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/trace.rs"]
mod tests;
