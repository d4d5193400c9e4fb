use crate::foundation::error::{StageError, StageResult};

/// Default fast-scroll threshold in pixels per second.
pub const DEFAULT_FAST_SCROLL_PX_PER_SEC: f64 = 2500.0;
/// Samples older than this no longer contribute velocity.
pub const DEFAULT_STALE_AFTER_MS: f64 = 100.0;

/// Tuning for [`ScrollVelocityGate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VelocityGateConfig {
    /// Speed above which the gate opens.
    pub threshold_px_per_sec: f64,
    /// EMA factor in `(0, 1]`; `1` uses the raw two-sample estimate.
    pub smoothing: f64,
    /// Idle time after which velocity reads as zero.
    pub stale_after_ms: f64,
}

impl Default for VelocityGateConfig {
    fn default() -> Self {
        Self {
            threshold_px_per_sec: DEFAULT_FAST_SCROLL_PX_PER_SEC,
            smoothing: 1.0,
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
        }
    }
}

impl VelocityGateConfig {
    /// Check ranges.
    pub fn validate(&self) -> StageResult<()> {
        if !(self.threshold_px_per_sec.is_finite() && self.threshold_px_per_sec >= 0.0) {
            return Err(StageError::validation("velocity threshold must be finite and >= 0"));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(StageError::validation("velocity smoothing must be in (0, 1]"));
        }
        if !(self.stale_after_ms.is_finite() && self.stale_after_ms > 0.0) {
            return Err(StageError::validation("stale_after_ms must be finite and > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollSample {
    position: f64,
    at_ms: f64,
}

/// Flags fast scrolling so expensive consumers can skip a frame.
///
/// Only gates optional work; progress computation never consults it.
#[derive(Clone, Debug)]
pub struct ScrollVelocityGate {
    config: VelocityGateConfig,
    last: Option<ScrollSample>,
    velocity: f64,
}

impl ScrollVelocityGate {
    /// Gate with validated `config`.
    pub fn new(config: VelocityGateConfig) -> StageResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            last: None,
            velocity: 0.0,
        })
    }

    /// Feed a scroll position observed at `at_ms`.
    ///
    /// Samples that do not advance time are ignored.
    pub fn record(&mut self, position: f64, at_ms: f64) {
        if !(position.is_finite() && at_ms.is_finite()) {
            return;
        }
        let sample = ScrollSample { position, at_ms };
        let Some(prev) = self.last else {
            self.last = Some(sample);
            self.velocity = 0.0;
            return;
        };

        let dt_ms = at_ms - prev.at_ms;
        if dt_ms <= 0.0 {
            return;
        }

        let raw = (position - prev.position) / dt_ms * 1000.0;
        let prior = if dt_ms > self.config.stale_after_ms {
            0.0
        } else {
            self.velocity
        };
        self.velocity = prior + self.config.smoothing * (raw - prior);
        self.last = Some(sample);
    }

    /// Estimated velocity (px/s) as seen at `now_ms`; zero once the last sample is stale.
    pub fn velocity_at(&self, now_ms: f64) -> f64 {
        match self.last {
            Some(last) if now_ms - last.at_ms <= self.config.stale_after_ms => self.velocity,
            _ => 0.0,
        }
    }

    /// Whether consumers should skip expensive work this frame.
    pub fn is_fast(&self, now_ms: f64) -> bool {
        self.velocity_at(now_ms).abs() > self.config.threshold_px_per_sec
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.last = None;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/velocity.rs"]
mod tests;
