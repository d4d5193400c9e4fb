use crate::foundation::core::clamp_unit;
use crate::foundation::error::{StageError, StageResult};
use crate::progress::distributor::SegmentPosition;
use crate::progress::segments::{SegmentPlan, TimeRange};
use crate::target::{MediaState, TargetHandle};

/// Seeks closer than this (seconds) to the current position are skipped.
pub const DEFAULT_SEEK_EPSILON_SECS: f64 = 0.02;

/// Outcome of one scrub request.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrubDecision {
    /// The resource is not seek-ready (or the segment's range is still unresolved).
    NotReady,
    /// Already within epsilon of the target; nothing written.
    Hold {
        /// Current resource time.
        time: f64,
    },
    /// A seek was (or should be) issued.
    Seek {
        /// Resource time before the seek.
        from: f64,
        /// Clamped target time.
        to: f64,
    },
}

/// Drives a media resource's playback cursor from segment-local progress.
///
/// The scrubber only ever sets the position; playback state belongs to whoever owns the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaScrubber {
    epsilon_secs: f64,
}

impl Default for MediaScrubber {
    fn default() -> Self {
        Self {
            epsilon_secs: DEFAULT_SEEK_EPSILON_SECS,
        }
    }
}

impl MediaScrubber {
    /// Scrubber with a custom seek threshold in seconds.
    pub fn new(epsilon_secs: f64) -> StageResult<Self> {
        if !(epsilon_secs.is_finite() && epsilon_secs >= 0.0) {
            return Err(StageError::validation("seek epsilon must be finite and >= 0"));
        }
        Ok(Self { epsilon_secs })
    }

    /// Seek threshold in seconds.
    pub fn epsilon_secs(&self) -> f64 {
        self.epsilon_secs
    }

    /// Target time for `local` progress inside `range`, clamped to `[0, duration]`.
    pub fn target_time(range: TimeRange, local: f64, duration: f64) -> f64 {
        let t = range.at(clamp_unit(local));
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, duration.max(0.0))
    }

    /// Decide what to do for `media` without touching anything.
    pub fn decide(&self, media: MediaState, range: Option<TimeRange>, local: f64) -> ScrubDecision {
        let Some(duration) = media.known_duration() else {
            return ScrubDecision::NotReady;
        };
        let Some(range) = range else {
            return ScrubDecision::NotReady;
        };

        let to = Self::target_time(range, local, duration);
        let from = media.current_time;
        if from.is_finite() && (from - to).abs() <= self.epsilon_secs {
            return ScrubDecision::Hold { time: from };
        }
        ScrubDecision::Seek { from, to }
    }

    /// Scrub `target`'s media to the position of `position` within `plan`.
    ///
    /// Requests made before the resource is seek-ready are dropped; the next frame retries.
    pub fn scrub<T>(
        &self,
        target: &mut T,
        plan: &SegmentPlan,
        position: SegmentPosition,
    ) -> ScrubDecision
    where
        T: TargetHandle + ?Sized,
    {
        let media = target.media_state();
        let range = plan.resolve_range(position.index, media.known_duration());
        let decision = self.decide(media, range, position.local);
        match decision {
            ScrubDecision::Seek { to, .. } => target.set_media_time(to),
            ScrubDecision::NotReady => {
                tracing::debug!(segment = position.index, "scrub dropped: media not ready");
            }
            ScrubDecision::Hold { .. } => {}
        }
        decision
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/scrubber.rs"]
mod tests;
