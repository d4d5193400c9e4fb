use crate::foundation::core::clamp_unit;
use crate::foundation::math::{inverse_lerp, lerp};
use crate::progress::segments::SegmentPlan;

/// Which segment owns a global progress value, and how far into it we are.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SegmentPosition {
    /// Owning segment.
    pub index: usize,
    /// Fractional position inside the segment, in `[0, 1]`.
    pub local: f64,
}

/// Splits global progress into per-segment local progress.
pub struct ProgressDistributor;

impl ProgressDistributor {
    /// Map global `progress` onto `plan`.
    ///
    /// Progress at exactly `1.0` belongs to the last segment with `local == 1.0`.
    pub fn distribute(progress: f64, plan: &SegmentPlan) -> SegmentPosition {
        let p = clamp_unit(progress);
        let n = plan.len();
        if n == 0 {
            return SegmentPosition { index: 0, local: p };
        }

        if plan.is_equal_weight() {
            let scaled = p * n as f64;
            let index = (scaled.floor() as usize).min(n - 1);
            return SegmentPosition {
                index,
                local: clamp_unit(scaled - index as f64),
            };
        }

        let segments = plan.segments();
        let index = segments
            .partition_point(|s| s.boundary_end <= p)
            .min(n - 1);
        let seg = &segments[index];
        SegmentPosition {
            index,
            local: clamp_unit(inverse_lerp(seg.boundary_start, seg.boundary_end, p)),
        }
    }

    /// Global progress for a position produced by [`ProgressDistributor::distribute`].
    pub fn reconstruct(position: SegmentPosition, plan: &SegmentPlan) -> f64 {
        let n = plan.len();
        if n == 0 {
            return clamp_unit(position.local);
        }
        let index = position.index.min(n - 1);
        if plan.is_equal_weight() {
            return (index as f64 + position.local) / n as f64;
        }
        let seg = &plan.segments()[index];
        lerp(seg.boundary_start, seg.boundary_end, position.local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/distributor.rs"]
mod tests;
