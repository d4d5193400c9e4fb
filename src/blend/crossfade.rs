use smallvec::SmallVec;

use crate::foundation::core::clamp_unit;
use crate::foundation::error::{StageError, StageResult};
use crate::foundation::math::inverse_lerp;

type Weights = SmallVec<[f64; 4]>;

/// Per-layer blend weights for one frame. Weights sum to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct BlendState {
    weights: Weights,
}

impl BlendState {
    /// Weights in layer order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of `layer`, `0` when out of range.
    pub fn weight(&self, layer: usize) -> f64 {
        self.weights.get(layer).copied().unwrap_or(0.0)
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Dissolves between `k + 1` ordered layers across `k` phases.
///
/// Boundaries are `[0 = b0 < b1 < ... < bk = 1]`. Inside phase `i` only layers `i` and `i + 1`
/// are visible and their weights are complementary.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossfadeBlender {
    boundaries: SmallVec<[f64; 4]>,
}

impl CrossfadeBlender {
    /// Build from the interior boundaries `b1..b(k-1)`, strictly increasing inside `(0, 1)`.
    ///
    /// An empty slice is a plain two-layer fade.
    pub fn new(interior: &[f64]) -> StageResult<Self> {
        let mut boundaries = SmallVec::with_capacity(interior.len() + 2);
        boundaries.push(0.0);
        for &b in interior {
            if !(b > 0.0 && b < 1.0) {
                return Err(StageError::validation(format!(
                    "crossfade boundary {b} must be inside (0, 1)"
                )));
            }
            if boundaries.last().is_some_and(|prev| b <= *prev) {
                return Err(StageError::validation(
                    "crossfade boundaries must be strictly increasing",
                ));
            }
            boundaries.push(b);
        }
        boundaries.push(1.0);
        Ok(Self { boundaries })
    }

    /// Three layers with a single handoff at `boundary`.
    pub fn two_phase(boundary: f64) -> StageResult<Self> {
        Self::new(&[boundary])
    }

    /// Number of layers driven.
    pub fn layer_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Active phase and the position within it.
    pub fn phase_at(&self, progress: f64) -> (usize, f64) {
        let p = clamp_unit(progress);
        let phases = self.boundaries.len() - 1;
        let phase = self
            .boundaries
            .partition_point(|b| *b <= p)
            .saturating_sub(1)
            .min(phases - 1);
        let local = inverse_lerp(self.boundaries[phase], self.boundaries[phase + 1], p);
        (phase, clamp_unit(local))
    }

    /// Blend weights at `progress`.
    pub fn blend(&self, progress: f64) -> BlendState {
        let (phase, t) = self.phase_at(progress);
        let mut weights: Weights = SmallVec::from_elem(0.0, self.layer_count());
        weights[phase] = 1.0 - t;
        weights[phase + 1] = t;
        BlendState { weights }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/crossfade.rs"]
mod tests;
