use crate::foundation::error::{StageError, StageResult};
use crate::foundation::math::lerp;

/// A point in a time-based resource, either absolute or relative to its (possibly unknown)
/// duration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTime {
    /// Absolute seconds.
    Secs(f64),
    /// Fraction of the total duration, resolved once the duration is known.
    Fraction(f64),
}

impl ResourceTime {
    /// The end of the resource.
    pub const END: Self = Self::Fraction(1.0);

    /// Resolve to seconds. Fractions need a known duration.
    pub fn resolve(self, duration: Option<f64>) -> Option<f64> {
        match self {
            Self::Secs(s) => Some(s),
            Self::Fraction(f) => duration.map(|d| d * f),
        }
    }

    fn validate(self) -> StageResult<()> {
        match self {
            Self::Secs(s) if !(s.is_finite() && s >= 0.0) => Err(StageError::validation(
                "resource time in seconds must be finite and >= 0",
            )),
            Self::Fraction(f) if !(0.0..=1.0).contains(&f) => Err(StageError::validation(
                "resource time fraction must be in [0, 1]",
            )),
            _ => Ok(()),
        }
    }
}

/// Sub-range of a time-based resource owned by one segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceRange {
    /// Range start.
    pub start: ResourceTime,
    /// Range end.
    pub end: ResourceTime,
}

impl ResourceRange {
    /// Range with both ends in absolute seconds.
    pub fn secs(start: f64, end: f64) -> Self {
        Self {
            start: ResourceTime::Secs(start),
            end: ResourceTime::Secs(end),
        }
    }

    /// Range from `start` seconds to the end of the resource.
    pub fn open_ended(start: f64) -> Self {
        Self {
            start: ResourceTime::Secs(start),
            end: ResourceTime::END,
        }
    }

    /// Resolve both ends. Returns `None` while a fractional end still needs the duration.
    pub fn resolve(&self, duration: Option<f64>) -> Option<TimeRange> {
        Some(TimeRange {
            start: self.start.resolve(duration)?,
            end: self.end.resolve(duration)?,
        })
    }
}

/// Resolved `[start, end]` interval in resource seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimeRange {
    /// Start in seconds.
    pub start: f64,
    /// End in seconds.
    pub end: f64,
}

impl TimeRange {
    /// Time at fractional position `t` inside the range.
    pub fn at(&self, t: f64) -> f64 {
        lerp(self.start, self.end, t)
    }
}

/// One discrete animation stop inside a pinned region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    /// Position in the plan.
    pub index: usize,
    /// Normalized weight; all weights sum to 1.
    pub weight: f64,
    /// Inclusive start as a fraction of total progress.
    pub boundary_start: f64,
    /// End as a fraction of total progress (exclusive except for the last segment).
    pub boundary_end: f64,
    /// Resource interval this segment scrubs through.
    pub resource_range: ResourceRange,
}

/// Ordered segments partitioning `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentPlan {
    segments: Vec<Segment>,
    equal_weight: bool,
}

impl SegmentPlan {
    /// `count` segments of weight `1/count`.
    pub fn equal(count: usize) -> StageResult<Self> {
        if count == 0 {
            return Err(StageError::validation("segment plan needs at least one segment"));
        }
        let n = count as f64;
        let segments = (0..count)
            .map(|i| {
                let boundary_start = i as f64 / n;
                let boundary_end = if i + 1 == count {
                    1.0
                } else {
                    (i + 1) as f64 / n
                };
                Segment {
                    index: i,
                    weight: 1.0 / n,
                    boundary_start,
                    boundary_end,
                    resource_range: proportional_range(boundary_start, boundary_end),
                }
            })
            .collect();
        Ok(Self {
            segments,
            equal_weight: true,
        })
    }

    /// Segments with relative `weights` (positive, finite). Weights are normalized.
    pub fn weighted(weights: &[f64]) -> StageResult<Self> {
        if weights.is_empty() {
            return Err(StageError::validation("segment plan needs at least one segment"));
        }
        if weights.iter().any(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(StageError::validation("segment weights must be finite and > 0"));
        }
        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(StageError::validation("segment weights overflow"));
        }

        let mut segments = Vec::with_capacity(weights.len());
        let mut acc = 0.0;
        let mut boundary_start = 0.0;
        for (i, w) in weights.iter().enumerate() {
            acc += w;
            // Last boundary is exactly 1.
            let boundary_end = if i + 1 == weights.len() {
                1.0
            } else {
                (acc / total).min(1.0)
            };
            segments.push(Segment {
                index: i,
                weight: w / total,
                boundary_start,
                boundary_end,
                resource_range: proportional_range(boundary_start, boundary_end),
            });
            boundary_start = boundary_end;
        }

        let first = weights[0];
        let equal_weight = weights.iter().all(|w| *w == first);
        Ok(Self {
            segments,
            equal_weight,
        })
    }

    /// Replace the default proportional resource ranges with explicit ones.
    pub fn with_resource_ranges(mut self, ranges: &[ResourceRange]) -> StageResult<Self> {
        if ranges.len() != self.segments.len() {
            return Err(StageError::validation(format!(
                "expected {} resource ranges, got {}",
                self.segments.len(),
                ranges.len()
            )));
        }
        for r in ranges {
            r.start.validate()?;
            r.end.validate()?;
            if let (ResourceTime::Secs(a), ResourceTime::Secs(b)) = (r.start, r.end)
                && b < a
            {
                return Err(StageError::validation("resource range end must be >= start"));
            }
        }
        for (seg, r) in self.segments.iter_mut().zip(ranges) {
            seg.resource_range = *r;
        }
        Ok(self)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; plans cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at `index`.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Whether every segment has the same weight.
    pub fn is_equal_weight(&self) -> bool {
        self.equal_weight
    }

    /// Resolve the resource interval of segment `index` against a known `duration`.
    pub fn resolve_range(&self, index: usize, duration: Option<f64>) -> Option<TimeRange> {
        self.segments.get(index)?.resource_range.resolve(duration)
    }
}

fn proportional_range(start: f64, end: f64) -> ResourceRange {
    ResourceRange {
        start: ResourceTime::Fraction(start),
        end: ResourceTime::Fraction(end),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/segments.rs"]
mod tests;
