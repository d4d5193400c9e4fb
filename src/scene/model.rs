use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::blend::crossfade::CrossfadeBlender;
use crate::carousel::geometry::{CarouselConfig, CarouselMeasurements};
use crate::carousel::translator::CarouselTranslator;
use crate::foundation::core::{TriggerGeometry, Viewport};
use crate::foundation::error::{StageError, StageResult};
use crate::media::scrubber::{DEFAULT_SEEK_EPSILON_SECS, MediaScrubber};
use crate::pin::schedule::FrameScheduler;
use crate::pin::section::{PinnedSection, ScrollDistance, SegmentTrack};
use crate::progress::segments::{ResourceRange, ResourceTime, SegmentPlan};
use crate::scroll::velocity::VelocityGateConfig;

/// A page worth of pinned sections, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    /// Initial viewport.
    pub viewport: Viewport,
    /// Fast-scroll gate tuning.
    #[serde(default)]
    pub velocity: VelocityGateConfig,
    /// Sections in page order.
    pub sections: Vec<SectionDef>,
}

/// One pinned section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Unique id, used in reports.
    pub id: String,
    /// Trigger placement in document space.
    pub trigger: TriggerGeometry,
    /// How far the section pins for.
    pub scroll_distance: ScrollDistanceDef,
    /// Segments scrubbing a media resource.
    #[serde(default)]
    pub segments: Option<SegmentsDef>,
    /// Crossfade across layers.
    #[serde(default)]
    pub crossfade: Option<CrossfadeDef>,
    /// Scroll-jacked horizontal track.
    #[serde(default)]
    pub carousel: Option<CarouselDef>,
    /// Media resource the segments scrub.
    #[serde(default)]
    pub media: Option<MediaDef>,
}

/// `{"fixed": 1200}` or `"carousel"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDistanceDef {
    /// Fixed pixels.
    Fixed(f64),
    /// Buffer plus carousel travel.
    Carousel,
}

/// Segment layout. Give either `count` (equal weights) or `weights`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentsDef {
    /// Number of equal segments.
    #[serde(default)]
    pub count: Option<usize>,
    /// Relative weights.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    /// Explicit media ranges, one per segment. Defaults to a proportional split.
    #[serde(default)]
    pub ranges: Option<Vec<RangeDef>>,
    /// Seek threshold in seconds.
    #[serde(default = "default_seek_epsilon")]
    pub seek_epsilon_secs: f64,
}

/// Media range in seconds. A missing `end` means "end of the resource".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeDef {
    /// Start in seconds.
    pub start: f64,
    /// End in seconds.
    #[serde(default)]
    pub end: Option<f64>,
}

/// Crossfade phase boundaries strictly inside `(0, 1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossfadeDef {
    /// Interior boundaries.
    pub boundaries: Vec<f64>,
}

/// Carousel made of equally sized items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselDef {
    /// Item width in pixels.
    pub item_width: f64,
    /// Number of items.
    pub item_count: usize,
    /// Gap between items.
    #[serde(default)]
    pub gap: f64,
    /// Container width; follows the viewport width when absent.
    #[serde(default)]
    pub viewport_width: Option<f64>,
    /// Buffer and slack tuning.
    #[serde(flatten)]
    pub config: CarouselConfig,
}

impl CarouselDef {
    /// Measurements under `viewport`.
    pub fn measurements(&self, viewport: Viewport) -> CarouselMeasurements {
        let viewport = Viewport {
            width: self.viewport_width.unwrap_or(viewport.width),
            height: viewport.height,
        };
        CarouselMeasurements::from_items(self.item_count, self.item_width, self.gap, viewport)
    }
}

/// Simulated media resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MediaDef {
    /// Duration reported once metadata loads.
    pub duration: f64,
    /// Time at which metadata becomes available.
    #[serde(default)]
    pub ready_at_ms: f64,
}

fn default_seek_epsilon() -> f64 {
    DEFAULT_SEEK_EPSILON_SECS
}

impl SceneDef {
    /// Parse and validate JSON.
    pub fn from_json_str(s: &str) -> StageResult<Self> {
        let def: Self = serde_json::from_str(s)?;
        def.validate()?;
        Ok(def)
    }

    /// Reject malformed scenes before anything runs.
    pub fn validate(&self) -> StageResult<()> {
        self.viewport.validate()?;
        self.velocity.validate()?;

        let mut seen = BTreeSet::new();
        for s in &self.sections {
            if s.id.trim().is_empty() {
                return Err(StageError::validation("section id must be non-empty"));
            }
            if !seen.insert(s.id.as_str()) {
                return Err(StageError::validation(format!("duplicate section id '{}'", s.id)));
            }
            s.validate().map_err(|e| match e {
                StageError::Validation(msg) => {
                    StageError::validation(format!("section '{}': {msg}", s.id))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl SectionDef {
    fn validate(&self) -> StageResult<()> {
        if !self.trigger.top.is_finite() {
            return Err(StageError::validation("trigger.top must be finite"));
        }
        if !(self.trigger.height.is_finite() && self.trigger.height >= 0.0) {
            return Err(StageError::validation("trigger.height must be finite and >= 0"));
        }
        match self.scroll_distance {
            ScrollDistanceDef::Fixed(d) if !(d.is_finite() && d >= 0.0) => {
                return Err(StageError::validation("fixed scroll distance must be finite and >= 0"));
            }
            ScrollDistanceDef::Carousel if self.carousel.is_none() => {
                return Err(StageError::validation("carousel scroll distance requires a carousel"));
            }
            _ => {}
        }
        if let Some(seg) = &self.segments {
            seg.plan()?;
            MediaScrubber::new(seg.seek_epsilon_secs)?;
        }
        if let Some(cf) = &self.crossfade {
            CrossfadeBlender::new(&cf.boundaries)?;
        }
        if let Some(c) = &self.carousel {
            if !(c.item_width.is_finite() && c.item_width >= 0.0) {
                return Err(StageError::validation("carousel.item_width must be finite and >= 0"));
            }
            if !(c.gap.is_finite() && c.gap >= 0.0) {
                return Err(StageError::validation("carousel.gap must be finite and >= 0"));
            }
            if c.viewport_width.is_some_and(|w| !(w.is_finite() && w >= 0.0)) {
                return Err(StageError::validation(
                    "carousel.viewport_width must be finite and >= 0",
                ));
            }
            c.config.validate()?;
        }
        if let Some(m) = &self.media {
            if !m.duration.is_finite() || m.duration <= 0.0 {
                return Err(StageError::validation("media.duration must be finite and > 0"));
            }
            if !m.ready_at_ms.is_finite() {
                return Err(StageError::validation("media.ready_at_ms must be finite"));
            }
        }
        Ok(())
    }

    /// Build the runtime section. Call [`SceneDef::validate`] first.
    pub fn build<S: FrameScheduler>(
        &self,
        scheduler: S,
        viewport: Viewport,
    ) -> StageResult<PinnedSection<S>> {
        let distance = match self.scroll_distance {
            ScrollDistanceDef::Fixed(d) => ScrollDistance::Fixed(d),
            ScrollDistanceDef::Carousel => ScrollDistance::Carousel,
        };
        let mut section = PinnedSection::new(self.id.clone(), scheduler, distance);

        if let Some(seg) = &self.segments {
            section = section.with_segments(SegmentTrack {
                plan: seg.plan()?,
                scrubber: MediaScrubber::new(seg.seek_epsilon_secs)?,
            });
        }
        if let Some(cf) = &self.crossfade {
            section = section.with_crossfade(CrossfadeBlender::new(&cf.boundaries)?);
        }
        if let Some(c) = &self.carousel {
            section = section.with_carousel(CarouselTranslator::new(
                c.config,
                &c.measurements(viewport),
            ));
        }
        Ok(section)
    }
}

impl SegmentsDef {
    fn plan(&self) -> StageResult<SegmentPlan> {
        let plan = match (&self.count, &self.weights) {
            (Some(_), Some(_)) => {
                return Err(StageError::validation(
                    "segments: give either count or weights, not both",
                ));
            }
            (Some(n), None) => SegmentPlan::equal(*n)?,
            (None, Some(w)) => SegmentPlan::weighted(w)?,
            (None, None) => {
                return Err(StageError::validation("segments: count or weights required"));
            }
        };
        let Some(ranges) = &self.ranges else {
            return Ok(plan);
        };
        let ranges: Vec<ResourceRange> = ranges
            .iter()
            .map(|r| ResourceRange {
                start: ResourceTime::Secs(r.start),
                end: r.end.map_or(ResourceTime::END, ResourceTime::Secs),
            })
            .collect();
        plan.with_resource_ranges(&ranges)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
