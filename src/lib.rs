//! Scroll-progress animation orchestration.
//!
//! A pinned page section holds still while scrolling advances a normalized progress value. Each
//! animation frame that progress is computed once and pushed to the section's consumers:
//!
//! - [`ProgressDistributor`] splits it across ordered [`Segment`]s, and [`MediaScrubber`] seeks a
//!   media resource to the matching position
//! - [`CrossfadeBlender`] turns it into layer opacities
//! - [`CarouselTranslator`] turns it into a horizontal offset for scroll-jacked content
//!
//! [`ScrollVelocityGate`] runs beside all of this and lets expensive consumers skip frames while
//! the user scrolls fast. Visual side effects go through the injected [`TargetHandle`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod blend;
pub(crate) mod carousel;
pub(crate) mod media;
pub(crate) mod pin;
pub(crate) mod progress;
pub(crate) mod scene;
pub(crate) mod scroll;
pub(crate) mod session;
/// Visual target abstraction.
pub mod target;

pub use crate::foundation::core::{Rect, TriggerGeometry, Viewport, clamp_unit};
pub use crate::foundation::error::{StageError, StageResult};

pub use crate::blend::crossfade::{BlendState, CrossfadeBlender};
pub use crate::carousel::geometry::{
    CarouselConfig, CarouselGeometry, CarouselMeasurements, DEFAULT_BUFFER_VIEWPORT_FRACTION,
    DEFAULT_SLACK_ITEM_FRACTION,
};
pub use crate::carousel::translator::CarouselTranslator;
pub use crate::media::scrubber::{DEFAULT_SEEK_EPSILON_SECS, MediaScrubber, ScrubDecision};
pub use crate::pin::controller::{PinFrame, ViewportPinController};
pub use crate::pin::region::ScrollRegion;
pub use crate::pin::schedule::{FrameHandle, FrameScheduler, ManualScheduler};
pub use crate::pin::section::{FrameReport, PinnedSection, ScrollDistance, SegmentTrack};
pub use crate::progress::distributor::{ProgressDistributor, SegmentPosition};
pub use crate::progress::segments::{
    ResourceRange, ResourceTime, Segment, SegmentPlan, TimeRange,
};
pub use crate::scene::model::{
    CarouselDef, CrossfadeDef, MediaDef, RangeDef, SceneDef, ScrollDistanceDef, SectionDef,
    SegmentsDef,
};
pub use crate::scene::trace::{ScrollTrace, TraceEvent};
pub use crate::scroll::velocity::{
    DEFAULT_FAST_SCROLL_PX_PER_SEC, DEFAULT_STALE_AFTER_MS, ScrollVelocityGate,
    VelocityGateConfig,
};
pub use crate::session::replay::{FrameRecord, ReplayReport, ReplaySession, SectionFrame};
pub use crate::target::{MediaState, RecordingTarget, SimulatedMedia, TargetHandle};
