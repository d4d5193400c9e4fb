use crate::blend::crossfade::CrossfadeBlender;
use crate::carousel::geometry::CarouselMeasurements;
use crate::carousel::translator::CarouselTranslator;
use crate::foundation::core::TriggerGeometry;
use crate::media::scrubber::{MediaScrubber, ScrubDecision};
use crate::pin::controller::ViewportPinController;
use crate::pin::region::ScrollRegion;
use crate::pin::schedule::{FrameHandle, FrameScheduler};
use crate::progress::distributor::{ProgressDistributor, SegmentPosition};
use crate::progress::segments::SegmentPlan;
use crate::target::TargetHandle;

/// Where a section's pinned scroll distance comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDistance {
    /// Fixed distance in pixels.
    Fixed(f64),
    /// Derived from the attached carousel's geometry (`0` without one).
    Carousel,
}

/// Segments plus the scrubber that plays them through a media resource.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTrack {
    /// Segment layout.
    pub plan: SegmentPlan,
    /// Seek policy.
    pub scrubber: MediaScrubber,
}

/// Everything one section produced for a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Scroll position used.
    pub scroll_y: f64,
    /// Progress shared by every consumer this frame.
    pub progress: f64,
    /// Whether the section is held in place.
    pub pinned: bool,
    /// Owning segment, when segments are attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentPosition>,
    /// Scrub outcome, when segments are attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<ScrubDecision>,
    /// Layer weights, when a crossfade is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    /// Horizontal offset, when a carousel is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
}

/// One pinned page section: a controller plus whichever consumers it drives.
#[derive(Debug)]
pub struct PinnedSection<S: FrameScheduler> {
    id: String,
    controller: ViewportPinController<S>,
    distance: ScrollDistance,
    trigger: Option<TriggerGeometry>,
    segments: Option<SegmentTrack>,
    crossfade: Option<CrossfadeBlender>,
    carousel: Option<CarouselTranslator>,
}

impl<S: FrameScheduler> PinnedSection<S> {
    /// Section with no consumers attached yet.
    pub fn new(id: impl Into<String>, scheduler: S, distance: ScrollDistance) -> Self {
        Self {
            id: id.into(),
            controller: ViewportPinController::new(scheduler),
            distance,
            trigger: None,
            segments: None,
            crossfade: None,
            carousel: None,
        }
    }

    /// Drive media through `track`.
    pub fn with_segments(mut self, track: SegmentTrack) -> Self {
        self.segments = Some(track);
        self
    }

    /// Drive layer opacities through `blender`.
    pub fn with_crossfade(mut self, blender: CrossfadeBlender) -> Self {
        self.crossfade = Some(blender);
        self
    }

    /// Drive horizontal translation through `translator`.
    pub fn with_carousel(mut self, translator: CarouselTranslator) -> Self {
        self.carousel = Some(translator);
        self
    }

    /// Section id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Underlying controller.
    pub fn controller(&self) -> &ViewportPinController<S> {
        &self.controller
    }

    /// Underlying controller, mutably.
    pub fn controller_mut(&mut self) -> &mut ViewportPinController<S> {
        &mut self.controller
    }

    /// Attached carousel.
    pub fn carousel(&self) -> Option<&CarouselTranslator> {
        self.carousel.as_ref()
    }

    /// Scroll distance implied by the current configuration and geometry.
    pub fn scroll_distance(&self) -> f64 {
        match self.distance {
            ScrollDistance::Fixed(d) => d,
            ScrollDistance::Carousel => self
                .carousel
                .as_ref()
                .map_or(0.0, |c| c.geometry().pinned_scroll_distance()),
        }
    }

    /// Bind to the trigger element and start tracking.
    pub fn attach(&mut self, trigger: TriggerGeometry, scroll_y: f64) {
        self.trigger = Some(trigger);
        let region = ScrollRegion::new(trigger, self.scroll_distance());
        tracing::debug!(section = %self.id, "section attached");
        self.controller.attach(region, scroll_y);
    }

    /// Forward a scroll event.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.controller.on_scroll(scroll_y)
    }

    /// The media resource became seek-ready; recompute at the current scroll position.
    pub fn on_media_ready(&mut self) -> bool {
        tracing::debug!(section = %self.id, "media ready, frame requested");
        self.controller.invalidate()
    }

    /// Rebuild geometry after a resize.
    ///
    /// `trigger` replaces the trigger placement when re-measured; `carousel` re-measures the
    /// carousel. The region is rebuilt from scratch either way.
    pub fn on_resize(
        &mut self,
        trigger: Option<TriggerGeometry>,
        carousel: Option<&CarouselMeasurements>,
    ) {
        if let Some(t) = trigger {
            self.trigger = Some(t);
        }
        if let (Some(translator), Some(m)) = (self.carousel.as_mut(), carousel) {
            translator.rebuild(m);
        }
        let Some(trigger) = self.trigger else {
            return;
        };
        let region = ScrollRegion::new(trigger, self.scroll_distance());
        self.controller.rebuild(region);
    }

    /// Handle a fired frame: compute progress once and apply it to every consumer.
    pub fn on_frame<T>(&mut self, handle: FrameHandle, target: &mut T) -> Option<FrameReport>
    where
        T: TargetHandle + ?Sized,
    {
        let frame = self.controller.on_frame(handle)?;
        let progress = frame.progress;

        let (segment, scrub) = match &self.segments {
            Some(track) => {
                let pos = ProgressDistributor::distribute(progress, &track.plan);
                let decision = track.scrubber.scrub(target, &track.plan, pos);
                (Some(pos), Some(decision))
            }
            None => (None, None),
        };

        let weights = self.crossfade.as_ref().map(|blender| {
            let state = blender.blend(progress);
            for (layer, w) in state.weights().iter().enumerate() {
                target.set_opacity(layer, *w);
            }
            state.weights().to_vec()
        });

        let offset_x = self.carousel.as_ref().map(|translator| {
            let x = translator.offset(progress);
            target.set_translate_x(x);
            x
        });

        Some(FrameReport {
            scroll_y: frame.scroll_y,
            progress,
            pinned: frame.pinned,
            segment,
            scrub,
            weights,
            offset_x,
        })
    }

    /// Release the section; no frame work runs afterwards.
    pub fn teardown(&mut self) {
        tracing::debug!(section = %self.id, "section torn down");
        self.controller.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pin/section.rs"]
mod tests;
