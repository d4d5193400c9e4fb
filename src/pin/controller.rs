use crate::pin::region::ScrollRegion;
use crate::pin::schedule::{FrameHandle, FrameScheduler, FrameSlot};

/// Progress emitted for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PinFrame {
    /// Scroll position the frame was computed from.
    pub scroll_y: f64,
    /// Normalized progress in `[0, 1]`.
    pub progress: f64,
    /// Whether the section is currently held in place.
    pub pinned: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Detached,
    Active,
    TornDown,
}

/// Turns scroll input into per-frame progress for one pinned region.
///
/// Scroll events are coalesced: while a frame is pending further events only update the latest
/// scroll position, which is read when the frame fires.
#[derive(Debug)]
pub struct ViewportPinController<S: FrameScheduler> {
    scheduler: S,
    slot: FrameSlot,
    region: Option<ScrollRegion>,
    latest_scroll_y: f64,
    lifecycle: Lifecycle,
}

impl<S: FrameScheduler> ViewportPinController<S> {
    /// Controller that schedules frames through `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            slot: FrameSlot::default(),
            region: None,
            latest_scroll_y: 0.0,
            lifecycle: Lifecycle::Detached,
        }
    }

    /// Bind to `region` and schedule the initial frame.
    ///
    /// Without an attach (e.g. the trigger element never appeared) the controller stays inert.
    pub fn attach(&mut self, region: ScrollRegion, scroll_y: f64) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        tracing::debug!(
            start = region.pin_start(),
            end = region.pin_end(),
            pinnable = region.is_pinnable(),
            "pin region attached"
        );
        self.region = Some(region);
        self.lifecycle = Lifecycle::Active;
        self.set_scroll(scroll_y);
        self.slot.schedule(&mut self.scheduler);
    }

    /// Replace the region geometry wholesale (viewport resize).
    pub fn rebuild(&mut self, region: ScrollRegion) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        tracing::debug!(
            start = region.pin_start(),
            end = region.pin_end(),
            "pin region rebuilt"
        );
        self.region = Some(region);
        self.slot.schedule(&mut self.scheduler);
    }

    /// Record a scroll position. Returns `true` if this event scheduled a new frame.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if self.lifecycle != Lifecycle::Active {
            return false;
        }
        self.set_scroll(scroll_y);
        self.slot.schedule(&mut self.scheduler)
    }

    /// Request a frame without new scroll input, e.g. when a consumer became ready.
    ///
    /// Returns `true` if this call scheduled a new frame.
    pub fn invalidate(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Active {
            return false;
        }
        self.slot.schedule(&mut self.scheduler)
    }

    /// Handle a fired frame callback.
    ///
    /// Returns `None` for frames this controller did not request or after teardown.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<PinFrame> {
        if self.lifecycle != Lifecycle::Active || !self.slot.fire(handle) {
            return None;
        }
        let region = self.region?;
        let frame = PinFrame {
            scroll_y: self.latest_scroll_y,
            progress: region.progress_at(self.latest_scroll_y),
            pinned: region.is_pinned_at(self.latest_scroll_y),
        };
        tracing::trace!(progress = frame.progress, pinned = frame.pinned, "pin frame");
        Some(frame)
    }

    /// Cancel any pending frame and stop reacting to input. Idempotent.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.slot.cancel(&mut self.scheduler);
        self.region = None;
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("pin region torn down");
    }

    /// Current region, if attached.
    pub fn region(&self) -> Option<&ScrollRegion> {
        self.region.as_ref()
    }

    /// Whether a frame is waiting to fire.
    pub fn has_pending_frame(&self) -> bool {
        self.slot.is_pending()
    }

    /// Whether [`ViewportPinController::teardown`] ran.
    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    /// Scheduler used for frame requests.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler (to drive frames in headless runs).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn set_scroll(&mut self, scroll_y: f64) {
        if scroll_y.is_finite() {
            self.latest_scroll_y = scroll_y;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pin/controller.rs"]
mod tests;
