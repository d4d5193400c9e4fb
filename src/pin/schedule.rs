/// Opaque id of a requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameHandle(pub u64);

/// Source of animation-frame callbacks (`requestAnimationFrame` and friends).
pub trait FrameScheduler {
    /// Queue one frame callback.
    fn request_frame(&mut self) -> FrameHandle;
    /// Drop a queued callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Coalescing state owned by one controller: at most one frame in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FrameSlot {
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    /// Request a frame unless one is already pending. Returns `true` if a request was made.
    pub(crate) fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Consume the pending frame if `handle` is it.
    pub(crate) fn fire(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Deterministic scheduler: frames fire when the caller drains them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queued: Vec<FrameHandle>,
}

impl ManualScheduler {
    /// Empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to fire.
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Take every queued frame in request order.
    pub fn drain(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queued)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queued.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queued.retain(|h| *h != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pin/schedule.rs"]
mod tests;
