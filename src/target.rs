//! Consumer-owned visual targets driven by the orchestrator.

/// Readable state of a time-based media resource (an audio/video element).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MediaState {
    /// Current playback position in seconds.
    pub current_time: f64,
    /// Total duration in seconds; NaN or infinite until metadata loads.
    pub duration: f64,
    /// Whether the resource reported its metadata.
    pub metadata_loaded: bool,
}

impl MediaState {
    /// State of a resource that has not reported anything yet.
    pub fn unavailable() -> Self {
        Self {
            current_time: 0.0,
            duration: f64::NAN,
            metadata_loaded: false,
        }
    }

    /// A resource is seek-ready once metadata is loaded and the duration is finite and positive.
    pub fn is_seek_ready(&self) -> bool {
        self.metadata_loaded && self.duration.is_finite() && self.duration > 0.0
    }

    /// Duration, if seek-ready.
    pub fn known_duration(&self) -> Option<f64> {
        self.is_seek_ready().then_some(self.duration)
    }
}

/// Setters the orchestrator invokes on a section's visual targets.
///
/// Implementations own the actual rendering surface. Nothing here starts or stops playback.
pub trait TargetHandle {
    /// Set the opacity of crossfade layer `layer` (`0..layer_count`).
    fn set_opacity(&mut self, layer: usize, opacity: f64);
    /// Set the horizontal translation of the carousel track, in pixels.
    fn set_translate_x(&mut self, px: f64);
    /// Seek the section's media resource to `secs`.
    fn set_media_time(&mut self, secs: f64);
    /// Current media state. Targets without media report [`MediaState::unavailable`].
    fn media_state(&self) -> MediaState {
        MediaState::unavailable()
    }
}

/// Media resource stand-in for headless runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SimulatedMedia {
    /// Reported state.
    pub state: MediaState,
    /// Number of seeks issued so far.
    pub seeks: u64,
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self {
            state: MediaState::unavailable(),
            seeks: 0,
        }
    }
}

impl SimulatedMedia {
    /// Mark metadata as loaded with the given duration.
    pub fn load_metadata(&mut self, duration: f64) {
        self.state.metadata_loaded = true;
        self.state.duration = duration;
    }
}

/// Target that records the last value written through each setter.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    /// Last opacity per layer.
    pub opacities: Vec<f64>,
    /// Last horizontal translation.
    pub translate_x: Option<f64>,
    /// Simulated media element.
    pub media: SimulatedMedia,
}

impl RecordingTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetHandle for RecordingTarget {
    fn set_opacity(&mut self, layer: usize, opacity: f64) {
        if self.opacities.len() <= layer {
            self.opacities.resize(layer + 1, 0.0);
        }
        self.opacities[layer] = opacity;
    }

    fn set_translate_x(&mut self, px: f64) {
        self.translate_x = Some(px);
    }

    fn set_media_time(&mut self, secs: f64) {
        self.media.state.current_time = secs;
        self.media.seeks += 1;
    }

    fn media_state(&self) -> MediaState {
        self.media.state
    }
}

#[cfg(test)]
#[path = "../tests/unit/target.rs"]
mod tests;
