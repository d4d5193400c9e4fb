use crate::foundation::core::Viewport;
use crate::foundation::error::StageResult;
use crate::pin::schedule::ManualScheduler;
use crate::pin::section::{FrameReport, PinnedSection};
use crate::scene::model::{SceneDef, SectionDef};
use crate::scene::trace::{ScrollTrace, TraceEvent};
use crate::scroll::velocity::ScrollVelocityGate;
use crate::target::RecordingTarget;

/// Output of one section for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Section id.
    pub id: String,
    /// What the section computed.
    #[serde(flatten)]
    pub report: FrameReport,
}

/// Everything produced at one frame boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameRecord {
    /// Frame timestamp.
    pub at_ms: f64,
    /// Document scroll position.
    pub scroll_y: f64,
    /// Fast-scroll gate as sampled this frame.
    pub fast_scroll: bool,
    /// Sections that had a frame pending.
    pub sections: Vec<SectionFrame>,
}

/// Result of replaying a trace.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ReplayReport {
    /// Frame records in time order.
    pub frames: Vec<FrameRecord>,
}

struct SectionRuntime {
    def: SectionDef,
    section: PinnedSection<ManualScheduler>,
    target: RecordingTarget,
}

impl SectionRuntime {
    fn sync_media(&mut self, now_ms: f64) {
        let Some(m) = self.def.media else {
            return;
        };
        if !self.target.media.state.metadata_loaded && now_ms >= m.ready_at_ms {
            tracing::debug!(section = %self.def.id, duration = m.duration, "media metadata loaded");
            self.target.media.load_metadata(m.duration);
            self.section.on_media_ready();
        }
    }
}

/// Headless driver that feeds a [`ScrollTrace`] through every section of a scene.
pub struct ReplaySession {
    viewport: Viewport,
    scroll_y: f64,
    gate: ScrollVelocityGate,
    sections: Vec<SectionRuntime>,
    torn_down: bool,
}

impl ReplaySession {
    /// Validate `scene`, build its sections and attach them at scroll position `0`.
    pub fn new(scene: &SceneDef) -> StageResult<Self> {
        scene.validate()?;
        let mut sections = Vec::with_capacity(scene.sections.len());
        for def in &scene.sections {
            let mut section = def.build(ManualScheduler::new(), scene.viewport)?;
            section.attach(def.trigger, 0.0);
            sections.push(SectionRuntime {
                def: def.clone(),
                section,
                target: RecordingTarget::new(),
            });
        }
        Ok(Self {
            viewport: scene.viewport,
            scroll_y: 0.0,
            gate: ScrollVelocityGate::new(scene.velocity)?,
            sections,
            torn_down: false,
        })
    }

    /// Replay `trace` to completion, then tear everything down.
    #[tracing::instrument(skip_all, fields(events = trace.events.len()))]
    pub fn run(mut self, trace: &ScrollTrace) -> StageResult<ReplayReport> {
        trace.validate()?;
        let mut report = ReplayReport::default();
        for event in &trace.events {
            if let Some(frame) = self.apply(*event) {
                report.frames.push(frame);
            }
        }
        self.teardown();
        tracing::debug!(frames = report.frames.len(), "replay finished");
        Ok(report)
    }

    /// Apply one event. Frame events return the record for that frame.
    pub fn apply(&mut self, event: TraceEvent) -> Option<FrameRecord> {
        if self.torn_down {
            return None;
        }
        match event {
            TraceEvent::Scroll { at_ms, y } => {
                self.scroll_y = y;
                self.gate.record(y, at_ms);
                for rt in &mut self.sections {
                    rt.section.on_scroll(y);
                }
                None
            }
            TraceEvent::Resize {
                at_ms: _,
                width,
                height,
            } => {
                let viewport = Viewport { width, height };
                self.viewport = viewport;
                for rt in &mut self.sections {
                    let measurements = rt.def.carousel.as_ref().map(|c| c.measurements(viewport));
                    rt.section.on_resize(None, measurements.as_ref());
                }
                None
            }
            TraceEvent::Frame { at_ms } => Some(self.frame(at_ms)),
        }
    }

    fn frame(&mut self, at_ms: f64) -> FrameRecord {
        let mut sections = Vec::new();
        for rt in &mut self.sections {
            rt.sync_media(at_ms);
            let handles = rt.section.controller_mut().scheduler_mut().drain();
            for handle in handles {
                if let Some(report) = rt.section.on_frame(handle, &mut rt.target) {
                    sections.push(SectionFrame {
                        id: rt.def.id.clone(),
                        report,
                    });
                }
            }
        }
        FrameRecord {
            at_ms,
            scroll_y: self.scroll_y,
            fast_scroll: self.gate.is_fast(at_ms),
            sections,
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recorded target state of section `id`.
    pub fn target(&self, id: &str) -> Option<&RecordingTarget> {
        self.sections
            .iter()
            .find(|rt| rt.def.id == id)
            .map(|rt| &rt.target)
    }

    /// Tear down every section. Later events are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for rt in &mut self.sections {
            rt.section.teardown();
        }
        self.torn_down = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/replay.rs"]
mod tests;
