use super::*;
use crate::foundation::core::TriggerGeometry;
use crate::pin::schedule::ManualScheduler;

fn region(total: f64) -> ScrollRegion {
    ScrollRegion::new(
        TriggerGeometry {
            top: 1000.0,
            height: 600.0,
        },
        total,
    )
}

fn fire_all(c: &mut ViewportPinController<ManualScheduler>) -> Vec<PinFrame> {
    let handles = c.scheduler_mut().drain();
    handles.into_iter().filter_map(|h| c.on_frame(h)).collect()
}

#[test]
fn attach_emits_initial_frame() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 1100.0);
    let frames = fire_all(&mut c);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].progress, 0.25);
    assert!(frames[0].pinned);
}

#[test]
fn scroll_bursts_coalesce_to_latest_position() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 0.0);
    fire_all(&mut c);

    assert!(c.on_scroll(1000.0));
    assert!(!c.on_scroll(1100.0));
    assert!(!c.on_scroll(1200.0));
    assert_eq!(c.scheduler().queued(), 1);

    let frames = fire_all(&mut c);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].scroll_y, 1200.0);
    assert_eq!(frames[0].progress, 0.5);
}

#[test]
fn progress_clamps_outside_region() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 0.0);
    let before = fire_all(&mut c);
    assert_eq!(before[0].progress, 0.0);
    assert!(!before[0].pinned);

    c.on_scroll(5000.0);
    let after = fire_all(&mut c);
    assert_eq!(after[0].progress, 1.0);
    assert!(!after[0].pinned);
}

#[test]
fn degenerate_region_reports_zero_and_never_pins() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(0.0), 1000.0);
    c.on_scroll(1200.0);
    let frames = fire_all(&mut c);
    assert_eq!(frames[0].progress, 0.0);
    assert!(!frames[0].pinned);
}

#[test]
fn detached_controller_is_inert() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    assert!(!c.on_scroll(100.0));
    assert_eq!(c.scheduler().queued(), 0);
    assert!(c.on_frame(FrameHandle(1)).is_none());
}

#[test]
fn teardown_cancels_pending_frame_and_ignores_input() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 0.0);
    let pending = c.scheduler_mut().drain();
    assert_eq!(pending.len(), 1);

    c.on_frame(pending[0]);
    c.on_scroll(1200.0);
    assert!(c.has_pending_frame());

    c.teardown();
    assert!(c.is_torn_down());
    assert!(!c.has_pending_frame());
    assert_eq!(c.scheduler().queued(), 0);

    assert!(!c.on_scroll(1300.0));
    c.attach(region(400.0), 1300.0);
    assert_eq!(c.scheduler().queued(), 0);
    assert!(c.region().is_none());
}

#[test]
fn frame_fired_after_teardown_does_nothing() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 1200.0);
    let handle = c.scheduler_mut().drain()[0];
    c.teardown();
    assert!(c.on_frame(handle).is_none());
}

#[test]
fn rebuild_keeps_progress_semantics() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    c.attach(region(400.0), 1200.0);
    assert_eq!(fire_all(&mut c)[0].progress, 0.5);

    c.rebuild(region(800.0));
    let frames = fire_all(&mut c);
    assert_eq!(frames[0].progress, 0.25);
}

#[test]
fn invalidate_recomputes_at_last_scroll_position() {
    let mut c = ViewportPinController::new(ManualScheduler::new());
    assert!(!c.invalidate());

    c.attach(region(400.0), 1300.0);
    assert!(!c.invalidate());
    fire_all(&mut c);

    assert!(c.invalidate());
    assert!(!c.invalidate());
    let frames = fire_all(&mut c);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].scroll_y, 1300.0);
    assert_eq!(frames[0].progress, 0.75);

    c.teardown();
    assert!(!c.invalidate());
    assert_eq!(c.scheduler().queued(), 0);
}
