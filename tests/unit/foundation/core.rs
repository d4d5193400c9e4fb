use super::*;

#[test]
fn clamp_unit_handles_nan_and_overshoot() {
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(-0.25), 0.0);
    assert_eq!(clamp_unit(1.000_000_1), 1.0);
    assert_eq!(clamp_unit(0.5), 0.5);
}

#[test]
fn viewport_rejects_non_finite_dimensions() {
    assert!(Viewport::new(1280.0, 720.0).is_ok());
    assert!(Viewport::new(f64::INFINITY, 720.0).is_err());
    assert!(Viewport::new(1280.0, -1.0).is_err());
}

#[test]
fn trigger_from_viewport_rect_adds_scroll() {
    let rect = Rect::new(0.0, 120.0, 1000.0, 520.0);
    let t = TriggerGeometry::from_viewport_rect(rect, 800.0);
    assert_eq!(t.top, 920.0);
    assert_eq!(t.height, 400.0);
}
