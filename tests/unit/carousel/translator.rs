use super::*;
use crate::foundation::core::Viewport;

fn reference() -> CarouselTranslator {
    CarouselTranslator::from_geometry(
        CarouselConfig::default(),
        CarouselGeometry::from_parts(1248.0, 1000.0, 60.0, 300.0),
    )
}

#[test]
fn buffer_region_holds_still() {
    let t = reference();
    assert_eq!(t.offset(0.0), 0.0);
    assert_eq!(t.offset(0.25), 0.0);
    assert_eq!(t.offset(0.4934), 0.0);
    assert!(t.offset(0.5) < 0.0);
}

#[test]
fn end_of_progress_reaches_full_travel() {
    let t = reference();
    assert_eq!(t.offset(1.0), -308.0);
    assert_eq!(t.offset(1.5), -308.0);
}

#[test]
fn huge_buffer_still_reaches_full_travel_at_end() {
    let t = CarouselTranslator::from_geometry(
        CarouselConfig::default(),
        CarouselGeometry::from_parts(1001.0, 1000.0, 0.0, 1e17),
    );
    assert_eq!(t.geometry().travel_distance, 1.0);
    assert_eq!(t.offset(0.0), 0.0);
    assert_eq!(t.offset(1.0), -1.0);
}

#[test]
fn travel_is_linear_after_buffer() {
    let t = reference();
    let r = 300.0 / 608.0;
    let mid = r + (1.0 - r) / 2.0;
    assert!((t.offset(mid) + 154.0).abs() < 1e-9);
}

#[test]
fn degenerate_content_never_moves() {
    let t = CarouselTranslator::from_geometry(
        CarouselConfig::default(),
        CarouselGeometry::from_parts(800.0, 1000.0, 60.0, 300.0),
    );
    for i in 0..=100 {
        assert_eq!(t.offset(i as f64 / 100.0), 0.0);
    }
}

#[test]
fn zero_buffer_starts_moving_immediately() {
    let t = CarouselTranslator::from_geometry(
        CarouselConfig::default(),
        CarouselGeometry::from_parts(1500.0, 1000.0, 0.0, 0.0),
    );
    assert_eq!(t.offset(0.0), 0.0);
    assert!((t.offset(0.5) + 250.0).abs() < 1e-9);
    assert_eq!(t.offset(1.0), -500.0);
}

#[test]
fn resize_rebuilds_geometry_and_keeps_endpoints() {
    let cards = |width: f64| {
        CarouselMeasurements::from_items(
            4,
            400.0,
            24.0,
            Viewport {
                width,
                height: 900.0,
            },
        )
    };
    let mut t = CarouselTranslator::new(CarouselConfig::default(), &cards(1200.0));
    let before = *t.geometry();

    let after = *t.rebuild(&cards(800.0));
    assert!(after.travel_distance > before.travel_distance);
    assert!(after.total_scroll_distance > before.total_scroll_distance);
    assert_eq!(t.offset(0.0), 0.0);
    assert_eq!(t.offset(1.0), -after.travel_distance);

    // Widening until everything fits turns the translator into a no-op.
    t.rebuild(&cards(2000.0));
    assert!(t.geometry().is_degenerate());
    assert_eq!(t.offset(1.0), 0.0);
}
