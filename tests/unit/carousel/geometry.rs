use super::*;

fn three_cards(viewport_width: f64) -> CarouselMeasurements {
    CarouselMeasurements::from_items(
        3,
        400.0,
        24.0,
        Viewport {
            width: viewport_width,
            height: 1000.0,
        },
    )
}

#[test]
fn three_card_reference_geometry() {
    let m = three_cards(1000.0);
    assert_eq!(m.content_width, 1248.0);

    let g = CarouselGeometry::from_parts(m.content_width, m.viewport_width, 60.0, 300.0);
    assert_eq!(g.travel_distance, 308.0);
    assert_eq!(g.total_scroll_distance, 608.0);
    assert!((g.buffer_ratio() - 300.0 / 608.0).abs() < 1e-12);
    assert!(!g.is_degenerate());
}

#[test]
fn measure_uses_canonical_fractions() {
    let m = three_cards(1000.0);
    let g = CarouselGeometry::measure(&m, &CarouselConfig::default());
    assert!((g.slack - 60.0).abs() < 1e-9);
    assert!((g.buffer_distance - 300.0).abs() < 1e-9);
    assert!((g.travel_distance - 308.0).abs() < 1e-9);
}

#[test]
fn content_that_fits_has_no_travel() {
    let g = CarouselGeometry::from_parts(800.0, 1000.0, 60.0, 300.0);
    assert_eq!(g.travel_distance, 0.0);
    assert!(g.is_degenerate());
    assert_eq!(g.pinned_scroll_distance(), 0.0);
}

#[test]
fn bad_measurements_degrade_to_zero() {
    let g = CarouselGeometry::from_parts(f64::NAN, 1000.0, f64::INFINITY, -5.0);
    assert_eq!(g.travel_distance, 0.0);
    assert_eq!(g.buffer_distance, 0.0);
    assert_eq!(g.buffer_ratio(), 0.0);
}

#[test]
fn empty_track_has_zero_width() {
    let m = CarouselMeasurements::from_items(
        0,
        400.0,
        24.0,
        Viewport {
            width: 1000.0,
            height: 800.0,
        },
    );
    assert_eq!(m.content_width, 0.0);
}

#[test]
fn config_validation() {
    assert!(CarouselConfig::default().validate().is_ok());
    let bad = CarouselConfig {
        slack_item_fraction: -0.1,
        ..CarouselConfig::default()
    };
    assert!(bad.validate().is_err());
}
