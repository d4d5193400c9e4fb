use super::*;

fn sweep() -> impl Iterator<Item = f64> {
    (0..=1000).map(|i| i as f64 / 1000.0)
}

#[test]
fn equal_weight_indices_and_locals_stay_in_range() {
    for n in [1usize, 2, 3, 5, 8] {
        let plan = SegmentPlan::equal(n).unwrap();
        for p in sweep() {
            let pos = ProgressDistributor::distribute(p, &plan);
            assert!(pos.index < n);
            assert!((0.0..=1.0).contains(&pos.local));
            let scaled = pos.index as f64 + pos.local;
            assert!((scaled - p * n as f64).abs() < 1e-9, "n={n} p={p}");
        }
    }
}

#[test]
fn three_segments_at_midpoint() {
    let plan = SegmentPlan::equal(3).unwrap();
    let pos = ProgressDistributor::distribute(0.5, &plan);
    assert_eq!(pos.index, 1);
    assert!((pos.local - 0.5).abs() < 1e-12);
}

#[test]
fn end_of_range_belongs_to_last_segment() {
    let plan = SegmentPlan::equal(4).unwrap();
    assert_eq!(
        ProgressDistributor::distribute(1.0, &plan),
        SegmentPosition {
            index: 3,
            local: 1.0
        }
    );
    assert_eq!(
        ProgressDistributor::distribute(0.0, &plan),
        SegmentPosition {
            index: 0,
            local: 0.0
        }
    );
}

#[test]
fn out_of_range_progress_is_clamped() {
    let plan = SegmentPlan::equal(2).unwrap();
    assert_eq!(ProgressDistributor::distribute(-3.0, &plan).index, 0);
    assert_eq!(ProgressDistributor::distribute(7.0, &plan).index, 1);
    assert_eq!(ProgressDistributor::distribute(f64::NAN, &plan).local, 0.0);
}

#[test]
fn weighted_lookup_uses_cumulative_boundaries() {
    let plan = SegmentPlan::weighted(&[1.0, 2.0, 1.0]).unwrap();
    let pos = ProgressDistributor::distribute(0.5, &plan);
    assert_eq!(pos.index, 1);
    assert!((pos.local - 0.5).abs() < 1e-12);

    let pos = ProgressDistributor::distribute(0.25, &plan);
    assert_eq!(pos.index, 1);
    assert_eq!(pos.local, 0.0);

    let pos = ProgressDistributor::distribute(0.9, &plan);
    assert_eq!(pos.index, 2);
    assert!((pos.local - 0.6).abs() < 1e-12);
}

#[test]
fn mapping_is_invertible() {
    for plan in [
        SegmentPlan::equal(3).unwrap(),
        SegmentPlan::weighted(&[0.2, 0.5, 1.3, 0.7]).unwrap(),
    ] {
        for p in sweep() {
            let pos = ProgressDistributor::distribute(p, &plan);
            let back = ProgressDistributor::reconstruct(pos, &plan);
            assert!((back - p).abs() < 1e-9, "p={p} back={back}");
        }
    }
}
