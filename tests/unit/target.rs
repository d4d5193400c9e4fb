use super::*;

#[test]
fn seek_readiness_requires_finite_positive_duration() {
    let mut s = MediaState::unavailable();
    assert!(!s.is_seek_ready());

    s.metadata_loaded = true;
    assert!(!s.is_seek_ready());

    s.duration = f64::INFINITY;
    assert!(!s.is_seek_ready());

    s.duration = 5.0;
    assert!(s.is_seek_ready());
    assert_eq!(s.known_duration(), Some(5.0));
}

#[test]
fn recording_target_tracks_writes() {
    let mut t = RecordingTarget::new();
    t.set_opacity(2, 0.5);
    t.set_translate_x(-12.0);
    t.set_media_time(1.5);

    assert_eq!(t.opacities, vec![0.0, 0.0, 0.5]);
    assert_eq!(t.translate_x, Some(-12.0));
    assert_eq!(t.media_state().current_time, 1.5);
    assert_eq!(t.media.seeks, 1);
}
