use super::*;

#[test]
fn parses_tagged_events() {
    let trace = ScrollTrace::from_json_str(
        r#"{ "events": [
            { "kind": "scroll", "at_ms": 0, "y": 10 },
            { "kind": "frame", "at_ms": 16 },
            { "kind": "resize", "at_ms": 20, "width": 800, "height": 600 }
        ] }"#,
    )
    .unwrap();
    assert_eq!(trace.events.len(), 3);
    assert_eq!(trace.events[0], TraceEvent::Scroll { at_ms: 0.0, y: 10.0 });
    assert_eq!(trace.events[2].at_ms(), 20.0);
}

#[test]
fn rejects_time_travel() {
    let trace = ScrollTrace {
        events: vec![
            TraceEvent::Frame { at_ms: 10.0 },
            TraceEvent::Frame { at_ms: 5.0 },
        ],
    };
    assert!(trace.validate().is_err());
}

#[test]
fn linear_trace_reaches_target() {
    let trace = ScrollTrace::linear(0.0, 1000.0, 10, 16.0);
    assert!(trace.validate().is_ok());
    assert_eq!(trace.events.len(), 22);
    assert_eq!(
        trace.events[20],
        TraceEvent::Scroll {
            at_ms: 160.0,
            y: 1000.0
        }
    );
}
