//! End-to-end checks of the public evaluation API.
//!
//! Exercises the crate the way the bedside monitor does: per-vital checks,
//! JSON reading sets, and the aggregate verdict with a recording notifier.

use vitals_core::{
    all_acceptable, evaluate_all, is_vital_ok, ReadingSet, RecordingNotifier, SilentNotifier,
    Status, Vital, WarningDirection,
};

fn parse(json: &str) -> ReadingSet {
    serde_json::from_str(json).expect("reading set should parse")
}

// ---------------------------------------------------------------------------
// Test: per-vital safe ranges
// ---------------------------------------------------------------------------

#[test]
fn temperature_range_is_95_to_102() {
    assert!(is_vital_ok("temperature", 98.6, None).unwrap());
    assert!(is_vital_ok("temperature", 95.0, None).unwrap());
    assert!(is_vital_ok("temperature", 102.0, None).unwrap());
    assert!(!is_vital_ok("temperature", 103.0, None).unwrap());
    assert!(!is_vital_ok("temperature", 94.0, None).unwrap());
}

#[test]
fn pulse_range_is_60_to_100() {
    assert!(is_vital_ok("pulse", 70.0, None).unwrap());
    assert!(is_vital_ok("pulse", 60.0, None).unwrap());
    assert!(is_vital_ok("pulse", 100.0, None).unwrap());
    assert!(!is_vital_ok("pulse", 59.0, None).unwrap());
    assert!(!is_vital_ok("pulse", 101.0, None).unwrap());
}

#[test]
fn spo2_has_floor_of_90_and_no_ceiling() {
    assert!(is_vital_ok("spo2", 95.0, None).unwrap());
    assert!(is_vital_ok("spo2", 90.0, None).unwrap());
    assert!(is_vital_ok("spo2", 99.0, None).unwrap());
    assert!(!is_vital_ok("spo2", 89.0, None).unwrap());
}

// ---------------------------------------------------------------------------
// Test: aggregate verdict from JSON input
// ---------------------------------------------------------------------------

#[test]
fn normal_reading_set_passes() {
    let readings = parse(r#"{"temperature": 98.1, "pulse": 70, "spo2": 95}"#);
    let mut rec = RecordingNotifier::new();
    assert!(all_acceptable(readings.iter(), &mut rec).unwrap());
    assert!(rec.received.is_empty());
}

#[test]
fn any_out_of_range_vital_fails() {
    let cases = [
        r#"{"temperature": 103, "pulse": 70, "spo2": 95}"#,
        r#"{"temperature": 94, "pulse": 70, "spo2": 95}"#,
        r#"{"temperature": 98.6, "pulse": 101, "spo2": 95}"#,
        r#"{"temperature": 98.6, "pulse": 59, "spo2": 95}"#,
        r#"{"temperature": 98.6, "pulse": 70, "spo2": 89}"#,
        r#"{"temperature": 103, "pulse": 101, "spo2": 89}"#,
    ];
    for json in cases {
        let readings = parse(json);
        assert!(
            !all_acceptable(readings.iter(), &mut SilentNotifier).unwrap(),
            "expected failure for {json}"
        );
    }
}

#[test]
fn celsius_reading_in_json_is_normalized() {
    let readings = parse(r#"{"temperature": {"value": 35, "unit": "C"}, "pulse": 72}"#);
    let report = evaluate_all(readings.iter(), &mut SilentNotifier).unwrap();
    assert_eq!(report.outcomes[0].vital, Vital::Temperature);
    assert_eq!(report.outcomes[0].status, Status::Ok);
    assert_eq!(report.outcomes[0].display_value, "35°C");
}

#[test]
fn all_critical_vitals_notify_after_verdict_is_known() {
    let readings = parse(r#"{"temperature": 103, "pulse": 101, "spo2": 89}"#);
    let mut rec = RecordingNotifier::new();
    assert!(!all_acceptable(readings.iter(), &mut rec).unwrap());

    let messages: Vec<&str> = rec.criticals().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Temperature critical!",
            "Pulse Rate is out of range!",
            "Oxygen Saturation out of range!",
        ]
    );
}

#[test]
fn warnings_and_criticals_are_both_reported() {
    let readings = parse(r#"{"temperature": 96, "pulse": 130, "spo2": 91}"#);
    let mut rec = RecordingNotifier::new();
    let report = evaluate_all(readings.iter(), &mut rec).unwrap();

    assert!(!report.all_acceptable());
    assert_eq!(report.outcomes[0].status, Status::Warning(WarningDirection::Low));
    assert_eq!(report.outcomes[1].status, Status::Critical);
    assert_eq!(report.outcomes[2].status, Status::Warning(WarningDirection::Low));
    assert_eq!(rec.warnings().count(), 2);
    assert_eq!(rec.criticals().count(), 1);
}

#[test]
fn repeated_evaluation_gives_identical_statuses() {
    let readings = parse(r#"{"temperature": 101, "pulse": 61, "spo2": 99}"#);
    let first = evaluate_all(readings.iter(), &mut SilentNotifier).unwrap();
    let second = evaluate_all(readings.iter(), &mut SilentNotifier).unwrap();
    assert_eq!(first, second);
}
