use super::*;

// ============================================================================
// Labels
// ============================================================================

#[test]
fn named_severities_render_canonical_labels() {
    let labels: Vec<String> = Severity::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        ["FATAL", "CRITICAL", "ERROR", "WARNING", "NOTICE", "INFO", "DEBUG"]
    );
}

#[test]
fn raw_ordinals_match_named_constants() {
    for (ordinal, severity) in Severity::ALL.iter().enumerate() {
        assert_eq!(severity.as_raw(), i32::try_from(ordinal).unwrap());
        assert_eq!(Severity::from_raw(severity.as_raw()), *severity);
    }
}

#[test]
fn out_of_range_values_render_unknown() {
    for raw in [-1, 7, 8, 100, i32::MIN, i32::MAX] {
        let severity = Severity::from_raw(raw);
        assert_eq!(severity.label(), "unknown");
        assert_eq!(severity.to_string(), "unknown");
        assert!(!severity.is_known());
    }
}

#[test]
fn named_severities_are_known() {
    assert!(Severity::ALL.iter().all(|severity| severity.is_known()));
}

// ============================================================================
// Ordering and gating
// ============================================================================

#[test]
fn ordering_runs_from_most_to_least_severe() {
    for pair in Severity::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
}

#[test]
fn threshold_permits_equal_and_more_severe_entries() {
    let threshold = Severity::NOTICE;
    assert!(threshold.permits(Severity::FATAL));
    assert!(threshold.permits(Severity::WARNING));
    assert!(threshold.permits(Severity::NOTICE));
    assert!(!threshold.permits(Severity::INFO));
    assert!(!threshold.permits(Severity::DEBUG));
}

#[test]
fn unknown_thresholds_compare_numerically() {
    assert!(Severity::from_raw(100).permits(Severity::DEBUG));
    assert!(!Severity::from_raw(-1).permits(Severity::FATAL));
}

#[test]
fn default_is_debug() {
    assert_eq!(Severity::default(), Severity::DEBUG);
}

#[test]
fn integer_conversions_round_trip() {
    assert_eq!(Severity::from(3), Severity::WARNING);
    assert_eq!(i32::from(Severity::CRITICAL), 1);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_labels_case_insensitively() {
    assert_eq!("fatal".parse::<Severity>(), Ok(Severity::FATAL));
    assert_eq!("Critical".parse::<Severity>(), Ok(Severity::CRITICAL));
    assert_eq!("  error\n".parse::<Severity>(), Ok(Severity::ERROR));
    assert_eq!("NOTICE".parse::<Severity>(), Ok(Severity::NOTICE));
    assert_eq!("info".parse::<Severity>(), Ok(Severity::INFO));
    assert_eq!("Debug".parse::<Severity>(), Ok(Severity::DEBUG));
}

#[test]
fn parses_aliases() {
    assert_eq!("warn".parse::<Severity>(), Ok(Severity::WARNING));
    assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::WARNING));
    assert_eq!("crit".parse::<Severity>(), Ok(Severity::CRITICAL));
}

#[test]
fn parses_integer_ordinals() {
    assert_eq!("2".parse::<Severity>(), Ok(Severity::ERROR));
    assert_eq!("42".parse::<Severity>(), Ok(Severity::from_raw(42)));
    assert_eq!("-3".parse::<Severity>(), Ok(Severity::from_raw(-3)));
}

#[test]
fn rejects_empty_input() {
    let err = "   ".parse::<Severity>().expect_err("empty input");
    assert_eq!(err.kind(), ParseSeverityErrorKind::Empty);
    assert_eq!(err.to_string(), "severity string is empty");
}

#[test]
fn rejects_unknown_words() {
    let err = "verbose".parse::<Severity>().expect_err("unknown label");
    assert_eq!(err.kind(), ParseSeverityErrorKind::UnknownLabel);
    assert_eq!(err.input(), "verbose");
    assert_eq!(err.to_string(), "unrecognised severity 'verbose'");
}

#[test]
fn rejects_integers_outside_i32() {
    let err = "99999999999".parse::<Severity>().expect_err("overflow");
    assert_eq!(err.kind(), ParseSeverityErrorKind::UnknownLabel);
}

#[test]
fn display_output_parses_back() {
    for severity in Severity::ALL {
        assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn serde_uses_labels_for_named_severities() {
    let json = serde_json::to_string(&Severity::WARNING).expect("serialize");
    assert_eq!(json, "\"WARNING\"");
    let back: Severity = serde_json::from_str("\"info\"").expect("deserialize");
    assert_eq!(back, Severity::INFO);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_integers_for_unknown_severities() {
    let json = serde_json::to_string(&Severity::from_raw(9)).expect("serialize");
    assert_eq!(json, "9");
    let back: Severity = serde_json::from_str("9").expect("deserialize");
    assert_eq!(back, Severity::from_raw(9));
    let named: Severity = serde_json::from_str("1").expect("deserialize");
    assert_eq!(named, Severity::CRITICAL);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_garbage() {
    assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
    assert!(serde_json::from_str::<Severity>("true").is_err());
    assert!(serde_json::from_str::<Severity>("4294967296").is_err());
}
