use super::*;

#[test]
fn empty_body_marks_always_base() {
    let f = ProductionRule::parse("f::20", 90.0).unwrap();
    assert_eq!(f.name, 'f');
    assert!(f.always_base);
    assert!(f.body.is_empty());
    assert_eq!(f.base_distance, 20.0);
    assert_eq!(f.resolve(5), &[Command::Move(20.0)]);
    assert_eq!(f.resolve(0), &[Command::Move(20.0)]);
}

#[test]
fn body_resolves_until_depth_zero() {
    let l = ProductionRule::parse("l:+rf-:0", 90.0).unwrap();
    assert!(!l.always_base);
    assert_eq!(
        l.resolve(1),
        &[
            Command::Turn(90.0),
            Command::Expand('r'),
            Command::Expand('f'),
            Command::Turn(-90.0),
        ]
    );
    assert_eq!(l.resolve(0), &[Command::Move(0.0)]);
}

#[test]
fn malformed_encodings_are_config_errors() {
    for bad in ["f:20", "f::20:1", "ff::20", ":x:20", "+::20", "f::twenty", "f::2.5"] {
        let err = ProductionRule::parse(bad, 90.0).unwrap_err();
        assert!(err.is_config(), "{bad} should be rejected, got {err}");
    }
}

#[test]
fn negative_base_distance_parses() {
    let b = ProductionRule::parse("b::-5", 90.0).unwrap();
    assert_eq!(b.base_distance, -5.0);
}

#[test]
fn duplicate_names_are_rejected() {
    let err = RuleSet::parse(&["f::20", "f:ff:10"], 90.0).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn reference_validation_reports_missing_rules() {
    let ok = RuleSet::parse(&["f::20", "l:+f-:0"], 90.0).unwrap();
    assert_eq!(ok.len(), 2);
    ok.validate_references().unwrap();

    let missing = RuleSet::parse(&["l:+q-:0"], 90.0).unwrap();
    let err = missing.validate_references().unwrap_err();
    assert!(err.to_string().contains("undefined rule 'q'"));
}
