//! Wire-format tests: tolerant reads, stable field names, absent-vs-present.

use pretty_assertions::assert_eq;
use sahayak_types::profile::{Gender, Profile};
use sahayak_types::scheme::{RuleSet, SchemeRecord};

#[test]
fn scheme_record_parses_minimal_json() {
    let json = r#"{
        "id": "pm_kisan",
        "name": "PM Kisan Samman Nidhi"
    }"#;

    let s: SchemeRecord = serde_json::from_str(json).unwrap();
    assert_eq!(s.id, "pm_kisan");
    assert_eq!(s.name, "PM Kisan Samman Nidhi");
    assert_eq!(s.category, "");
    assert!(s.link.is_none());
    assert!(s.rules.is_unconstrained());
}

#[test]
fn scheme_record_ignores_unknown_fields() {
    let json = r#"{
        "id": "x",
        "name": "X",
        "ministry": "unknown to this version",
        "rules": { "max_income": 21000, "launch_year": 1980 }
    }"#;

    let s: SchemeRecord = serde_json::from_str(json).unwrap();
    assert_eq!(s.rules.max_income, Some(21_000));
}

#[test]
fn rule_set_round_trips_all_kinds() {
    let rules = RuleSet {
        gender: Some(Gender::Female),
        min_age: Some(21),
        max_age: Some(65),
        max_income: Some(250_000),
        occupation: Some(vec!["Farmer".to_string()]),
        caste_category: Some(vec!["SC".to_string(), "ST".to_string()]),
        special_status: Some(vec!["Widow".to_string()]),
    };

    let json = serde_json::to_string(&rules).unwrap();
    let back: RuleSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

#[test]
fn gender_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Gender::Female).unwrap(),
        r#""female""#
    );
    assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""male""#);
}

#[test]
fn absent_profile_fields_are_not_serialized() {
    let p = Profile {
        age: Some(42),
        ..Profile::default()
    };
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"age":42}"#);
}

#[test]
fn empty_json_object_is_empty_profile() {
    let p: Profile = serde_json::from_str("{}").unwrap();
    assert!(p.is_empty());
}

#[test]
fn profile_round_trips() {
    let p = Profile {
        name: Some("Asha Pawar".to_string()),
        gender: Some(Gender::Female),
        age: Some(25),
        income: Some(150_000),
        occupation: Some("Tailor".to_string()),
        residence: Some("Maharashtra".to_string()),
        land_hectares: Some(1.2),
        ..Profile::default()
    };

    let json = serde_json::to_string_pretty(&p).unwrap();
    let back: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
