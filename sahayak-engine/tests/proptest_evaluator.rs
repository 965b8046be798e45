//! Property-based tests for the eligibility evaluator.
//!
//! These tests verify that:
//! - The result is always a sub-sequence of the catalog, in catalog order
//! - Evaluation is idempotent and mutates nothing
//! - Membership agrees with the conjunctive per-predicate oracle

use proptest::prelude::*;
use sahayak_engine::{check_rules, evaluate, evaluate_detailed};
use sahayak_types::profile::{Gender, Profile};
use sahayak_types::scheme::{RuleSet, SchemeRecord};

const VOCAB: &[&str] = &["Farmer", "Tailor", "Student", "Widow", "SC", "ST", "Disabled"];

fn arb_gender() -> impl Strategy<Value = Option<Gender>> {
    prop_oneof![
        Just(None),
        Just(Some(Gender::Female)),
        Just(Some(Gender::Male)),
    ]
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB).prop_map(str::to_string)
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        arb_gender(),
        prop::option::of(0u32..=120),
        prop::option::of(0u64..=5_000_000),
        prop::option::of(arb_word()),
        prop::option::of(arb_word()),
        prop::option::of(arb_word()),
    )
        .prop_map(
            |(gender, age, income, occupation, caste, special_status)| Profile {
                gender,
                age,
                income,
                occupation,
                caste,
                special_status,
                ..Profile::default()
            },
        )
}

fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    (
        arb_gender(),
        prop::option::of(0u32..=100),
        prop::option::of(0u32..=100),
        prop::option::of(0u64..=3_000_000),
        prop::option::of(prop::collection::vec(arb_word(), 1..3)),
        prop::option::of(prop::collection::vec(arb_word(), 1..3)),
        prop::option::of(prop::collection::vec(arb_word(), 1..3)),
    )
        .prop_map(
            |(gender, min_age, max_age, max_income, occupation, caste_category, special_status)| {
                RuleSet {
                    gender,
                    min_age,
                    max_age,
                    max_income,
                    occupation,
                    caste_category,
                    special_status,
                }
            },
        )
}

fn arb_catalog() -> impl Strategy<Value = Vec<SchemeRecord>> {
    prop::collection::vec(arb_rule_set(), 0..8).prop_map(|rule_sets| {
        rule_sets
            .into_iter()
            .enumerate()
            .map(|(i, rules)| SchemeRecord {
                id: format!("scheme_{i}"),
                name: format!("Scheme {i}"),
                category: String::new(),
                benefit: String::new(),
                link: None,
                rules,
            })
            .collect()
    })
}

proptest! {
    /// The matched list is a sub-sequence of the catalog in catalog order.
    #[test]
    fn result_is_ordered_subsequence(profile in arb_profile(), catalog in arb_catalog()) {
        let matched = evaluate(&profile, &catalog);

        let mut cursor = 0usize;
        for m in &matched {
            let pos = catalog[cursor..]
                .iter()
                .position(|s| s.id == m.id)
                .expect("matched scheme must appear in catalog after previous match");
            cursor += pos + 1;
        }
    }

    /// Same inputs, same answer: no hidden state.
    #[test]
    fn evaluation_is_idempotent(profile in arb_profile(), catalog in arb_catalog()) {
        let first: Vec<String> = evaluate(&profile, &catalog).iter().map(|s| s.id.clone()).collect();
        let second: Vec<String> = evaluate(&profile, &catalog).iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    /// Membership agrees with the conjunctive oracle: a scheme is matched iff
    /// every one of its predicate checks passes.
    #[test]
    fn membership_matches_conjunctive_oracle(profile in arb_profile(), catalog in arb_catalog()) {
        let matched: Vec<&str> = evaluate(&profile, &catalog).iter().map(|s| s.id.as_str()).collect();

        for scheme in &catalog {
            let oracle = check_rules(&scheme.rules, &profile).iter().all(|c| c.passed);
            prop_assert_eq!(
                matched.contains(&scheme.id.as_str()),
                oracle,
                "scheme {} disagrees with oracle", scheme.id
            );
        }
    }

    /// The eligible slice of the detailed evaluation is exactly `evaluate`.
    #[test]
    fn detailed_agrees_with_evaluate(profile in arb_profile(), catalog in arb_catalog()) {
        let plain: Vec<&str> = evaluate(&profile, &catalog).iter().map(|s| s.id.as_str()).collect();
        let detailed: Vec<&str> = evaluate_detailed(&profile, &catalog)
            .iter()
            .filter(|e| e.eligible)
            .map(|e| e.scheme.id.as_str())
            .collect();
        prop_assert_eq!(plain, detailed);
    }

    /// A scheme with no rules matches every profile.
    #[test]
    fn unconstrained_scheme_always_matches(profile in arb_profile()) {
        let catalog = vec![SchemeRecord {
            id: "open".to_string(),
            name: "Open Scheme".to_string(),
            category: String::new(),
            benefit: String::new(),
            link: None,
            rules: RuleSet::default(),
        }];
        prop_assert_eq!(evaluate(&profile, &catalog).len(), 1);
    }
}
