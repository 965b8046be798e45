//! Eligibility engine: turn a profile + scheme catalog into the ordered list
//! of matched schemes.
//!
//! This crate owns *which* schemes match and why. It does not own where the
//! catalog comes from (that's `sahayak-catalog`) or how results are rendered
//! (that's `sahayak-render`). Both entry points are pure and total: absent or
//! odd profile values resolve through defaults and sentinels, never through
//! errors.

mod evaluator;
mod rules;

pub use evaluator::{SchemeEvaluation, evaluate, evaluate_detailed, match_report};
pub use rules::{DEFAULT_AGE, DEFAULT_INCOME, RuleCheck, RuleKind, check_rules, rules_pass};
