use sahayak_types::profile::Profile;
use sahayak_types::scheme::RuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age assumed when the profile does not carry one.
///
/// The reference behavior was inconsistent here (one call site defaulted to
/// 30, others let age-bounded rules fail outright). We default uniformly
/// inside the engine so every caller sees the same answer.
pub const DEFAULT_AGE: u32 = 30;

/// Income assumed when the profile does not carry one.
pub const DEFAULT_INCOME: u64 = 0;

/// The closed set of predicate kinds a rule-set may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Gender,
    MinAge,
    MaxAge,
    MaxIncome,
    Occupation,
    CasteCategory,
    SpecialStatus,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Gender => "gender",
            RuleKind::MinAge => "min_age",
            RuleKind::MaxAge => "max_age",
            RuleKind::MaxIncome => "max_income",
            RuleKind::Occupation => "occupation",
            RuleKind::CasteCategory => "caste_category",
            RuleKind::SpecialStatus => "special_status",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one predicate check, kept for explain-style output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCheck {
    pub kind: RuleKind,

    /// Human-readable requirement, e.g. "age >= 60".
    pub requirement: String,

    /// The resolved profile value the requirement was tested against.
    pub actual: String,

    pub passed: bool,
}

/// Evaluate every predicate present in `rules` against `profile`.
///
/// Conjunctive: the rule-set passes iff every returned check passed. An empty
/// rule-set yields no checks and therefore passes.
pub fn check_rules(rules: &RuleSet, profile: &Profile) -> Vec<RuleCheck> {
    let mut checks = Vec::with_capacity(rules.len());

    if let Some(required) = rules.gender {
        checks.push(RuleCheck {
            kind: RuleKind::Gender,
            requirement: format!("gender is {}", required.as_str()),
            actual: profile
                .gender
                .map(|g| g.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            passed: profile.gender == Some(required),
        });
    }

    let age = profile.age.unwrap_or(DEFAULT_AGE);
    if let Some(min) = rules.min_age {
        checks.push(RuleCheck {
            kind: RuleKind::MinAge,
            requirement: format!("age >= {min}"),
            actual: resolved_age_label(profile, age),
            passed: age >= min,
        });
    }
    if let Some(max) = rules.max_age {
        checks.push(RuleCheck {
            kind: RuleKind::MaxAge,
            requirement: format!("age <= {max}"),
            actual: resolved_age_label(profile, age),
            passed: age <= max,
        });
    }

    if let Some(cap) = rules.max_income {
        let income = profile.income.unwrap_or(DEFAULT_INCOME);
        checks.push(RuleCheck {
            kind: RuleKind::MaxIncome,
            requirement: format!("income <= {cap}"),
            actual: income.to_string(),
            passed: income <= cap,
        });
    }

    if let Some(set) = &rules.occupation {
        checks.push(set_membership_check(
            RuleKind::Occupation,
            set,
            profile.occupation.as_deref(),
        ));
    }
    if let Some(set) = &rules.caste_category {
        checks.push(set_membership_check(
            RuleKind::CasteCategory,
            set,
            profile.caste.as_deref(),
        ));
    }
    if let Some(set) = &rules.special_status {
        checks.push(set_membership_check(
            RuleKind::SpecialStatus,
            set,
            profile.special_status.as_deref(),
        ));
    }

    checks
}

/// Short-circuit form of [`check_rules`]: true iff every present predicate
/// passes. Same answer, no trace allocation on the hot path.
pub fn rules_pass(rules: &RuleSet, profile: &Profile) -> bool {
    if let Some(required) = rules.gender
        && profile.gender != Some(required)
    {
        return false;
    }

    let age = profile.age.unwrap_or(DEFAULT_AGE);
    if let Some(min) = rules.min_age
        && age < min
    {
        return false;
    }
    if let Some(max) = rules.max_age
        && age > max
    {
        return false;
    }

    if let Some(cap) = rules.max_income
        && profile.income.unwrap_or(DEFAULT_INCOME) > cap
    {
        return false;
    }

    if let Some(set) = &rules.occupation
        && !in_set(set, profile.occupation.as_deref())
    {
        return false;
    }
    if let Some(set) = &rules.caste_category
        && !in_set(set, profile.caste.as_deref())
    {
        return false;
    }
    if let Some(set) = &rules.special_status
        && !in_set(set, profile.special_status.as_deref())
    {
        return false;
    }

    true
}

/// Case-insensitive set membership. An absent value never matches: "unknown"
/// is not a member of any accepted set.
fn in_set(set: &[String], value: Option<&str>) -> bool {
    match value {
        Some(v) => set.iter().any(|s| s.eq_ignore_ascii_case(v)),
        None => false,
    }
}

fn set_membership_check(kind: RuleKind, set: &[String], value: Option<&str>) -> RuleCheck {
    RuleCheck {
        kind,
        requirement: format!("{} in [{}]", kind, set.join(", ")),
        actual: value.unwrap_or("unknown").to_string(),
        passed: in_set(set, value),
    }
}

fn resolved_age_label(profile: &Profile, age: u32) -> String {
    if profile.age.is_some() {
        age.to_string()
    } else {
        format!("{age} (assumed)")
    }
}
