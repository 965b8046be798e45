use serde::{Deserialize, Serialize};

/// One welfare scheme with its eligibility rule-set.
///
/// Scheme files are read tolerantly: unknown fields are ignored and optional
/// metadata may be absent. The catalog loader is the place that decides what
/// to do with a record that fails to parse at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    /// Stable key, e.g. "pm_kisan". Used by `sahayak explain` and reports.
    pub id: String,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// What the scheme pays out or provides.
    #[serde(default)]
    pub benefit: String,

    /// Reference link for the applicant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub rules: RuleSet,
}

/// Conjunctive predicate bag: a scheme matches iff every *present* field
/// passes. An omitted field imposes no constraint.
///
/// This is a closed set of predicate kinds, not a rules DSL. Adding a kind is
/// a schema change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<crate::profile::Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income: Option<u64>,

    /// Accepted occupations, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<String>>,

    /// Accepted caste categories, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste_category: Option<Vec<String>>,

    /// Accepted special statuses (Widow, Disabled, ...), case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_status: Option<Vec<String>>,
}

impl RuleSet {
    /// True when the rule-set imposes no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self == &RuleSet::default()
    }

    /// Number of predicate kinds present.
    pub fn len(&self) -> usize {
        [
            self.gender.is_some(),
            self.min_age.is_some(),
            self.max_age.is_some(),
            self.max_income.is_some(),
            self.occupation.is_some(),
            self.caste_category.is_some(),
            self.special_status.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
