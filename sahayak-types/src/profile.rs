use serde::{Deserialize, Serialize};

/// A citizen/farmer profile as known at evaluation time.
///
/// Every field is optional: a profile is built incrementally (manual entry,
/// OCR extraction, or both) and may be arbitrarily partial. Absence means
/// "not known", never "zero" — default resolution per predicate kind happens
/// inside the evaluator, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Annual income in rupees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,

    /// Land holding from a 7/12 extract. Feeds application documents; no
    /// predicate reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_hectares: Option<f64>,

    /// Requested loan amount in rupees. Document generation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<u64>,
}

impl Profile {
    /// True when no attribute at all is known.
    pub fn is_empty(&self) -> bool {
        self == &Profile::default()
    }

    /// Overlay `other` onto `self`: attributes present in `other` win,
    /// attributes absent in `other` keep the existing value. Used to combine
    /// OCR-extracted fields with manually entered ones.
    pub fn merged_with(&self, other: &Profile) -> Profile {
        Profile {
            name: other.name.clone().or_else(|| self.name.clone()),
            gender: other.gender.or(self.gender),
            age: other.age.or(self.age),
            income: other.income.or(self.income),
            occupation: other.occupation.clone().or_else(|| self.occupation.clone()),
            caste: other.caste.clone().or_else(|| self.caste.clone()),
            special_status: other
                .special_status
                .clone()
                .or_else(|| self.special_status.clone()),
            residence: other.residence.clone().or_else(|| self.residence.clone()),
            land_hectares: other.land_hectares.or(self.land_hectares),
            loan_amount: other.loan_amount.or(self.loan_amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}
