//! Best-effort profile extraction from raw OCR text.
//!
//! The input is whatever a text-recognition service produced from a scanned
//! document: possibly empty, non-ASCII, or free of anything recognizable.
//! Extraction is a fixed set of independent detectors over the same input;
//! each is total and returns `Option`, the aggregate merges them. An
//! unrecognized field is simply absent from the result, never an error.

mod detectors;

pub use detectors::{
    detect_age, detect_gender, detect_income, detect_land_area, detect_occupation,
};

use sahayak_types::profile::Profile;
use tracing::debug;

/// Run every detector over `text` and merge the hits into a partial profile.
///
/// Detectors target disjoint attributes, so their order does not affect the
/// outcome. Caste, special status, residence and name are never inferred from
/// text; those arrive through other input channels.
pub fn extract(text: &str) -> Profile {
    let profile = Profile {
        age: detect_age(text),
        income: detect_income(text),
        gender: detect_gender(text),
        occupation: detect_occupation(text),
        land_hectares: detect_land_area(text),
        ..Profile::default()
    };

    debug!(
        age = ?profile.age,
        income = ?profile.income,
        gender = ?profile.gender,
        occupation = ?profile.occupation,
        "extracted profile from text"
    );
    profile
}
