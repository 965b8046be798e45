// Safe unwrap usage: regex patterns are compile-time constants.
#![allow(clippy::unwrap_used)]
//! Field detectors for OCR text.
//!
//! Each detector is independent, total, and first-match-wins. Numeric text
//! that fails to convert counts as "no match" for that detector.

use regex::Regex;
use sahayak_types::profile::Gender;
use std::sync::OnceLock;

/// Compiled regex patterns for field detection.
struct Patterns {
    /// Two-digit number followed by an age keyword: "42 years", "42yrs".
    age: Regex,
    /// Income keyword, optional separator, digit group with optional
    /// comma thousands separators: "Rs. 1,80,000", "Income: 50000".
    /// The keyword is a plain occurrence, not a whole word: "rs" inside
    /// "years" counts, so "25 years 1,80,000" carries an income.
    income: Regex,
    /// Female-family terms, whole word.
    female: Regex,
    /// Male-family terms, whole word.
    male: Regex,
    /// Farm markers: "Hectare", whole-word "Ha", or a 7/12 extract mention.
    farm: Regex,
    /// Decimal area immediately before a hectare unit: "1.2 Hectare".
    land_area: Regex,
}

impl Patterns {
    fn get() -> &'static Self {
        static PATTERNS: OnceLock<Patterns> = OnceLock::new();
        PATTERNS.get_or_init(|| Patterns {
            age: Regex::new(r"(?i)\b(\d{2})\s*(?:years|yrs|age)\b").unwrap(),
            income: Regex::new(r"(?i)(?:income|rs\.?|salary)[\s:.=-]*([0-9][0-9,]*)").unwrap(),
            female: Regex::new(r"(?i)\b(?:female|woman|mrs|smt)\b").unwrap(),
            male: Regex::new(r"(?i)\b(?:male|man|mr)\b").unwrap(),
            farm: Regex::new(r"(?i)hectare|\bha\b|7/12").unwrap(),
            land_area: Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:hectares?|ha)\b").unwrap(),
        })
    }
}

/// First two-digit number followed by "years"/"yrs"/"age".
pub fn detect_age(text: &str) -> Option<u32> {
    let caps = Patterns::get().age.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// First income keyword followed by a digit group; thousands separators are
/// stripped before conversion. Conversion failure is treated as no match.
pub fn detect_income(text: &str) -> Option<u64> {
    let caps = Patterns::get().income.captures(text)?;
    let digits: String = caps
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Whole-word gender terms. The Female family is checked before the Male
/// family; the first family to hit wins.
pub fn detect_gender(text: &str) -> Option<Gender> {
    let patterns = Patterns::get();
    if patterns.female.is_match(text) {
        Some(Gender::Female)
    } else if patterns.male.is_match(text) {
        Some(Gender::Male)
    } else {
        None
    }
}

/// Farm markers imply occupation "Farmer"; the only occupation inferred from
/// text.
pub fn detect_occupation(text: &str) -> Option<String> {
    if Patterns::get().farm.is_match(text) {
        Some("Farmer".to_string())
    } else {
        None
    }
}

/// Land holding in hectares, when a number sits directly before the unit.
pub fn detect_land_area(text: &str) -> Option<f64> {
    let caps = Patterns::get().land_area.captures(text)?;
    caps.get(1)?.as_str().parse().ok()
}
