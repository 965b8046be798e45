//! Scheme explanation for the `sahayak explain` command.
//!
//! Renders one catalog record as prose: what the scheme is, what it pays,
//! and the eligibility rules a profile has to clear.

use sahayak_types::scheme::{RuleSet, SchemeRecord};

/// Human-readable requirement lines for a rule-set, in the fixed kind order.
pub fn rule_lines(rules: &RuleSet) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(gender) = rules.gender {
        lines.push(format!("Gender must be {}", gender.as_str()));
    }
    match (rules.min_age, rules.max_age) {
        (Some(min), Some(max)) => lines.push(format!("Age between {min} and {max}")),
        (Some(min), None) => lines.push(format!("Age {min} or above")),
        (None, Some(max)) => lines.push(format!("Age {max} or below")),
        (None, None) => {}
    }
    if let Some(cap) = rules.max_income {
        lines.push(format!("Annual income at most Rs. {cap}"));
    }
    if let Some(set) = &rules.occupation {
        lines.push(format!("Occupation one of: {}", set.join(", ")));
    }
    if let Some(set) = &rules.caste_category {
        lines.push(format!("Caste category one of: {}", set.join(", ")));
    }
    if let Some(set) = &rules.special_status {
        lines.push(format!("Special status one of: {}", set.join(", ")));
    }

    if lines.is_empty() {
        lines.push("No eligibility conditions; open to all profiles".to_string());
    }
    lines
}

/// Print the full explanation for one scheme.
pub fn print_explanation(scheme: &SchemeRecord) {
    println!("================================================================================");
    println!("SCHEME: {}", scheme.name);
    println!("================================================================================");
    println!();
    println!("Id:        {}", scheme.id);
    if !scheme.category.is_empty() {
        println!("Category:  {}", scheme.category);
    }
    if let Some(link) = &scheme.link {
        println!("Apply at:  {}", link);
    }
    println!();

    if !scheme.benefit.is_empty() {
        println!("BENEFIT");
        println!("--------------------------------------------------------------------------------");
        println!("{}", scheme.benefit);
        println!();
    }

    println!("ELIGIBILITY RULES");
    println!("--------------------------------------------------------------------------------");
    println!("All of the following must hold (unknown attributes fail set-valued rules, age");
    println!("is assumed {} and income 0 when absent):", sahayak_engine::DEFAULT_AGE);
    println!();
    for line in rule_lines(&scheme.rules) {
        println!("  - {}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_types::profile::Gender;

    #[test]
    fn rule_lines_cover_every_present_kind() {
        let rules = RuleSet {
            gender: Some(Gender::Female),
            min_age: Some(21),
            max_age: Some(65),
            max_income: Some(250_000),
            ..RuleSet::default()
        };
        let lines = rule_lines(&rules);
        assert_eq!(
            lines,
            [
                "Gender must be Female",
                "Age between 21 and 65",
                "Annual income at most Rs. 250000",
            ]
        );
    }

    #[test]
    fn unconstrained_rules_say_so() {
        let lines = rule_lines(&RuleSet::default());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("open to all"));
    }

    #[test]
    fn one_sided_age_bounds_render() {
        let pension = RuleSet {
            min_age: Some(60),
            ..RuleSet::default()
        };
        assert_eq!(rule_lines(&pension)[0], "Age 60 or above");

        let scholarship = RuleSet {
            max_age: Some(35),
            ..RuleSet::default()
        };
        assert_eq!(rule_lines(&scholarship)[0], "Age 35 or below");
    }
}
