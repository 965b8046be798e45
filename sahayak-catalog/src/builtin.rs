use sahayak_types::profile::Gender;
use sahayak_types::scheme::{RuleSet, SchemeRecord};

/// The built-in scheme catalog, in its fixed declared order.
///
/// Order matters: evaluation output preserves it, so this list is the ranking
/// the presentation layer sees. Keep ids stable; reports and `explain` key on
/// them.
pub fn builtin_schemes() -> Vec<SchemeRecord> {
    vec![
        SchemeRecord {
            id: "ladki_bahin".to_string(),
            name: "Mukhyamantri Majhi Ladki Bahin Yojana".to_string(),
            category: "Women's Welfare".to_string(),
            benefit: "Rs. 1,500 per month direct benefit transfer for eligible women."
                .to_string(),
            link: Some("https://ladakibahin.maharashtra.gov.in".to_string()),
            rules: RuleSet {
                gender: Some(Gender::Female),
                min_age: Some(21),
                max_age: Some(65),
                max_income: Some(250_000),
                ..RuleSet::default()
            },
        },
        SchemeRecord {
            id: "pm_kisan".to_string(),
            name: "PM Kisan Samman Nidhi".to_string(),
            category: "Agriculture".to_string(),
            benefit: "Rs. 6,000 per year income support to landholding farmer families."
                .to_string(),
            link: Some("https://pmkisan.gov.in".to_string()),
            rules: RuleSet {
                occupation: Some(vec!["Farmer".to_string()]),
                max_income: Some(2_000_000),
                ..RuleSet::default()
            },
        },
        SchemeRecord {
            id: "namo_shetkari".to_string(),
            name: "Namo Shetkari Mahasanman Nidhi".to_string(),
            category: "Agriculture".to_string(),
            benefit: "Rs. 6,000 per year state top-up for PM-Kisan beneficiary farmers."
                .to_string(),
            link: Some("https://nsmny.mahait.org".to_string()),
            rules: RuleSet {
                occupation: Some(vec!["Farmer".to_string()]),
                max_income: Some(2_000_000),
                ..RuleSet::default()
            },
        },
        SchemeRecord {
            id: "sgny".to_string(),
            name: "Sanjay Gandhi Niradhar Yojana".to_string(),
            category: "Social Assistance".to_string(),
            benefit: "Rs. 1,500 per month pension for destitute persons.".to_string(),
            link: Some("https://sjsa.maharashtra.gov.in".to_string()),
            rules: RuleSet {
                special_status: Some(vec![
                    "Widow".to_string(),
                    "Divorced".to_string(),
                    "Orphan".to_string(),
                    "Disabled".to_string(),
                ]),
                max_income: Some(21_000),
                ..RuleSet::default()
            },
        },
        SchemeRecord {
            id: "ignoaps".to_string(),
            name: "Indira Gandhi National Old Age Pension Scheme".to_string(),
            category: "Pension".to_string(),
            benefit: "Monthly pension for senior citizens below the poverty line.".to_string(),
            link: Some("https://nsap.nic.in".to_string()),
            rules: RuleSet {
                min_age: Some(60),
                max_income: Some(100_000),
                ..RuleSet::default()
            },
        },
        SchemeRecord {
            id: "post_matric_sc_st".to_string(),
            name: "Post-Matric Scholarship for SC/ST Students".to_string(),
            category: "Education".to_string(),
            benefit: "Tuition and maintenance allowance for post-matriculation study."
                .to_string(),
            link: Some("https://scholarships.gov.in".to_string()),
            rules: RuleSet {
                caste_category: Some(vec!["SC".to_string(), "ST".to_string()]),
                max_age: Some(35),
                ..RuleSet::default()
            },
        },
    ]
}
