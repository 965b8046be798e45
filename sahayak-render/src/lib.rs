//! Rendering helpers (markdown) for human-readable artifacts.

use sahayak_types::profile::Profile;
use sahayak_types::report::MatchReport;

pub fn render_match_md(report: &MatchReport) -> String {
    let mut out = String::new();
    out.push_str("# sahayak match\n\n");
    out.push_str(&format!(
        "- Schemes checked: {}\n",
        report.summary.schemes_checked
    ));
    out.push_str(&format!(
        "- Schemes matched: {}\n\n",
        report.summary.schemes_matched
    ));

    out.push_str("## Profile\n\n");
    out.push_str(&render_profile_fields(&report.profile));
    out.push('\n');

    out.push_str("## Matched schemes\n\n");
    if report.matches.is_empty() {
        out.push_str("_No schemes matched._\n");
        return out;
    }

    for (i, m) in report.matches.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, m.name));
        if !m.category.is_empty() {
            out.push_str(&format!("- Category: {}\n", m.category));
        }
        if !m.benefit.is_empty() {
            out.push_str(&format!("- Benefit: {}\n", m.benefit));
        }
        if let Some(link) = &m.link {
            out.push_str(&format!("- Apply: <{}>\n", link));
        }
        out.push('\n');
    }

    out
}

pub fn render_profile_md(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str("# sahayak profile\n\n");
    out.push_str(&render_profile_fields(profile));
    out
}

fn render_profile_fields(profile: &Profile) -> String {
    let mut out = String::new();
    if profile.is_empty() {
        out.push_str("_No attributes known._\n");
        return out;
    }

    if let Some(name) = &profile.name {
        out.push_str(&format!("- Name: {}\n", name));
    }
    if let Some(gender) = profile.gender {
        out.push_str(&format!("- Gender: {}\n", gender.as_str()));
    }
    if let Some(age) = profile.age {
        out.push_str(&format!("- Age: {}\n", age));
    }
    if let Some(income) = profile.income {
        out.push_str(&format!("- Income: Rs. {}\n", income));
    }
    if let Some(occupation) = &profile.occupation {
        out.push_str(&format!("- Occupation: {}\n", occupation));
    }
    if let Some(caste) = &profile.caste {
        out.push_str(&format!("- Caste category: {}\n", caste));
    }
    if let Some(status) = &profile.special_status {
        out.push_str(&format!("- Special status: {}\n", status));
    }
    if let Some(residence) = &profile.residence {
        out.push_str(&format!("- Residence: {}\n", residence));
    }
    if let Some(area) = profile.land_hectares {
        out.push_str(&format!("- Land holding: {} ha\n", area));
    }
    if let Some(loan) = profile.loan_amount {
        out.push_str(&format!("- Loan amount: Rs. {}\n", loan));
    }
    out
}
