use crate::rules::{RuleCheck, check_rules, rules_pass};
use sahayak_types::profile::Profile;
use sahayak_types::report::{MatchEntry, MatchReport, MatchSummary, ToolInfo};
use sahayak_types::scheme::SchemeRecord;
use tracing::debug;

/// Ordered eligibility evaluation: the sub-sequence of `catalog` whose every
/// present predicate passes against `profile`.
///
/// Pure and total. Output order is catalog order, never relevance-ranked;
/// zero matches is a normal outcome.
pub fn evaluate<'a>(profile: &Profile, catalog: &'a [SchemeRecord]) -> Vec<&'a SchemeRecord> {
    let matched: Vec<&SchemeRecord> = catalog
        .iter()
        .filter(|scheme| rules_pass(&scheme.rules, profile))
        .collect();

    debug!(
        checked = catalog.len(),
        matched = matched.len(),
        "evaluated profile against catalog"
    );
    matched
}

/// One catalog scheme with its full predicate trace.
#[derive(Debug, Clone)]
pub struct SchemeEvaluation<'a> {
    pub scheme: &'a SchemeRecord,
    pub eligible: bool,
    pub checks: Vec<RuleCheck>,
}

/// Like [`evaluate`], but keeps every scheme and the outcome of each of its
/// predicates. The eligible subset, in order, is exactly what [`evaluate`]
/// returns.
pub fn evaluate_detailed<'a>(
    profile: &Profile,
    catalog: &'a [SchemeRecord],
) -> Vec<SchemeEvaluation<'a>> {
    catalog
        .iter()
        .map(|scheme| {
            let checks = check_rules(&scheme.rules, profile);
            SchemeEvaluation {
                scheme,
                eligible: checks.iter().all(|c| c.passed),
                checks,
            }
        })
        .collect()
}

/// Build the match-report artifact for one evaluation run. Run timestamps are
/// the caller's concern.
pub fn match_report(tool: ToolInfo, profile: Profile, catalog: &[SchemeRecord]) -> MatchReport {
    let matched = evaluate(&profile, catalog);

    let mut report = MatchReport::new(tool, profile);
    report.summary = MatchSummary {
        schemes_checked: catalog.len() as u64,
        schemes_matched: matched.len() as u64,
    };
    report.matches = matched.into_iter().map(MatchEntry::from).collect();
    report
}
