use crate::profile::Profile;
use crate::scheme::SchemeRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The match report artifact written after an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Schema identifier, "sahayak.match.v1".
    pub schema: String,

    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    /// Echo of the evaluated profile, as resolved after any merging.
    pub profile: Profile,

    #[serde(default)]
    pub matches: Vec<MatchEntry>,

    pub summary: MatchSummary,
}

impl MatchReport {
    pub fn new(tool: ToolInfo, profile: Profile) -> Self {
        Self {
            schema: crate::schema::SAHAYAK_MATCH_V1.to_string(),
            tool,
            run: RunInfo::default(),
            profile,
            matches: vec![],
            summary: MatchSummary::default(),
        }
    }
}

/// One matched scheme, flattened for presentation layers that only render
/// name/benefit/link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub scheme_id: String,
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub benefit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<&SchemeRecord> for MatchEntry {
    fn from(s: &SchemeRecord) -> Self {
        MatchEntry {
            scheme_id: s.id.clone(),
            name: s.name.clone(),
            category: s.category.clone(),
            benefit: s.benefit.clone(),
            link: s.link.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    pub schemes_checked: u64,
    pub schemes_matched: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}
