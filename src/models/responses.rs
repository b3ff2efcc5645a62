use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::domain::{Gender, ProfileStatus};

/// Display text used instead of "0/0"
pub const COMPATIBLE_PROFILE: &str = "Compatible Profile";

/// "matched/total" summary for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub matched: usize,
    pub total: usize,
}

impl MatchScore {
    /// True when the subject expressed no preferences at all
    pub fn is_unconstrained(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            f.write_str(COMPATIBLE_PROFILE)
        } else {
            write!(f, "{}/{}", self.matched, self.total)
        }
    }
}

impl Serialize for MatchScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ranked candidate as handed to the presentation layer
///
/// Carries public biodata only; contact fields stay behind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub rank: usize,
    pub candidate_id: String,
    pub name: String,
    pub father_name: String,
    pub gender: Gender,
    pub age: u8,
    pub height: String,
    pub weight: Option<String>,
    pub complexion: Option<String>,
    pub cast: String,
    pub maslak: String,
    pub marital_status: String,
    pub mother_tongue: String,
    pub belongs: String,
    pub education: String,
    pub occupation: String,
    pub income: Option<String>,
    pub house_type: String,
    pub family_type: String,
    pub city: String,
    pub country: String,
    pub status: Option<ProfileStatus>,
    /// Unavailable candidate kept because inactive profiles were requested
    pub de_emphasized: bool,
    pub matched_fields: Vec<String>,
    pub match_score: MatchScore,
}

/// Outcome of one matching query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub subject_id: String,
    pub matches: Vec<MatchResult>,
    /// Candidates that passed the filter, before cut-off and truncation
    pub total_candidates: usize,
}
