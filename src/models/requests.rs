use serde::{Deserialize, Serialize};

/// Per-query options for the matcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Keep unavailable (inactive/married) candidates, flagged for de-emphasis
    #[serde(default)]
    pub include_inactive: bool,
    /// Truncate to the best K results; `None` returns everything
    #[serde(default)]
    pub top_k: Option<usize>,
    /// Drop candidates matching fewer fields than this
    #[serde(default)]
    pub min_matched: usize,
}

impl MatchOptions {
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn min_matched(mut self, min: usize) -> Self {
        self.min_matched = min;
        self
    }
}
