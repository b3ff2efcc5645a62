use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::MatchScore;

/// How scored candidates are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Descending matched-field count; a 3/5 candidate outranks a 2/2 one
    #[default]
    MatchedCount,
    /// Descending matched/total ratio; 0/0 counts as a full ratio
    Ratio,
}

/// Order two scores best-first under a policy
///
/// Returns `Less` when `a` should come before `b`.
pub fn compare_scores(a: &MatchScore, b: &MatchScore, policy: RankingPolicy) -> Ordering {
    match policy {
        RankingPolicy::MatchedCount => b.matched.cmp(&a.matched),
        RankingPolicy::Ratio => {
            // a.m / a.n vs b.m / b.n without floats
            let (am, an) = ratio_terms(a);
            let (bm, bn) = ratio_terms(b);
            (bm * an).cmp(&(am * bn))
        }
    }
}

fn ratio_terms(score: &MatchScore) -> (usize, usize) {
    if score.total == 0 {
        (1, 1)
    } else {
        (score.matched, score.total)
    }
}

/// Sort scored items best-first
///
/// The sort is stable: items with equal keys keep their input order, so a
/// pool supplied newest-first stays newest-first within a score band.
pub fn rank<T, F>(mut items: Vec<T>, policy: RankingPolicy, score_of: F) -> Vec<T>
where
    F: Fn(&T) -> MatchScore,
{
    items.sort_by(|a, b| compare_scores(&score_of(a), &score_of(b), policy));
    items
}
