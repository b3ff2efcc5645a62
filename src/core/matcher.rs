use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::{
    filters::filter_candidates,
    projection::project,
    ranking::{rank, RankingPolicy},
    scoring::calculate_match_score,
};
use crate::models::{MatchOptions, MatchReport, Profile};

/// Errors raised at the matcher boundary, before any scoring happens
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Profile {0} has no requirements record")]
    MissingRequirements(String),

    #[error("Invalid requirements: {0}")]
    InvalidRequirements(#[from] ValidationErrors),

    #[error("Subject profile not found: {0}")]
    SubjectNotFound(String),
}

/// Main matching orchestrator - runs the compatibility pipeline
///
/// # Pipeline Stages
/// 1. Candidate filter (self, gender, availability)
/// 2. Field-by-field scoring
/// 3. Minimum-match cut-off
/// 4. Ranking
/// 5. Projection and top-K truncation
///
/// Holds no mutable state; one instance can serve concurrent queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    ranking: RankingPolicy,
}

impl Matcher {
    pub fn new(ranking: RankingPolicy) -> Self {
        Self { ranking }
    }

    pub fn ranking(&self) -> RankingPolicy {
        self.ranking
    }

    /// Find and rank the candidates satisfying a subject's requirements
    ///
    /// # Arguments
    /// * `subject` - The profile whose requirements drive the query
    /// * `pool` - Read-only snapshot of all profiles
    /// * `options` - Inactive inclusion, minimum matched fields, top-K
    ///
    /// # Returns
    /// MatchReport with ranked results, or an error if the subject has no
    /// usable requirements
    pub fn find_matches(
        &self,
        subject: &Profile,
        pool: &[Profile],
        options: &MatchOptions,
    ) -> Result<MatchReport, MatchError> {
        let requirements = subject
            .requirements
            .as_ref()
            .ok_or_else(|| MatchError::MissingRequirements(subject.id.clone()))?;
        requirements.validate()?;

        // Stage 1: Pre-selection
        let candidates = filter_candidates(subject, pool, options.include_inactive);
        let total_candidates = candidates.len();

        // Stages 2 & 3: Score and apply the cut-off
        let scored: Vec<_> = candidates
            .into_iter()
            .map(|candidate| (candidate, calculate_match_score(requirements, subject, candidate)))
            .filter(|(_, card)| card.score.matched >= options.min_matched)
            .collect();

        tracing::debug!(
            "Scored {} of {} candidates for {} (pool: {})",
            scored.len(),
            total_candidates,
            subject.id,
            pool.len()
        );

        // Stage 4: Rank
        let ranked = rank(scored, self.ranking, |(_, card)| card.score);

        // Stage 5: Project
        let matches = project(&ranked, options.top_k);

        Ok(MatchReport {
            subject_id: subject.id.clone(),
            matches,
            total_candidates,
        })
    }

    /// Same as [`Matcher::find_matches`], looking the subject up in the pool by id
    pub fn find_matches_for(
        &self,
        subject_id: &str,
        pool: &[Profile],
        options: &MatchOptions,
    ) -> Result<MatchReport, MatchError> {
        let subject = pool
            .iter()
            .find(|profile| profile.id == subject_id)
            .ok_or_else(|| MatchError::SubjectNotFound(subject_id.to_string()))?;

        self.find_matches(subject, pool, options)
    }
}
