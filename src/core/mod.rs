// Core algorithm exports
pub mod comparators;
pub mod education;
pub mod filters;
pub mod height;
pub mod matcher;
pub mod projection;
pub mod ranking;
pub mod scoring;

pub use comparators::{MatchOutcome, RequirementField};
pub use education::EducationLevel;
pub use filters::{filter_candidates, is_eligible_candidate};
pub use height::{Height, HeightParseError};
pub use matcher::{MatchError, Matcher};
pub use ranking::{rank, RankingPolicy};
pub use scoring::{calculate_match_score, ScoreCard};
