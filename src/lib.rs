//! Biodata Match - compatibility matching engine for matrimonial profiles
//!
//! Given one profile's partner requirements, this library evaluates a pool of
//! candidate profiles field by field, explains which fields matched, and
//! ranks candidates by how many preferences they satisfy.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, RankingPolicy, Height, EducationLevel};
pub use crate::models::{Profile, Requirements, MatchOptions, MatchReport, MatchResult, MatchScore};
