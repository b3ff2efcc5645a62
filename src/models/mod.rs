// Model exports
pub mod domain;
pub mod preference;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, Gender, HeightRange, Profile, ProfileStatus, Requirements, MIN_MARRIAGEABLE_AGE};
pub use preference::{values_match, EducationPreference, ScalarPreference, SetPreference};
pub use requests::MatchOptions;
pub use responses::{MatchReport, MatchResult, MatchScore, COMPATIBLE_PROFILE};
