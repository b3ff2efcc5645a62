use crate::models::Profile;

/// Check if a profile may be offered to the subject at all
///
/// This is the pre-selection stage of the pipeline: not the subject
/// themselves, opposite gender, and available unless the caller asked for
/// inactive profiles too.
#[inline]
pub fn is_eligible_candidate(subject: &Profile, candidate: &Profile, include_inactive: bool) -> bool {
    // Skip the subject
    if candidate.id == subject.id {
        return false;
    }

    // Check gender
    if candidate.gender != subject.gender.opposite() {
        return false;
    }

    // Skip inactive/married unless explicitly included
    if !include_inactive && !candidate.is_available() {
        return false;
    }

    true
}

/// Select the candidates to score for a subject
///
/// Output keeps pool order; ranking happens later.
pub fn filter_candidates<'a>(
    subject: &Profile,
    pool: &'a [Profile],
    include_inactive: bool,
) -> Vec<&'a Profile> {
    pool.iter()
        .filter(|candidate| is_eligible_candidate(subject, candidate, include_inactive))
        .collect()
}
