use crate::core::comparators::{
    compare_age, compare_education, compare_height, compare_scalar, compare_set, MatchOutcome,
    RequirementField,
};
use crate::models::{MatchScore, Profile, Requirements};

/// Per-candidate scoring output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    /// Every evaluated (non-skipped) field, in evaluation order
    pub outcomes: Vec<MatchOutcome>,
    pub score: MatchScore,
}

impl ScoreCard {
    /// Labels of the fields that matched, in evaluation order
    pub fn matched_fields(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.matched)
            .map(MatchOutcome::label)
            .collect()
    }
}

/// Evaluate every applicable comparator for one candidate
///
/// Fields with no expressed preference are skipped; the rest make up the
/// denominator. `subject` supplies the owner's own city, cast and maslak
/// for "Same ..." entries; other fields have no self-reference. Neither
/// profile is modified.
pub fn evaluate(requirements: &Requirements, subject: &Profile, candidate: &Profile) -> Vec<MatchOutcome> {
    let outcomes = [
        compare_age(requirements.age_range.as_ref(), candidate.age),
        compare_height(requirements.height_range.as_ref(), &candidate.height),
        compare_education(&requirements.education, &candidate.education),
        compare_scalar(RequirementField::Occupation, &requirements.occupation, &candidate.occupation),
        compare_scalar(RequirementField::FamilyType, &requirements.family_type, &candidate.family_type),
        compare_set(
            RequirementField::Location,
            &requirements.location,
            &[candidate.city.as_str(), candidate.country.as_str()],
            Some(subject.city.as_str()),
        ),
        compare_set(RequirementField::Cast, &requirements.cast, &[candidate.cast.as_str()], Some(subject.cast.as_str())),
        compare_set(RequirementField::Maslak, &requirements.maslak, &[candidate.maslak.as_str()], Some(subject.maslak.as_str())),
        compare_set(RequirementField::MaritalStatus, &requirements.marital_status, &[candidate.marital_status.as_str()], None),
        compare_set(RequirementField::MotherTongue, &requirements.mother_tongue, &[candidate.mother_tongue.as_str()], None),
        compare_set(RequirementField::Belongs, &requirements.belongs, &[candidate.belongs.as_str()], None),
        compare_set(RequirementField::HouseType, &requirements.house_type, &[candidate.house_type.as_str()], None),
    ];

    outcomes.into_iter().flatten().collect()
}

/// Score one candidate against the subject's requirements
///
/// `total` counts evaluated fields and `matched` those that passed, so
/// `matched <= total` always holds. A subject with no preferences yields
/// `0/0`, rendered as "Compatible Profile".
pub fn calculate_match_score(requirements: &Requirements, subject: &Profile, candidate: &Profile) -> ScoreCard {
    let outcomes = evaluate(requirements, subject, candidate);

    let score = MatchScore {
        matched: outcomes.iter().filter(|outcome| outcome.matched).count(),
        total: outcomes.len(),
    };

    tracing::trace!(
        "Scored candidate {} for {}: {} ({:?})",
        candidate.id,
        subject.id,
        score,
        outcomes
    );

    ScoreCard { outcomes, score }
}
