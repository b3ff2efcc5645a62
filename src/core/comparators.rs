use crate::core::education::EducationLevel;
use crate::core::height::{is_within_height_range, Height};
use crate::models::{
    values_match, AgeRange, EducationPreference, HeightRange, ScalarPreference, SetPreference,
};

/// A requirement dimension a candidate is judged on
///
/// Declaration order is evaluation order, and therefore the order labels
/// appear in `matchedFields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementField {
    Age,
    Height,
    Education,
    Occupation,
    FamilyType,
    Location,
    Cast,
    Maslak,
    MaritalStatus,
    MotherTongue,
    Belongs,
    HouseType,
}

impl RequirementField {
    /// Display label used when the field matched
    pub fn label(self) -> &'static str {
        match self {
            RequirementField::Age => "Age Match",
            RequirementField::Height => "Height Match",
            RequirementField::Education => "Education Match",
            RequirementField::Occupation => "Occupation Match",
            RequirementField::FamilyType => "Family Type Match",
            RequirementField::Location => "Location Match",
            RequirementField::Cast => "Cast Match",
            RequirementField::Maslak => "Maslak Match",
            RequirementField::MaritalStatus => "Marital Status Match",
            RequirementField::MotherTongue => "Mother Tongue Match",
            RequirementField::Belongs => "Nationality Match",
            RequirementField::HouseType => "House Type Match",
        }
    }
}

/// Verdict of one comparator for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub field: RequirementField,
    pub matched: bool,
}

impl MatchOutcome {
    fn new(field: RequirementField, matched: bool) -> Self {
        Self { field, matched }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

// Every comparator returns `None` when the requirement is unset, which
// keeps the field out of the score denominator.

/// Inclusive age interval check
#[inline]
pub fn compare_age(requirement: Option<&AgeRange>, candidate_age: u8) -> Option<MatchOutcome> {
    let range = requirement?;
    Some(MatchOutcome::new(RequirementField::Age, range.contains(candidate_age)))
}

/// Height interval check on total inches
///
/// Malformed bounds or a malformed candidate height fail this field only.
pub fn compare_height(requirement: Option<&HeightRange>, candidate_height: &str) -> Option<MatchOutcome> {
    let range = requirement.filter(|range| !range.is_unset())?;

    let matched = match (
        parse_bound(&range.min),
        parse_bound(&range.max),
        candidate_height.parse::<Height>(),
    ) {
        (Ok(min), Ok(max), Ok(height)) => is_within_height_range(height, min, max),
        (min, max, height) => {
            tracing::debug!(
                "Unparsable height (min: {:?}, max: {:?}, candidate: {:?}), field not matched",
                min.err(),
                max.err(),
                height.err()
            );
            false
        }
    };

    Some(MatchOutcome::new(RequirementField::Height, matched))
}

/// Blank bounds are open; anything else must parse
fn parse_bound(raw: &str) -> Result<Option<Height>, crate::core::height::HeightParseError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

/// Education check: "Any", ordinal "X or above", or exact value
pub fn compare_education(requirement: &EducationPreference, candidate_education: &str) -> Option<MatchOutcome> {
    let matched = match requirement {
        EducationPreference::Unset => return None,
        EducationPreference::Any => true,
        EducationPreference::OrAbove(level) => {
            match (EducationLevel::parse(level), EducationLevel::parse(candidate_education)) {
                (Some(required), Some(actual)) => actual.is_at_least(required),
                _ => {
                    tracing::debug!(
                        "Education {:?} not on the ladder for \"{} or above\", field not matched",
                        candidate_education,
                        level
                    );
                    false
                }
            }
        }
        EducationPreference::Exactly(value) => values_match(value, candidate_education),
    };

    Some(MatchOutcome::new(RequirementField::Education, matched))
}

/// Single-valued check for occupation and family type
pub fn compare_scalar(
    field: RequirementField,
    requirement: &ScalarPreference,
    candidate_value: &str,
) -> Option<MatchOutcome> {
    let matched = match requirement {
        ScalarPreference::Unset => return None,
        ScalarPreference::Any => true,
        ScalarPreference::Exactly(value) => values_match(value, candidate_value),
    };

    Some(MatchOutcome::new(field, matched))
}

/// Set-membership check with "Any" and self-referential sentinels
///
/// `candidate_values` lists every candidate attribute the set may name
/// (city then country for location, a single value elsewhere). The first
/// entry is the field's primary attribute. `subject_value` is the profile
/// owner's own primary attribute, or `None` for fields that do not support
/// "Same ..." entries. A self-reference is only ever compared against the
/// candidate's primary attribute.
pub fn compare_set(
    field: RequirementField,
    requirement: &SetPreference,
    candidate_values: &[&str],
    subject_value: Option<&str>,
) -> Option<MatchOutcome> {
    let matched = match requirement {
        SetPreference::Unset => return None,
        SetPreference::Any => true,
        SetPreference::OneOf {
            values,
            same_as_subject,
        } => {
            let in_set = candidate_values
                .iter()
                .any(|candidate| values.iter().any(|value| values_match(value, candidate)));

            let shares_subject = *same_as_subject
                && match (subject_value, candidate_values.first()) {
                    (Some(own), Some(primary)) => values_match(own, primary),
                    _ => {
                        tracing::debug!("{:?} has no self-reference, \"Same\" entry ignored", field);
                        false
                    }
                };

            in_set || shares_subject
        }
    };

    Some(MatchOutcome::new(field, matched))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds_inclusive() {
        let range = AgeRange::new(18, 25);
        assert!(compare_age(Some(&range), 18).unwrap().matched);
        assert!(compare_age(Some(&range), 25).unwrap().matched);
        assert!(!compare_age(Some(&range), 26).unwrap().matched);
        assert!(compare_age(None, 30).is_none());
    }

    #[test]
    fn test_height_feet_inches_boundary() {
        let range = HeightRange::new("5.0", "5.10");
        assert!(compare_height(Some(&range), "5.9").unwrap().matched);
        assert!(compare_height(Some(&range), "5.10").unwrap().matched);
        assert!(!compare_height(Some(&range), "5.11").unwrap().matched);
    }

    #[test]
    fn test_height_open_bound() {
        let range = HeightRange::new("5.6", "");
        assert!(compare_height(Some(&range), "6.2").unwrap().matched);
        assert!(!compare_height(Some(&range), "5.5").unwrap().matched);
    }

    #[test]
    fn test_height_malformed_is_not_matched() {
        let range = HeightRange::new("5.0", "6.0");
        let outcome = compare_height(Some(&range), "tall").unwrap();
        assert_eq!(outcome.field, RequirementField::Height);
        assert!(!outcome.matched);

        let bad_range = HeightRange::new("five", "6.0");
        assert!(!compare_height(Some(&bad_range), "5.6").unwrap().matched);
    }

    #[test]
    fn test_height_blank_range_skipped() {
        assert!(compare_height(Some(&HeightRange::default()), "5.6").is_none());
        assert!(compare_height(None, "5.6").is_none());
    }

    #[test]
    fn test_education_or_above() {
        let pref = EducationPreference::from("Bachelor or above");
        assert!(compare_education(&pref, "Master").unwrap().matched);
        assert!(compare_education(&pref, "Bachelor").unwrap().matched);
        assert!(!compare_education(&pref, "Matric").unwrap().matched);
        assert!(!compare_education(&pref, "Hafiz").unwrap().matched);
    }

    #[test]
    fn test_education_graduate_or_above_rejects_undergraduate() {
        let pref = EducationPreference::from("Graduate or above");
        assert!(!compare_education(&pref, "Undergraduate").unwrap().matched);
        assert!(compare_education(&pref, "BSc").unwrap().matched);

        let lower = EducationPreference::from("Undergraduate or above");
        assert!(compare_education(&lower, "Graduate").unwrap().matched);
        assert!(!compare_education(&lower, "Intermediate").unwrap().matched);
    }

    #[test]
    fn test_education_unknown_threshold_fails_closed() {
        let pref = EducationPreference::from("Wizardry or above");
        assert!(!compare_education(&pref, "PhD").unwrap().matched);
    }

    #[test]
    fn test_education_exact_and_any() {
        assert!(compare_education(&EducationPreference::from("mbbs"), "MBBS").unwrap().matched);
        assert!(compare_education(&EducationPreference::Any, "").unwrap().matched);
        assert!(compare_education(&EducationPreference::Unset, "MBBS").is_none());
    }

    #[test]
    fn test_scalar() {
        let pref = ScalarPreference::from("Business");
        assert!(compare_scalar(RequirementField::Occupation, &pref, "business").unwrap().matched);
        assert!(!compare_scalar(RequirementField::Occupation, &pref, "Doctor").unwrap().matched);
        assert!(compare_scalar(RequirementField::FamilyType, &ScalarPreference::Any, "").unwrap().matched);
    }

    #[test]
    fn test_set_membership_case_insensitive() {
        let pref = SetPreference::from_values(["Urdu", "Punjabi"]);
        let outcome = compare_set(RequirementField::MotherTongue, &pref, &["punjabi"], None).unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.label(), "Mother Tongue Match");
    }

    #[test]
    fn test_location_matches_city_or_country() {
        let pref = SetPreference::from_values(["Lahore", "UK"]);
        assert!(compare_set(RequirementField::Location, &pref, &["Lahore", "Pakistan"], None).unwrap().matched);
        assert!(compare_set(RequirementField::Location, &pref, &["London", "UK"], None).unwrap().matched);
        assert!(!compare_set(RequirementField::Location, &pref, &["Dubai", "UAE"], None).unwrap().matched);
    }

    #[test]
    fn test_same_cast_sentinel() {
        let pref = SetPreference::from_values(["Same Cast"]);
        assert!(compare_set(RequirementField::Cast, &pref, &["Syed"], Some("Syed")).unwrap().matched);
        assert!(!compare_set(RequirementField::Cast, &pref, &["Rajput"], Some("Syed")).unwrap().matched);
    }

    #[test]
    fn test_same_sentinel_never_matches_blank() {
        let pref = SetPreference::same_as_subject();
        assert!(!compare_set(RequirementField::Maslak, &pref, &[""], Some("")).unwrap().matched);
    }

    #[test]
    fn test_same_city_ignores_shared_country() {
        let pref = SetPreference::from_values(["Same City"]);
        let field = RequirementField::Location;
        assert!(!compare_set(field, &pref, &["Karachi", "Pakistan"], Some("Lahore")).unwrap().matched);
        assert!(compare_set(field, &pref, &["lahore", "Pakistan"], Some("Lahore")).unwrap().matched);
    }

    #[test]
    fn test_same_sentinel_needs_a_self_reference() {
        let pref = SetPreference::from_values(["Same Cast"]);
        let outcome = compare_set(RequirementField::MaritalStatus, &pref, &["Single"], None).unwrap();
        assert!(!outcome.matched);
    }

    #[test]
    fn test_any_always_matches() {
        let outcome = compare_set(RequirementField::HouseType, &SetPreference::Any, &[""], None).unwrap();
        assert!(outcome.matched);
    }
}
