// Unit tests for Biodata Match

use biodata_match::core::{
    comparators::{compare_education, compare_height, compare_set, RequirementField},
    education::EducationLevel,
    filters::is_eligible_candidate,
    height::Height,
    scoring::calculate_match_score,
};
use biodata_match::models::{
    AgeRange, EducationPreference, HeightRange, Profile, Requirements, SetPreference,
};

fn create_profile(id: &str, gender: &str, age: u8) -> Profile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Profile {}", id),
        "gender": gender,
        "age": age,
    }))
    .unwrap()
}

#[test]
fn test_height_five_ten_is_taller_than_five_nine() {
    let five_nine: Height = "5.9".parse().unwrap();
    let five_ten: Height = "5.10".parse().unwrap();
    let five_one: Height = "5.1".parse().unwrap();

    assert!(five_ten > five_nine);
    assert!(five_one < five_nine);
}

#[test]
fn test_height_boundary_against_range() {
    let range = HeightRange::new("5.0", "5.10");

    assert!(compare_height(Some(&range), "5.9").unwrap().matched);
    // 11 inches > 10 inches, even though 5.11 > 5.10 as decimals
    assert!(!compare_height(Some(&range), "5.11").unwrap().matched);
}

#[test]
fn test_height_empty_candidate_not_matched() {
    let range = HeightRange::new("5.0", "5.10");
    let outcome = compare_height(Some(&range), "").unwrap();

    assert!(!outcome.matched);
}

#[test]
fn test_education_bachelor_or_above() {
    let pref = EducationPreference::from("Bachelor or above");

    assert!(compare_education(&pref, "Master").unwrap().matched);
    assert!(!compare_education(&pref, "Matric").unwrap().matched);
}

#[test]
fn test_education_ladder_levels() {
    let ladder = ["Matric", "Intermediate", "Bachelor", "Master", "PhD"];
    let levels: Vec<EducationLevel> = ladder
        .iter()
        .map(|name| EducationLevel::parse(name).unwrap())
        .collect();

    for pair in levels.windows(2) {
        assert!(pair[1].is_at_least(pair[0]));
        assert!(!pair[0].is_at_least(pair[1]));
    }
}

#[test]
fn test_same_cast_sentinel() {
    let pref = SetPreference::from_values(["Same Cast"]);

    assert!(compare_set(RequirementField::Cast, &pref, &["Syed"], Some("Syed")).unwrap().matched);
    assert!(!compare_set(RequirementField::Cast, &pref, &["Rajput"], Some("Syed")).unwrap().matched);
}

#[test]
fn test_same_maslak_with_extra_value() {
    let pref = SetPreference::from_values(["Same Maslak", "Hanafi"]);

    assert!(compare_set(RequirementField::Maslak, &pref, &["Sunni"], Some("Sunni")).unwrap().matched);
    assert!(compare_set(RequirementField::Maslak, &pref, &["hanafi"], Some("Sunni")).unwrap().matched);
    assert!(!compare_set(RequirementField::Maslak, &pref, &["Shia"], Some("Sunni")).unwrap().matched);
}

#[test]
fn test_candidate_filter_opposite_gender() {
    let subject = create_profile("me", "Female", 25);

    assert!(is_eligible_candidate(&subject, &create_profile("a", "Male", 28), false));
    assert!(!is_eligible_candidate(&subject, &create_profile("b", "Female", 28), false));
}

#[test]
fn test_end_to_end_scoring_scenario() {
    let subject = create_profile("me", "Male", 27);
    let mut candidate = create_profile("c", "Female", 22);
    candidate.education = "Master".to_string();
    candidate.cast = "Rajput".to_string();

    let requirements = Requirements {
        age_range: Some(AgeRange::new(18, 25)),
        education: EducationPreference::from("Bachelor or above"),
        cast: SetPreference::from_values(["Any"]),
        ..Requirements::default()
    };

    let card = calculate_match_score(&requirements, &subject, &candidate);

    assert_eq!(card.matched_fields(), vec!["Age Match", "Education Match", "Cast Match"]);
    assert_eq!(card.score.to_string(), "3/3");
}

#[test]
fn test_requirements_from_intake_json() {
    let json = r#"{
        "ageRange": { "min": 22, "max": 30 },
        "heightRange": { "min": "5.2", "max": "" },
        "education": "Any Education",
        "occupation": "",
        "familyType": "Any",
        "location": ["Karachi", "Any"],
        "maritalStatus": ["Single", "Divorced"],
        "houseType": []
    }"#;

    let requirements: Requirements = serde_json::from_str(json).unwrap();

    assert_eq!(requirements.education, EducationPreference::Any);
    assert!(requirements.occupation.is_unset());
    assert_eq!(requirements.location, SetPreference::Any);
    assert!(requirements.house_type.is_unset());
    assert_eq!(
        requirements.marital_status,
        SetPreference::from_values(["Single", "Divorced"])
    );
    assert_eq!(requirements.height_range, Some(HeightRange::new("5.2", "")));
}
