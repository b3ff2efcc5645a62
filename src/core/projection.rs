use crate::core::scoring::ScoreCard;
use crate::models::{MatchResult, Profile};

/// Build the display-ready record for one ranked candidate
pub fn to_match_result(rank: usize, candidate: &Profile, card: &ScoreCard) -> MatchResult {
    MatchResult {
        rank,
        candidate_id: candidate.id.clone(),
        name: candidate.name.clone(),
        father_name: candidate.father_name.clone(),
        gender: candidate.gender,
        age: candidate.age,
        height: candidate.height.clone(),
        weight: candidate.weight.clone(),
        complexion: candidate.complexion.clone(),
        cast: candidate.cast.clone(),
        maslak: candidate.maslak.clone(),
        marital_status: candidate.marital_status.clone(),
        mother_tongue: candidate.mother_tongue.clone(),
        belongs: candidate.belongs.clone(),
        education: candidate.education.clone(),
        occupation: candidate.occupation.clone(),
        income: candidate.income.clone(),
        house_type: candidate.house_type.clone(),
        family_type: candidate.family_type.clone(),
        city: candidate.city.clone(),
        country: candidate.country.clone(),
        status: candidate.status,
        de_emphasized: !candidate.is_available(),
        matched_fields: card.matched_fields().into_iter().map(str::to_string).collect(),
        match_score: card.score,
    }
}

/// Project ranked candidates, keeping at most `top_k`
///
/// Ranks are 1-based and follow input order.
pub fn project(ranked: &[(&Profile, ScoreCard)], top_k: Option<usize>) -> Vec<MatchResult> {
    let limit = top_k.unwrap_or(ranked.len());

    ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, (candidate, card))| to_match_result(index + 1, candidate, card))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparators::{MatchOutcome, RequirementField};
    use crate::models::MatchScore;

    fn create_test_profile(id: &str, status: &str) -> Profile {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Profile {}", id),
            "gender": "Female",
            "age": 24,
            "phone": "+92 300 0000000",
            "motherTongue": "Urdu",
            "houseType": "Own",
            "income": "100k",
            "status": status,
        }))
        .unwrap()
    }

    fn card() -> ScoreCard {
        ScoreCard {
            outcomes: vec![
                MatchOutcome { field: RequirementField::Age, matched: true },
                MatchOutcome { field: RequirementField::Cast, matched: false },
            ],
            score: MatchScore { matched: 1, total: 2 },
        }
    }

    #[test]
    fn test_projection_shape() {
        let candidate = create_test_profile("c1", "Active");
        let result = to_match_result(1, &candidate, &card());

        assert_eq!(result.candidate_id, "c1");
        assert_eq!(result.matched_fields, vec!["Age Match"]);
        assert_eq!(result.match_score.to_string(), "1/2");
        assert!(!result.de_emphasized);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchScore"], "1/2");
        assert_eq!(json["motherTongue"], "Urdu");
        assert_eq!(json["houseType"], "Own");
        assert_eq!(json["income"], "100k");
        for key in ["belongs", "familyType", "complexion", "weight"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json.get("phone").is_none());
        assert!(json.get("whatsapp").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_inactive_is_de_emphasized() {
        let candidate = create_test_profile("c1", "Inactive");
        assert!(to_match_result(1, &candidate, &card()).de_emphasized);
    }

    #[test]
    fn test_top_k_truncates() {
        let a = create_test_profile("a", "Active");
        let b = create_test_profile("b", "Active");
        let c = create_test_profile("c", "Active");
        let ranked = vec![(&a, card()), (&b, card()), (&c, card())];

        let results = project(&ranked, Some(2));
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].rank, 2);
        assert_eq!(results[1].candidate_id, "b");

        assert_eq!(project(&ranked, None).len(), 3);
        assert!(project(&ranked, Some(0)).is_empty());
    }
}
