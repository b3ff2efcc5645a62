use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::preference::{EducationPreference, ScalarPreference, SetPreference};

/// Platform minimum marriageable age
pub const MIN_MARRIAGEABLE_AGE: u8 = 18;

/// Binary gender model used for candidate selection
///
/// Accepted from the wire in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    const NAMES: &'static [&'static str] = &["Male", "Female"];

    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        [Gender::Male, Gender::Female]
            .into_iter()
            .find(|gender| raw.trim().eq_ignore_ascii_case(gender.as_str()))
            .ok_or_else(|| de::Error::unknown_variant(&raw, Gender::NAMES))
    }
}

/// Lifecycle status of a profile
///
/// Accepted from the wire in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileStatus {
    Active,
    Matched,
    Engaged,
    Married,
    Inactive,
}

impl ProfileStatus {
    const ALL: [ProfileStatus; 5] = [
        ProfileStatus::Active,
        ProfileStatus::Matched,
        ProfileStatus::Engaged,
        ProfileStatus::Married,
        ProfileStatus::Inactive,
    ];

    const NAMES: &'static [&'static str] = &["Active", "Matched", "Engaged", "Married", "Inactive"];

    /// Whether a profile in this status should be offered as a candidate
    pub fn is_available(self) -> bool {
        !matches!(self, ProfileStatus::Married | ProfileStatus::Inactive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileStatus::Active => "Active",
            ProfileStatus::Matched => "Matched",
            ProfileStatus::Engaged => "Engaged",
            ProfileStatus::Married => "Married",
            ProfileStatus::Inactive => "Inactive",
        }
    }
}

impl<'de> Deserialize<'de> for ProfileStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::ALL
            .into_iter()
            .find(|status| raw.trim().eq_ignore_ascii_case(status.as_str()))
            .ok_or_else(|| de::Error::unknown_variant(&raw, Self::NAMES))
    }
}

/// Biodata record for one person
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub father_name: String,
    pub gender: Gender,
    pub age: u8,
    /// Feet.inches encoding as entered, e.g. "5.10"
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub complexion: Option<String>,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub maslak: String,
    #[serde(default)]
    pub marital_status: String,
    #[serde(default)]
    pub mother_tongue: String,
    /// Nationality / origin
    #[serde(default)]
    pub belongs: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub income: Option<String>,
    #[serde(default)]
    pub house_type: String,
    #[serde(default)]
    pub family_type: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub brothers: Option<u8>,
    #[serde(default)]
    pub sisters: Option<u8>,
    #[serde(default)]
    pub married_brothers: Option<u8>,
    #[serde(default)]
    pub married_sisters: Option<u8>,
    #[serde(default)]
    pub father_alive: Option<bool>,
    #[serde(default)]
    pub mother_alive: Option<bool>,
    #[serde(default)]
    pub family_details: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<ProfileStatus>,
    #[serde(default)]
    pub requirements: Option<Requirements>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    /// Profiles without a status are treated as active
    pub fn is_available(&self) -> bool {
        self.status.map_or(true, ProfileStatus::is_available)
    }
}

/// Partner preferences embedded in a profile
///
/// Every field defaults to unset, meaning "no preference expressed".
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default)]
    #[validate(nested)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub height_range: Option<HeightRange>,
    #[serde(default)]
    pub education: EducationPreference,
    #[serde(default)]
    pub occupation: ScalarPreference,
    #[serde(default)]
    pub family_type: ScalarPreference,
    #[serde(default)]
    pub location: SetPreference,
    #[serde(default)]
    pub cast: SetPreference,
    #[serde(default)]
    pub maslak: SetPreference,
    #[serde(default)]
    pub marital_status: SetPreference,
    #[serde(default)]
    pub mother_tongue: SetPreference,
    #[serde(default)]
    pub belongs: SetPreference,
    #[serde(default)]
    pub house_type: SetPreference,
}

/// Inclusive age interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_age_range"))]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u8) -> bool {
        self.min <= age && age <= self.max
    }
}

fn validate_age_range(range: &AgeRange) -> Result<(), ValidationError> {
    if range.min < MIN_MARRIAGEABLE_AGE {
        return Err(ValidationError::new("age_below_minimum"));
    }
    if range.min > range.max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// Inclusive height interval in feet.inches encoding
///
/// A blank bound leaves that side of the interval open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

impl HeightRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.min.trim().is_empty() && self.max.trim().is_empty()
    }
}
