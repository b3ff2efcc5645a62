use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire text written back for the permissive sentinel
const ANY: &str = "Any";

/// Wire text written back for a self-referential sentinel
const SAME: &str = "Same";

/// Suffix turning an education value into an ordinal threshold
const OR_ABOVE: &str = " or above";

/// "Any", "Any Cast", "Any Education", ... in any case
pub fn is_any_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case(ANY)
        || (value.len() > ANY.len()
            && value.is_char_boundary(ANY.len() + 1)
            && value[..ANY.len() + 1].eq_ignore_ascii_case("any "))
}

/// "Same Cast", "Same Maslak", ... in any case
pub fn is_same_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case(SAME)
        || (value.len() > SAME.len()
            && value.is_char_boundary(SAME.len() + 1)
            && value[..SAME.len() + 1].eq_ignore_ascii_case("same "))
}

/// Case-insensitive equality of two preference values
///
/// Blank never equals anything. Used both to dedupe set entries and to
/// match candidates, so the two always agree on what counts as the same
/// value.
pub fn values_match(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    !a.is_empty() && a.to_lowercase() == b.to_lowercase()
}

/// Single-valued partner preference (occupation, family type)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScalarPreference {
    /// No preference expressed; the field is skipped
    #[default]
    Unset,
    /// Explicitly permissive; counted and always matched
    Any,
    Exactly(String),
}

impl ScalarPreference {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Unset,
            Some(value) if is_any_sentinel(value) => Self::Any,
            Some(value) => Self::Exactly(value.to_string()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<&str> for ScalarPreference {
    fn from(value: &str) -> Self {
        Self::parse(Some(value))
    }
}

impl<'de> Deserialize<'de> for ScalarPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_deref()))
    }
}

impl Serialize for ScalarPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Any => serializer.serialize_str(ANY),
            Self::Exactly(value) => serializer.serialize_str(value),
        }
    }
}

/// Education preference, which may name an ordinal threshold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EducationPreference {
    #[default]
    Unset,
    Any,
    /// "<level> or above"; holds the level text as written
    OrAbove(String),
    Exactly(String),
}

impl EducationPreference {
    pub fn parse(raw: Option<&str>) -> Self {
        let value = match raw.map(str::trim) {
            None | Some("") => return Self::Unset,
            Some(value) => value,
        };

        if is_any_sentinel(value) {
            return Self::Any;
        }

        let split = value.len().checked_sub(OR_ABOVE.len());
        match split {
            Some(at)
                if value.is_char_boundary(at)
                    && value[at..].eq_ignore_ascii_case(OR_ABOVE) =>
            {
                let level = value[..at].trim();
                if level.is_empty() {
                    Self::Exactly(value.to_string())
                } else {
                    Self::OrAbove(level.to_string())
                }
            }
            _ => Self::Exactly(value.to_string()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<&str> for EducationPreference {
    fn from(value: &str) -> Self {
        Self::parse(Some(value))
    }
}

impl<'de> Deserialize<'de> for EducationPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_deref()))
    }
}

impl Serialize for EducationPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Any => serializer.serialize_str(ANY),
            Self::OrAbove(level) => serializer.collect_str(&format_args!("{level}{OR_ABOVE}")),
            Self::Exactly(value) => serializer.serialize_str(value),
        }
    }
}

/// Multi-valued partner preference (location, cast, maslak, ...)
///
/// The intake forms send these as string arrays mixing catalog values with
/// the "Any" and "Same ..." sentinels. Parsing folds the sentinels into
/// variants so comparators never look at magic strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SetPreference {
    #[default]
    Unset,
    /// Fully permissive; any other entries alongside it are redundant
    Any,
    OneOf {
        /// Accepted literal values, original casing, no duplicates
        values: Vec<String>,
        /// Also accept candidates sharing the subject's own value
        same_as_subject: bool,
    },
}

impl SetPreference {
    pub fn from_values<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: Vec<String> = Vec::new();
        let mut same_as_subject = false;

        for value in raw {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            if is_any_sentinel(value) {
                return Self::Any;
            }
            if is_same_sentinel(value) {
                same_as_subject = true;
            } else if !values.iter().any(|v| values_match(v, value)) {
                values.push(value.to_string());
            }
        }

        if values.is_empty() && !same_as_subject {
            Self::Unset
        } else {
            Self::OneOf {
                values,
                same_as_subject,
            }
        }
    }

    /// Only the subject's own value is acceptable
    pub fn same_as_subject() -> Self {
        Self::OneOf {
            values: Vec::new(),
            same_as_subject: true,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<'de> Deserialize<'de> for SetPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older records store a single string instead of an array
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Self::Unset,
            Some(Raw::One(value)) => Self::from_values([value]),
            Some(Raw::Many(values)) => Self::from_values(values),
        })
    }
}

impl Serialize for SetPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<&str> = match self {
            Self::Unset => Vec::new(),
            Self::Any => vec![ANY],
            Self::OneOf {
                values,
                same_as_subject,
            } => {
                let mut out: Vec<&str> = values.iter().map(String::as_str).collect();
                if *same_as_subject {
                    out.push(SAME);
                }
                out
            }
        };
        values.serialize(serializer)
    }
}
