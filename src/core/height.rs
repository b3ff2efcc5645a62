use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const INCHES_PER_FOOT: u16 = 12;

/// Tallest feet value the intake forms can produce
const MAX_FEET: u16 = 8;

/// Errors from decoding a feet.inches height string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeightParseError {
    #[error("empty height")]
    Empty,

    #[error("malformed height: {0:?}")]
    Malformed(String),

    #[error("inches out of range in {0:?}")]
    InchesOutOfRange(String),
}

/// A height normalised to total inches
///
/// The intake forms encode heights as `feet.inches` strings where the part
/// after the dot is a whole number of inches, so "5.10" is five foot ten and
/// sits above "5.9". Decimal comparison of those strings is wrong; compare
/// `Height` values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u16);

impl Height {
    pub fn from_feet_inches(feet: u16, inches: u16) -> Self {
        Self(feet * INCHES_PER_FOOT + inches)
    }

    pub fn total_inches(self) -> u16 {
        self.0
    }

    pub fn feet(self) -> u16 {
        self.0 / INCHES_PER_FOOT
    }

    pub fn inches(self) -> u16 {
        self.0 % INCHES_PER_FOOT
    }
}

impl FromStr for Height {
    type Err = HeightParseError;

    /// Accepts "5.10", "5", "5'10" and "5'10\""
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().trim_end_matches('"');
        if value.is_empty() {
            return Err(HeightParseError::Empty);
        }

        let (feet, inches) = match value.split_once(['.', '\'']) {
            Some((feet, inches)) => (feet.trim(), inches.trim()),
            None => (value, ""),
        };

        let feet: u16 = parse_digits(feet).ok_or_else(|| HeightParseError::Malformed(raw.to_string()))?;
        let inches: u16 = if inches.is_empty() {
            0
        } else {
            parse_digits(inches).ok_or_else(|| HeightParseError::Malformed(raw.to_string()))?
        };

        if feet == 0 || feet > MAX_FEET {
            return Err(HeightParseError::Malformed(raw.to_string()));
        }
        if inches >= INCHES_PER_FOOT {
            return Err(HeightParseError::InchesOutOfRange(raw.to_string()));
        }

        Ok(Self::from_feet_inches(feet, inches))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.feet(), self.inches())
    }
}

/// Plain ASCII digits only; rejects signs, spaces and empty input
fn parse_digits(value: &str) -> Option<u16> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Check if a height falls inside inclusive optional bounds
#[inline]
pub fn is_within_height_range(height: Height, min: Option<Height>, max: Option<Height>) -> bool {
    min.map_or(true, |min| height >= min) && max.map_or(true, |max| height <= max)
}
