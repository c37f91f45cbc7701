//! Score value object for the 0–10 satisfaction scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single category rating: 0 (not at all satisfied) to 10 (fully satisfied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Creates a Score, returning error if outside 0..=10.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "score",
                Self::MIN as i64,
                Self::MAX as i64,
                value,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the full scale, 0.0..=1.0. Used for radial chart placement.
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }

    /// Every position on the scale, in ascending order.
    pub fn all() -> impl Iterator<Item = Score> {
        (Self::MIN..=Self::MAX).map(Score)
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_every_value_on_the_scale() {
        for v in 0..=10 {
            assert_eq!(Score::new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn score_rejects_values_off_the_scale() {
        assert!(Score::new(-1).is_err());
        assert!(Score::new(11).is_err());
        assert!(Score::new(255).is_err());
    }

    #[test]
    fn all_yields_eleven_positions() {
        let all: Vec<u8> = Score::all().map(|s| s.value()).collect();
        assert_eq!(all, (0..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn fraction_spans_unit_interval() {
        assert_eq!(Score::new(0).unwrap().fraction(), 0.0);
        assert_eq!(Score::new(5).unwrap().fraction(), 0.5);
        assert_eq!(Score::new(10).unwrap().fraction(), 1.0);
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let json = serde_json::to_string(&Score::new(7).unwrap()).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn score_deserialization_validates_range() {
        let ok: Score = serde_json::from_str("3").unwrap();
        assert_eq!(ok.value(), 3);
        assert!(serde_json::from_str::<Score>("12").is_err());
        assert!(serde_json::from_str::<Score>("-2").is_err());
    }
}
