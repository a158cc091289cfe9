//! Static ECOG Performance Status reference table.
//!
//! The table is fixed at build time: six entries, one per score from 0 to 5, in ascending
//! order. Nothing in the crate mutates it, so it is shared freely across threads.
//!
//! [`EcogScore`] is the validated form of a score. Once constructed it is guaranteed to index
//! the table, which keeps the range check at the boundary where raw input arrives.

use crate::constants::{MAX_SCORE, MIN_SCORE, SCORE_SEPARATOR};
use crate::error::{EcogError, EcogResult};
use std::fmt;
use std::str::FromStr;

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDefinition {
    pub score: u8,
    pub description: &'static str,
}

impl ScoreDefinition {
    /// Display label used for selection lists, e.g. `"0 – Fully active, ..."`.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.score, SCORE_SEPARATOR, self.description)
    }
}

/// The ECOG Performance Status definitions, ordered by score.
pub static ECOG_DEFINITIONS: [ScoreDefinition; 6] = [
    ScoreDefinition {
        score: 0,
        description: "Fully active, able to carry on all pre-disease performance without restriction.",
    },
    ScoreDefinition {
        score: 1,
        description: "Restricted in physically strenuous activity but ambulatory and able to carry out work of a light or sedentary nature (e.g., light housework, office work).",
    },
    ScoreDefinition {
        score: 2,
        description: "Ambulatory and capable of all self-care but unable to carry out any work activities; up and about more than 50% of waking hours.",
    },
    ScoreDefinition {
        score: 3,
        description: "Capable of only limited self-care; confined to bed or chair more than 50% of waking hours.",
    },
    ScoreDefinition {
        score: 4,
        description: "Completely disabled; cannot carry on any self-care; totally confined to bed or chair.",
    },
    ScoreDefinition {
        score: 5,
        description: "Dead.",
    },
];

/// Returns every definition in ascending score order.
pub fn definitions() -> &'static [ScoreDefinition] {
    &ECOG_DEFINITIONS
}

/// Looks up the fixed description for `score`.
///
/// # Errors
///
/// Returns [`EcogError::OutOfRange`] if `score` is not between 0 and 5 inclusive.
pub fn get_description(score: i64) -> EcogResult<&'static str> {
    EcogScore::new(score).map(EcogScore::description)
}

/// A score guaranteed to be on the ECOG scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EcogScore(u8);

impl EcogScore {
    /// Validates `value` against the scale.
    ///
    /// # Errors
    ///
    /// Returns [`EcogError::OutOfRange`] for anything outside 0 to 5.
    pub fn new(value: i64) -> EcogResult<Self> {
        if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            tracing::warn!(score = value, "rejected out-of-range ECOG score");
            Err(EcogError::OutOfRange { score: value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn definition(self) -> &'static ScoreDefinition {
        &ECOG_DEFINITIONS[usize::from(self.0)]
    }

    pub fn description(self) -> &'static str {
        self.definition().description
    }

    /// All six scores in ascending order.
    pub fn all() -> impl Iterator<Item = EcogScore> {
        (MIN_SCORE..=MAX_SCORE).map(EcogScore)
    }
}

impl TryFrom<i64> for EcogScore {
    type Error = EcogError;

    fn try_from(value: i64) -> EcogResult<Self> {
        Self::new(value)
    }
}

impl From<EcogScore> for u8 {
    fn from(score: EcogScore) -> Self {
        score.0
    }
}

impl FromStr for EcogScore {
    type Err = EcogError;

    /// Parses a bare decimal integer. Labels such as `"2 – Ambulatory..."` are rejected; callers
    /// carry the integer itself rather than display text.
    fn from_str(s: &str) -> EcogResult<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| EcogError::InvalidScore(trimmed.to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for EcogScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for EcogScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EcogScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        EcogScore::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_score_once_in_order() {
        let scores: Vec<u8> = ECOG_DEFINITIONS.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![0, 1, 2, 3, 4, 5]);
        assert!(ECOG_DEFINITIONS.iter().all(|d| !d.description.is_empty()));
    }

    #[test]
    fn test_get_description_returns_fixed_text() {
        assert_eq!(
            get_description(0).unwrap(),
            "Fully active, able to carry on all pre-disease performance without restriction."
        );
        assert_eq!(
            get_description(3).unwrap(),
            "Capable of only limited self-care; confined to bed or chair more than 50% of waking hours."
        );
        assert_eq!(get_description(5).unwrap(), "Dead.");
    }

    #[test]
    fn test_get_description_is_stable_for_all_scores() {
        for definition in definitions() {
            let first = get_description(i64::from(definition.score)).unwrap();
            let second = get_description(i64::from(definition.score)).unwrap();
            assert_eq!(first, definition.description);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_get_description_rejects_out_of_range() {
        assert_eq!(
            get_description(6).unwrap_err(),
            EcogError::OutOfRange { score: 6 }
        );
        assert_eq!(
            get_description(-1).unwrap_err(),
            EcogError::OutOfRange { score: -1 }
        );
        assert!(matches!(
            get_description(i64::MAX),
            Err(EcogError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_label_uses_en_dash_separator() {
        assert_eq!(EcogScore::new(5).unwrap().definition().label(), "5 – Dead.");
    }

    #[test]
    fn test_from_str_accepts_integers_only() {
        assert_eq!(" 4 ".parse::<EcogScore>().unwrap().value(), 4);
        assert!(matches!(
            "2 – Ambulatory".parse::<EcogScore>(),
            Err(EcogError::InvalidScore(_))
        ));
        assert!(matches!(
            "9".parse::<EcogScore>(),
            Err(EcogError::OutOfRange { score: 9 })
        ));
    }

    #[test]
    fn test_default_score_is_zero() {
        assert_eq!(EcogScore::default().value(), 0);
        assert_eq!(EcogScore::all().count(), 6);
    }

    #[test]
    fn test_serde_validates_range() {
        let score: EcogScore = serde_json::from_str("3").unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "3");
        assert!(serde_json::from_str::<EcogScore>("7").is_err());
    }
}
