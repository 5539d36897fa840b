//! Option exercise style definitions.

use std::fmt;
use std::str::FromStr;

/// Option exercise style.
///
/// The only behavioural difference between the two styles is the
/// early-exercise floor applied at every node of a backward induction.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// assert_eq!("american".parse::<ExerciseStyle>().unwrap(), ExerciseStyle::American);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    #[default]
    European,
    /// Exercise at any time up to expiry.
    American,
}

impl ExerciseStyle {
    /// Whether the holder may exercise before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}

impl FromStr for ExerciseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" => Ok(ExerciseStyle::European),
            "american" => Ok(ExerciseStyle::American),
            _ => Err(format!("Unknown exercise style: {}", s)),
        }
    }
}

impl TryFrom<String> for ExerciseStyle {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        for style in [ExerciseStyle::European, ExerciseStyle::American] {
            assert_eq!(style.to_string().parse::<ExerciseStyle>().unwrap(), style);
        }
        assert!("Bermudan".parse::<ExerciseStyle>().is_err());
    }

    #[test]
    fn test_default_is_european() {
        assert_eq!(ExerciseStyle::default(), ExerciseStyle::European);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_ignores_case() {
        let parsed: ExerciseStyle = serde_json::from_str(r#""EUROPEAN""#).unwrap();
        assert_eq!(parsed, ExerciseStyle::European);
        let parsed: ExerciseStyle = serde_json::from_str(r#""american""#).unwrap();
        assert_eq!(parsed, ExerciseStyle::American);
        assert_eq!(serde_json::to_string(&ExerciseStyle::European).unwrap(), r#""European""#);
        assert!(serde_json::from_str::<ExerciseStyle>(r#""Binary""#).is_err());
    }
}
