//! Option type (call or put) and its payoff direction.

use std::fmt;
use std::str::FromStr;

/// Option type.
///
/// Every pricing formula is written once in terms of the direction
/// multiplier `m`: +1 for a call, -1 for a put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.multiplier(), 1.0);
/// assert_eq!(OptionType::Put.multiplier(), -1.0);
/// assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
/// assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Direction multiplier: +1 for a call, -1 for a put.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Immediate-exercise value `max(m * (spot - strike), 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.multiplier() * (spot - strike)).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(format!("Unknown option type: {}", s)),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_never_negative() {
        for spot in [0.0, 50.0, 100.0, 150.0] {
            assert!(OptionType::Call.intrinsic(spot, 100.0) >= 0.0);
            assert!(OptionType::Put.intrinsic(spot, 100.0) >= 0.0);
        }
        assert_eq!(OptionType::Call.intrinsic(150.0, 100.0), 50.0);
        assert_eq!(OptionType::Put.intrinsic(150.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert!("straddle".parse::<OptionType>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_ignores_case() {
        let parsed: OptionType = serde_json::from_str(r#""CALL""#).unwrap();
        assert_eq!(parsed, OptionType::Call);
        let parsed: OptionType = serde_json::from_str(r#""put""#).unwrap();
        assert_eq!(parsed, OptionType::Put);
        assert_eq!(serde_json::to_string(&OptionType::Call).unwrap(), r#""Call""#);
        assert!(serde_json::from_str::<OptionType>(r#""Binary""#).is_err());
    }
}
