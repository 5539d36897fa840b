//! Maturity types for option contracts.
//!
//! This module provides:
//! - `TenorUnit`: Day, week, month and year units
//! - `Maturity`: An immutable `(length, unit)` pair parsed from tenor text
//!
//! ## Tenor syntax
//!
//! A tenor is an unsigned integer length followed by a unit code
//! (`D`, `W`, `M`, `Y`, case-insensitive), e.g. `"1D"`, `"6M"`, `"10y"`.
//! Two literals are special-cased before generic parsing:
//! - `"ON"` (overnight) is one day
//! - `"12M"` is canonicalised to one year
//!
//! ## Year fractions
//!
//! All conversions use a 365-day year with 30-day months and are computed
//! in floating point, so sub-year tenors never truncate to zero.

use std::fmt;
use std::str::FromStr;

use super::error::MaturityError;

/// Days per year used by every year-fraction conversion.
const DAYS_PER_YEAR: f64 = 365.0;

/// Unit of a tenor.
///
/// # Examples
/// ```
/// use pricer_core::types::TenorUnit;
///
/// assert_eq!(TenorUnit::Month.code(), "M");
/// assert_eq!(TenorUnit::Week.days(), 7);
/// assert_eq!("y".parse::<TenorUnit>().unwrap(), TenorUnit::Year);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenorUnit {
    /// Calendar day
    Day,
    /// Seven days
    Week,
    /// Thirty days
    Month,
    /// 365 days
    Year,
}

impl TenorUnit {
    /// Returns the single-letter unit code.
    pub fn code(&self) -> &'static str {
        match self {
            TenorUnit::Day => "D",
            TenorUnit::Week => "W",
            TenorUnit::Month => "M",
            TenorUnit::Year => "Y",
        }
    }

    /// Returns the number of days in one unit.
    pub fn days(&self) -> u32 {
        match self {
            TenorUnit::Day => 1,
            TenorUnit::Week => 7,
            TenorUnit::Month => 30,
            TenorUnit::Year => 365,
        }
    }

    /// Looks up a unit from its upper-case code.
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" => Some(TenorUnit::Day),
            "W" => Some(TenorUnit::Week),
            "M" => Some(TenorUnit::Month),
            "Y" => Some(TenorUnit::Year),
            _ => None,
        }
    }
}

impl FromStr for TenorUnit {
    type Err = MaturityError;

    /// Parses a unit from its code or full name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::from_code(&upper)
            .or(match upper.as_str() {
                "DAY" => Some(TenorUnit::Day),
                "WEEK" => Some(TenorUnit::Week),
                "MONTH" => Some(TenorUnit::Month),
                "YEAR" => Some(TenorUnit::Year),
                _ => None,
            })
            .ok_or_else(|| MaturityError::Unparseable(s.to_string()))
    }
}

impl fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Time to expiry of an option expressed as a tenor.
///
/// Immutable after construction; the length is always at least one.
///
/// # Examples
/// ```
/// use pricer_core::types::{Maturity, TenorUnit};
///
/// let one_year = Maturity::parse("12M").unwrap();
/// assert_eq!(one_year, Maturity::new(1, TenorUnit::Year).unwrap());
/// assert_eq!(one_year.to_year_fraction(), 1.0);
///
/// let overnight = Maturity::parse("ON").unwrap();
/// assert_eq!(overnight.unit(), TenorUnit::Day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maturity {
    length: u32,
    unit: TenorUnit,
}

impl Maturity {
    /// Creates a maturity from its parts.
    ///
    /// # Errors
    /// `MaturityError::InvalidLength` if `length` is zero.
    pub fn new(length: u32, unit: TenorUnit) -> Result<Self, MaturityError> {
        if length == 0 {
            return Err(MaturityError::InvalidLength(length));
        }
        Ok(Self { length, unit })
    }

    /// Parses tenor text such as `"1W"`, `"6m"`, `"ON"`.
    ///
    /// All digit characters form the length and all remaining characters,
    /// upper-cased, form the unit code.
    ///
    /// # Errors
    /// - `MaturityError::Empty` for empty text
    /// - `MaturityError::Unparseable` when the length or unit is missing or unknown
    /// - `MaturityError::InvalidLength` for a zero length
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{Maturity, MaturityError};
    ///
    /// assert_eq!(Maturity::parse(""), Err(MaturityError::Empty));
    /// assert!(matches!(Maturity::parse("Y"), Err(MaturityError::Unparseable(_))));
    /// assert!(matches!(Maturity::parse("12"), Err(MaturityError::Unparseable(_))));
    /// ```
    pub fn parse(text: &str) -> Result<Self, MaturityError> {
        if text.is_empty() {
            return Err(MaturityError::Empty);
        }

        let length: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let code: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect::<String>()
            .to_uppercase();

        if code == "ON" {
            return Self::new(1, TenorUnit::Day);
        }

        if length == "12" && code == "M" {
            return Self::new(1, TenorUnit::Year);
        }

        let unparseable = || MaturityError::Unparseable(text.to_string());
        let length: u32 = length.parse().map_err(|_| unparseable())?;
        let unit = TenorUnit::from_code(&code).ok_or_else(unparseable)?;

        Self::new(length, unit)
    }

    /// Returns the number of units.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the tenor unit.
    #[inline]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Converts the maturity to a fraction of a 365-day year.
    ///
    /// | Unit  | Year fraction      |
    /// |-------|--------------------|
    /// | Day   | `length / 365`     |
    /// | Week  | `length * 7 / 365` |
    /// | Month | `length * 30 / 365`|
    /// | Year  | `length`           |
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::Maturity;
    ///
    /// let six_months = Maturity::parse("6M").unwrap();
    /// assert!((six_months.to_year_fraction() - 0.493150684).abs() < 1e-9);
    /// ```
    pub fn to_year_fraction(&self) -> f64 {
        let length = f64::from(self.length);
        match self.unit {
            TenorUnit::Day => length / DAYS_PER_YEAR,
            TenorUnit::Week => length * 7.0 / DAYS_PER_YEAR,
            TenorUnit::Month => length * 30.0 / DAYS_PER_YEAR,
            TenorUnit::Year => length,
        }
    }

    /// Length in days, without the `u32` bound of `to_days`.
    pub fn total_days(&self) -> u64 {
        u64::from(self.length) * u64::from(self.unit.days())
    }

    /// Re-expresses the maturity in days.
    ///
    /// # Errors
    /// `MaturityError::Overflow` if the day count exceeds `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{Maturity, TenorUnit};
    ///
    /// let days = Maturity::parse("2W").unwrap().to_days().unwrap();
    /// assert_eq!(days, Maturity::new(14, TenorUnit::Day).unwrap());
    /// ```
    pub fn to_days(&self) -> Result<Self, MaturityError> {
        let days = self
            .length
            .checked_mul(self.unit.days())
            .ok_or_else(|| MaturityError::Overflow(self.to_string()))?;
        Self::new(days, TenorUnit::Day)
    }
}

impl FromStr for Maturity {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Maturity, TenorUnit};
    use serde::ser::SerializeStruct;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for TenorUnit {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for TenorUnit {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            TenorUnit::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for Maturity {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Maturity", 2)?;
            state.serialize_field("length", &self.length)?;
            state.serialize_field("unit", &self.unit)?;
            state.end()
        }
    }

    /// Either tenor text (`"6M"`) or explicit parts.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaturityRepr {
        Text(String),
        Parts {
            length: u32,
            #[serde(alias = "period")]
            unit: TenorUnit,
        },
    }

    impl<'de> Deserialize<'de> for Maturity {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            match MaturityRepr::deserialize(deserializer)? {
                MaturityRepr::Text(text) => Maturity::parse(&text),
                MaturityRepr::Parts { length, unit } => Maturity::new(length, unit),
            }
            .map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_parses(text: &str, length: u32, unit: TenorUnit) {
        let maturity = Maturity::parse(text).unwrap();
        assert_eq!(maturity.length(), length, "length of {text}");
        assert_eq!(maturity.unit(), unit, "unit of {text}");
    }

    #[test]
    fn test_parse_standard_tenors() {
        assert_parses("ON", 1, TenorUnit::Day);
        assert_parses("1D", 1, TenorUnit::Day);
        assert_parses("1W", 1, TenorUnit::Week);
        assert_parses("1M", 1, TenorUnit::Month);
        assert_parses("6M", 6, TenorUnit::Month);
        assert_parses("12M", 1, TenorUnit::Year);
        assert_parses("1Y", 1, TenorUnit::Year);
        assert_parses("1y", 1, TenorUnit::Year);
        assert_parses("10y", 10, TenorUnit::Year);
    }

    #[test]
    fn test_parse_overnight_ignores_digits() {
        assert_parses("on", 1, TenorUnit::Day);
        assert_parses("3ON", 1, TenorUnit::Day);
    }

    #[test]
    fn test_parse_eighteen_months_not_canonicalised() {
        assert_parses("18M", 18, TenorUnit::Month);
        assert_parses("24m", 24, TenorUnit::Month);
    }

    #[test]
    fn test_parse_empty_is_validation_failure() {
        assert_eq!(Maturity::parse(""), Err(MaturityError::Empty));
    }

    #[test]
    fn test_parse_missing_length() {
        assert_eq!(
            Maturity::parse("Y"),
            Err(MaturityError::Unparseable("Y".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_unit() {
        assert_eq!(
            Maturity::parse("12"),
            Err(MaturityError::Unparseable("12".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert!(matches!(
            Maturity::parse("3Q"),
            Err(MaturityError::Unparseable(_))
        ));
        assert!(matches!(
            Maturity::parse("1 Y"),
            Err(MaturityError::Unparseable(_))
        ));
    }

    #[test]
    fn test_parse_zero_length() {
        assert_eq!(Maturity::parse("0D"), Err(MaturityError::InvalidLength(0)));
    }

    #[test]
    fn test_parse_length_overflow() {
        assert!(matches!(
            Maturity::parse("99999999999D"),
            Err(MaturityError::Unparseable(_))
        ));
    }

    #[test]
    fn test_year_fraction() {
        assert_eq!(Maturity::parse("1Y").unwrap().to_year_fraction(), 1.0);
        assert_eq!(Maturity::parse("10Y").unwrap().to_year_fraction(), 10.0);
        assert_relative_eq!(
            Maturity::parse("6M").unwrap().to_year_fraction(),
            0.493_150_684_931_506_8,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            Maturity::parse("1W").unwrap().to_year_fraction(),
            7.0 / 365.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            Maturity::parse("ON").unwrap().to_year_fraction(),
            1.0 / 365.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_sub_year_fractions_do_not_truncate() {
        for text in ["1D", "1W", "1M", "11M"] {
            let yf = Maturity::parse(text).unwrap().to_year_fraction();
            assert!(yf > 0.0 && yf < 1.0, "{text} -> {yf}");
        }
    }

    #[test]
    fn test_to_days() {
        let cases = [("3D", 3), ("2W", 14), ("6M", 180), ("2Y", 730)];
        for (text, days) in cases {
            let converted = Maturity::parse(text).unwrap().to_days().unwrap();
            assert_eq!(converted.unit(), TenorUnit::Day);
            assert_eq!(converted.length(), days, "{text}");
        }
    }

    #[test]
    fn test_to_days_overflow() {
        let maturity = Maturity::new(u32::MAX, TenorUnit::Year).unwrap();
        assert_eq!(maturity.total_days(), u64::from(u32::MAX) * 365);
        assert!(matches!(maturity.to_days(), Err(MaturityError::Overflow(_))));
    }

    #[test]
    fn test_new_rejects_zero_length() {
        assert_eq!(
            Maturity::new(0, TenorUnit::Month),
            Err(MaturityError::InvalidLength(0))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Maturity::parse("6m").unwrap().to_string(), "6M");
        assert_eq!(Maturity::parse("12M").unwrap().to_string(), "1Y");
        assert_eq!(Maturity::parse("ON").unwrap().to_string(), "1D");
    }

    #[test]
    fn test_tenor_unit_from_str() {
        assert_eq!(TenorUnit::from_str("d").unwrap(), TenorUnit::Day);
        assert_eq!(TenorUnit::from_str("Week").unwrap(), TenorUnit::Week);
        assert_eq!(TenorUnit::from_str("MONTH").unwrap(), TenorUnit::Month);
        assert!(TenorUnit::from_str("Q").is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serialize_as_parts() {
            let json = serde_json::to_string(&Maturity::parse("6M").unwrap()).unwrap();
            assert_eq!(json, r#"{"length":6,"unit":"M"}"#);
        }

        #[test]
        fn test_deserialize_from_text() {
            let maturity: Maturity = serde_json::from_str(r#""12m""#).unwrap();
            assert_eq!(maturity, Maturity::new(1, TenorUnit::Year).unwrap());
        }

        #[test]
        fn test_deserialize_from_parts() {
            let maturity: Maturity =
                serde_json::from_str(r#"{"length":2,"unit":"W"}"#).unwrap();
            assert_eq!(maturity, Maturity::new(2, TenorUnit::Week).unwrap());
        }

        #[test]
        fn test_deserialize_period_alias() {
            let maturity: Maturity =
                serde_json::from_str(r#"{"length":3,"period":"D"}"#).unwrap();
            assert_eq!(maturity, Maturity::new(3, TenorUnit::Day).unwrap());
        }

        #[test]
        fn test_deserialize_rejects_invalid() {
            assert!(serde_json::from_str::<Maturity>(r#""""#).is_err());
            assert!(serde_json::from_str::<Maturity>(r#""Y""#).is_err());
            assert!(serde_json::from_str::<Maturity>(r#"{"length":0,"unit":"D"}"#).is_err());
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn unit_strategy() -> impl Strategy<Value = TenorUnit> {
            prop_oneof![
                Just(TenorUnit::Day),
                Just(TenorUnit::Week),
                Just(TenorUnit::Month),
                Just(TenorUnit::Year),
            ]
        }

        proptest! {
            #[test]
            fn test_year_fraction_positive(length in 1u32..100_000, unit in unit_strategy()) {
                let maturity = Maturity::new(length, unit).unwrap();
                prop_assert!(maturity.to_year_fraction() > 0.0);
            }

            #[test]
            fn test_display_parse_roundtrip(length in 1u32..100_000, unit in unit_strategy()) {
                prop_assume!(!(length == 12 && unit == TenorUnit::Month));
                let maturity = Maturity::new(length, unit).unwrap();
                prop_assert_eq!(Maturity::parse(&maturity.to_string()).unwrap(), maturity);
            }

            #[test]
            fn test_to_days_preserves_year_fraction(length in 1u32..10_000, unit in unit_strategy()) {
                let maturity = Maturity::new(length, unit).unwrap();
                let days = maturity.to_days().unwrap();
                prop_assert!((days.to_year_fraction() - maturity.to_year_fraction()).abs() < 1e-9);
            }
        }
    }
}
