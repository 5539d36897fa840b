//! Vanilla option definition.

use pricer_core::types::Maturity;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::payoff::OptionType;
use super::underlying::Underlying;

/// Vanilla equity option on a single underlying.
///
/// Immutable; fully describes one pricing instrument.
///
/// # Examples
/// ```
/// use pricer_core::types::Maturity;
/// use pricer_models::instruments::{ExerciseStyle, OptionType, Underlying, VanillaOption};
///
/// let stock = Underlying::new("ACME", 110.0, 0.2, 0.01).unwrap();
/// let call = VanillaOption::new(
///     ExerciseStyle::European,
///     OptionType::Call,
///     100.0,
///     Maturity::parse("1Y").unwrap(),
///     stock,
/// )
/// .unwrap();
///
/// assert_eq!(call.intrinsic_value(), 10.0);
/// assert_eq!(call.year_fraction(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "serde_impl::VanillaOptionFields")
)]
pub struct VanillaOption {
    option_style: ExerciseStyle,
    option_type: OptionType,
    strike: f64,
    maturity: Maturity,
    underlying: Underlying,
}

impl VanillaOption {
    /// Creates a validated vanilla option.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` if the strike is not a positive finite number.
    pub fn new(
        option_style: ExerciseStyle,
        option_type: OptionType,
        strike: f64,
        maturity: Maturity,
        underlying: Underlying,
    ) -> Result<Self, InstrumentError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            option_style,
            option_type,
            strike,
            maturity,
            underlying,
        })
    }

    /// Returns the exercise style.
    #[inline]
    pub fn option_style(&self) -> ExerciseStyle {
        self.option_style
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the maturity.
    #[inline]
    pub fn maturity(&self) -> Maturity {
        self.maturity
    }

    /// Returns the underlying.
    #[inline]
    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    /// Time to expiry in years.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.maturity.to_year_fraction()
    }

    /// Value of exercising now at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type
            .intrinsic(self.underlying.spot_price(), self.strike)
    }

    /// Returns a copy with a different underlying, keeping the contract terms.
    pub fn with_underlying(&self, underlying: Underlying) -> Self {
        Self {
            underlying,
            ..self.clone()
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct VanillaOptionFields {
        #[serde(alias = "style")]
        option_style: ExerciseStyle,
        #[serde(alias = "type")]
        option_type: OptionType,
        strike: f64,
        maturity: Maturity,
        underlying: Underlying,
    }

    impl TryFrom<VanillaOptionFields> for VanillaOption {
        type Error = InstrumentError;

        fn try_from(fields: VanillaOptionFields) -> Result<Self, Self::Error> {
            VanillaOption::new(
                fields.option_style,
                fields.option_type,
                fields.strike,
                fields.maturity,
                fields.underlying,
            )
        }
    }
}
