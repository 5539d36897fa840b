//! Equity underlying definition.

use super::error::InstrumentError;

/// A dividend-paying equity under lognormal diffusion.
///
/// # Invariants
/// - `spot_price > 0`
/// - `annual_volatility >= 0`
/// - `annual_dividend_yield >= 0`
///
/// All values are finite. Immutable after construction.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Underlying;
///
/// let stock = Underlying::new("ACME", 100.0, 0.2, 0.01).unwrap();
/// assert_eq!(stock.spot_price(), 100.0);
/// assert!(Underlying::new("ACME", -1.0, 0.2, 0.01).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "serde_impl::UnderlyingFields")
)]
pub struct Underlying {
    name: String,
    spot_price: f64,
    annual_volatility: f64,
    annual_dividend_yield: f64,
}

impl Underlying {
    /// Creates a validated underlying.
    ///
    /// # Arguments
    /// * `name` - Display name or ticker
    /// * `spot_price` - Current spot price (must be positive)
    /// * `annual_volatility` - Annualised volatility (must be non-negative)
    /// * `annual_dividend_yield` - Continuous dividend yield (must be non-negative)
    ///
    /// # Errors
    /// The `InstrumentError` variant naming the first invalid field.
    pub fn new(
        name: impl Into<String>,
        spot_price: f64,
        annual_volatility: f64,
        annual_dividend_yield: f64,
    ) -> Result<Self, InstrumentError> {
        if !(spot_price.is_finite() && spot_price > 0.0) {
            return Err(InstrumentError::InvalidSpot { spot: spot_price });
        }
        if !(annual_volatility.is_finite() && annual_volatility >= 0.0) {
            return Err(InstrumentError::InvalidVolatility {
                volatility: annual_volatility,
            });
        }
        if !(annual_dividend_yield.is_finite() && annual_dividend_yield >= 0.0) {
            return Err(InstrumentError::InvalidDividendYield {
                dividend_yield: annual_dividend_yield,
            });
        }

        Ok(Self {
            name: name.into(),
            spot_price,
            annual_volatility,
            annual_dividend_yield,
        })
    }

    /// Returns the name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the annual volatility.
    #[inline]
    pub fn annual_volatility(&self) -> f64 {
        self.annual_volatility
    }

    /// Returns the continuous annual dividend yield.
    #[inline]
    pub fn annual_dividend_yield(&self) -> f64 {
        self.annual_dividend_yield
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{InstrumentError, Underlying};

    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct UnderlyingFields {
        #[serde(default)]
        name: String,
        spot_price: f64,
        annual_volatility: f64,
        #[serde(default)]
        annual_dividend_yield: f64,
    }

    impl TryFrom<UnderlyingFields> for Underlying {
        type Error = InstrumentError;

        fn try_from(fields: UnderlyingFields) -> Result<Self, Self::Error> {
            Underlying::new(
                fields.name,
                fields.spot_price,
                fields.annual_volatility,
                fields.annual_dividend_yield,
            )
        }
    }
}
