//! Pricing engines for vanilla options.
//!
//! - [`analytic`]: Closed-form Black-Scholes-Merton (European only)
//! - [`binomial`]: Cox-Ross-Rubinstein tree with early-exercise floor
//! - [`finite_difference`]: Explicit scheme on a log-price grid
//! - [`bump`]: Bump-and-reprice policy shared by the tree and grid engines
//!
//! The tree and grid engines share one backward-induction routine per method;
//! `ExerciseStyle` only switches the `max(intrinsic, continuation)` floor on or off.

pub mod analytic;
pub mod binomial;
pub mod bump;
pub mod finite_difference;

pub use analytic::AnalyticPricer;
pub use binomial::{BinomialTree, BinomialTreePricer};
pub use bump::BumpPolicy;
pub use finite_difference::{FiniteDifferenceGrid, FiniteDifferencePricer};

use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};

/// Flat numeric inputs of a lattice or grid build.
///
/// Bump-and-reprice passes copy these and perturb one field, so the rate
/// provider is never consulted again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// Spot price S
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Year fraction T
    pub expiry: f64,
    /// Risk-free rate r
    pub rate: f64,
    /// Volatility σ
    pub volatility: f64,
    /// Dividend yield q
    pub dividend_yield: f64,
    /// Call or put
    pub option_type: OptionType,
    /// European or American
    pub style: ExerciseStyle,
}

impl ModelInputs {
    /// Extracts the inputs of `option` priced at `rate`.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if the volatility is not positive.
    pub fn from_option(option: &VanillaOption, rate: f64) -> Result<Self, PricingError> {
        let underlying = option.underlying();
        let volatility = underlying.annual_volatility();
        if volatility <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "Volatility must be positive for numerical pricing, got {}",
                volatility
            )));
        }

        Ok(Self {
            spot: underlying.spot_price(),
            strike: option.strike(),
            expiry: option.year_fraction(),
            rate,
            volatility,
            dividend_yield: underlying.annual_dividend_yield(),
            option_type: option.option_type(),
            style: option.option_style(),
        })
    }

    /// Direction multiplier m.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.option_type.multiplier()
    }

    /// Exercise value `m * (price - K)` at an underlying level, not floored at zero.
    #[inline]
    pub(crate) fn exercise_value(&self, price: f64) -> f64 {
        self.multiplier() * (price - self.strike)
    }

    /// Copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Copy with a different rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }
}
