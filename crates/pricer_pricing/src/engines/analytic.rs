//! Closed-form engine for European options.

use pricer_core::market_data::RateProvider;
use pricer_core::types::PricingError;
use pricer_models::analytical::{AnalyticalError, BlackScholes};
use pricer_models::instruments::VanillaOption;
use tracing::debug;

use crate::config::PricingConfiguration;
use crate::result::PricingResult;

/// Black-Scholes-Merton pricer with closed-form Greeks.
///
/// Rejects American options with `PricingError::InvalidOperation` before
/// querying the rate provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticPricer;

impl AnalyticPricer {
    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }

    /// Prices `option`, computing Greeks when `config.compute_greeks` is set.
    ///
    /// # Errors
    /// - `PricingError::InvalidOperation` for American options
    /// - `PricingError::InvalidInput` for zero volatility
    pub fn price<R>(
        &self,
        config: &PricingConfiguration,
        option: &VanillaOption,
        rates: &R,
    ) -> Result<PricingResult, PricingError>
    where
        R: RateProvider + ?Sized,
    {
        if option.option_style().allows_early_exercise() {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.option_style().to_string(),
            }
            .into());
        }

        let rate = rates.annual_risk_free_rate();
        let model = BlackScholes::for_option(option, rate)?;
        let expiry = option.year_fraction();
        let strike = option.strike();

        debug!(
            rate,
            expiry,
            d1 = model.d1(strike, expiry),
            "analytic pricing"
        );

        if !config.compute_greeks {
            return Ok(PricingResult::present_value_only(model.price(
                option.option_type(),
                strike,
                expiry,
            )));
        }

        let (pv, g) = model.price_and_greeks(option.option_type(), strike, expiry);
        Ok(PricingResult::with_greeks(
            pv, g.delta, g.gamma, g.vega, g.theta, g.rho,
        ))
    }
}
