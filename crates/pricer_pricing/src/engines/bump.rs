//! Bump-and-reprice sensitivities.
//!
//! Vega and Rho of the tree and grid engines are one-sided differences:
//! rebuild the full lattice with a perturbed input and divide the change in
//! present value by the perturbation.

use tracing::trace;

use super::ModelInputs;
use crate::config::EngineSettings;

/// Sizes of the volatility and rate perturbations.
///
/// # Examples
/// ```
/// use pricer_pricing::BumpPolicy;
///
/// let policy = BumpPolicy::default();
/// assert!((policy.volatility_shift(0.2) - 0.002).abs() < 1e-15);
/// // Near-zero rates use an absolute shift
/// assert_eq!(policy.rate_shift(0.0), 0.01);
/// assert!((policy.rate_shift(0.05) - 0.0005).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpPolicy {
    volatility_bump: f64,
    rate_bump: f64,
    rate_bump_floor: f64,
}

impl Default for BumpPolicy {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

impl BumpPolicy {
    /// Creates a policy from relative bumps and the absolute-bump threshold.
    pub fn new(volatility_bump: f64, rate_bump: f64, rate_bump_floor: f64) -> Self {
        Self {
            volatility_bump,
            rate_bump,
            rate_bump_floor,
        }
    }

    /// Reads the bump fields of validated settings.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            settings.volatility_bump,
            settings.rate_bump,
            settings.rate_bump_floor,
        )
    }

    /// dσ = σ · volatility_bump
    #[inline]
    pub fn volatility_shift(&self, volatility: f64) -> f64 {
        volatility * self.volatility_bump
    }

    /// dr = rate_bump if |r| < floor, otherwise r · rate_bump.
    #[inline]
    pub fn rate_shift(&self, rate: f64) -> f64 {
        if rate.abs() < self.rate_bump_floor {
            self.rate_bump
        } else {
            rate * self.rate_bump
        }
    }

    /// Estimates (Vega, Rho) by repricing `inputs` with bumped volatility and rate.
    ///
    /// `reprice` must return the present value of the given inputs; it is
    /// called exactly twice.
    pub fn vega_and_rho<F>(&self, inputs: &ModelInputs, base_value: f64, reprice: F) -> (f64, f64)
    where
        F: Fn(&ModelInputs) -> f64,
    {
        let d_sigma = self.volatility_shift(inputs.volatility);
        let vol_bumped = reprice(&inputs.with_volatility(inputs.volatility + d_sigma));
        let vega = (vol_bumped - base_value) / d_sigma;

        let d_rate = self.rate_shift(inputs.rate);
        let rate_bumped = reprice(&inputs.with_rate(inputs.rate + d_rate));
        let rho = (rate_bumped - base_value) / d_rate;

        trace!(d_sigma, d_rate, vega, rho, "bump-and-reprice sensitivities");
        (vega, rho)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::test_support::atm_call;
    use approx::assert_relative_eq;
    use pricer_models::instruments::ExerciseStyle;
    use std::cell::Cell;

    #[test]
    fn test_rate_shift_threshold() {
        let policy = BumpPolicy::default();
        assert_eq!(policy.rate_shift(0.00009), 0.01);
        assert_eq!(policy.rate_shift(-0.00009), 0.01);
        assert_relative_eq!(policy.rate_shift(0.0001), 0.000001, epsilon = 1e-18);
        assert_relative_eq!(policy.rate_shift(-0.02), -0.0002, epsilon = 1e-18);
    }

    #[test]
    fn test_vega_and_rho_on_linear_pricer() {
        // V = 3σ + 5r has Vega 3 and Rho 5 for any bump size
        let inputs = ModelInputs::from_option(&atm_call(ExerciseStyle::European), 0.04).unwrap();
        let linear = |i: &ModelInputs| 3.0 * i.volatility + 5.0 * i.rate;
        let base = linear(&inputs);

        let (vega, rho) = BumpPolicy::default().vega_and_rho(&inputs, base, linear);
        assert_relative_eq!(vega, 3.0, epsilon = 1e-9);
        assert_relative_eq!(rho, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reprice_called_twice_with_one_perturbation_each() {
        let inputs = ModelInputs::from_option(&atm_call(ExerciseStyle::European), 0.0).unwrap();
        let calls = Cell::new(0);
        let seen = std::cell::RefCell::new(Vec::new());

        BumpPolicy::default().vega_and_rho(&inputs, 0.0, |i| {
            calls.set(calls.get() + 1);
            seen.borrow_mut().push((i.volatility, i.rate));
            0.0
        });

        assert_eq!(calls.get(), 2);
        let seen = seen.into_inner();
        assert_relative_eq!(seen[0].0, 0.202, epsilon = 1e-15);
        assert_eq!(seen[0].1, 0.0);
        assert_eq!(seen[1].0, 0.2);
        assert_eq!(seen[1].1, 0.01);
    }
}
