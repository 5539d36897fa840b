//! Cox-Ross-Rubinstein binomial tree engine.
//!
//! ## Lattice
//!
//! ```text
//! Δt = T/N,  u = exp(σ√Δt),  d = 1/u
//! q  = (exp((r - div)Δt) - d) / (u - d)
//! ```
//!
//! Node (i, j) carries the underlying level `S·u^j·d^(i-j)`. The full
//! triangular price tree is retained so Delta, Gamma and Theta can be read
//! from the first two layers.

use pricer_core::market_data::RateProvider;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use tracing::debug;

use super::bump::BumpPolicy;
use super::ModelInputs;
use crate::config::{check_binomial_steps, EngineSettings, PricingConfiguration, SettingsError};
use crate::result::PricingResult;

/// A solved binomial price tree.
///
/// `values[i]` holds the i + 1 option values of time layer i.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    values: Vec<Vec<f64>>,
    dt: f64,
    up: f64,
    down: f64,
}

impl BinomialTree {
    /// Builds the tree and runs backward induction.
    ///
    /// American options take `max(m·(S_ij - K), continuation)` at every node.
    ///
    /// `steps` must be at least 1; Greeks need at least 2.
    pub fn build(inputs: &ModelInputs, steps: usize) -> Self {
        let n = steps;
        let dt = inputs.expiry / n as f64;
        let up = (inputs.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let probability = (((inputs.rate - inputs.dividend_yield) * dt).exp() - down) / (up - down);
        let discount = (-inputs.rate * dt).exp();
        let early_exercise = inputs.style.allows_early_exercise();

        debug!(
            steps = n,
            dt,
            up,
            down,
            probability,
            early_exercise,
            "building binomial tree"
        );

        let level = |i: usize, j: usize| inputs.spot * up.powi(j as i32) * down.powi((i - j) as i32);

        let mut values: Vec<Vec<f64>> = vec![Vec::new(); n + 1];

        values[n] = (0..=n)
            .map(|j| inputs.exercise_value(level(n, j)).max(0.0))
            .collect();

        for i in (0..n).rev() {
            let (head, tail) = values.split_at_mut(i + 1);
            let next = &tail[0];
            head[i] = (0..=i)
                .map(|j| {
                    let continuation =
                        discount * (probability * next[j + 1] + (1.0 - probability) * next[j]);
                    if early_exercise {
                        inputs.exercise_value(level(i, j)).max(continuation)
                    } else {
                        continuation
                    }
                })
                .collect();
        }

        Self {
            values,
            dt,
            up,
            down,
        }
    }

    /// Option value at node (i, j).
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }

    /// Present value, node (0, 0).
    #[inline]
    pub fn present_value(&self) -> f64 {
        self.node(0, 0)
    }

    /// Time step Δt.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Down factor d.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// (P₁₁ - P₁₀) / (S·u - S·d)
    pub fn delta(&self, spot: f64) -> f64 {
        (self.node(1, 1) - self.node(1, 0)) / (spot * self.up - spot * self.down)
    }

    /// Difference of the two layer-2 deltas over half the layer-2 spread.
    pub fn gamma(&self, spot: f64) -> f64 {
        let (u, d) = (self.up, self.down);
        let upper = (self.node(2, 2) - self.node(2, 1)) / (spot * u * u - spot);
        let lower = (self.node(2, 1) - self.node(2, 0)) / (spot - spot * d * d);
        (upper - lower) / (0.5 * spot * (u * u - d * d))
    }

    /// (P₂₁ - P₀₀) / (2Δt); node (2, 1) sits at the current spot.
    pub fn theta(&self) -> f64 {
        (self.node(2, 1) - self.node(0, 0)) / (2.0 * self.dt)
    }
}

/// Binomial tree pricer for European and American options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialTreePricer {
    steps: usize,
    bumps: BumpPolicy,
}

impl Default for BinomialTreePricer {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self {
            steps: settings.binomial_steps,
            bumps: BumpPolicy::from_settings(&settings),
        }
    }
}

impl BinomialTreePricer {
    /// Creates a pricer with `steps` tree steps.
    ///
    /// # Errors
    /// `SettingsError::InvalidStepCount` if `steps` is below 2 or above
    /// `MAX_BINOMIAL_STEPS`.
    pub fn new(steps: usize, bumps: BumpPolicy) -> Result<Self, SettingsError> {
        check_binomial_steps(steps)?;
        Ok(Self { steps, bumps })
    }

    /// Creates a pricer from engine settings.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Self::new(settings.binomial_steps, BumpPolicy::from_settings(settings))
    }

    /// Number of tree steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices `option`, computing Greeks when `config.compute_greeks` is set.
    ///
    /// With Greeks, two extra full trees are built (bumped σ, bumped r).
    ///
    /// # Errors
    /// `PricingError::InvalidInput` for zero volatility.
    pub fn price<R>(
        &self,
        config: &PricingConfiguration,
        option: &VanillaOption,
        rates: &R,
    ) -> Result<PricingResult, PricingError>
    where
        R: RateProvider + ?Sized,
    {
        let rate = rates.annual_risk_free_rate();
        let inputs = ModelInputs::from_option(option, rate)?;
        let tree = BinomialTree::build(&inputs, self.steps);
        let pv = tree.present_value();

        if !config.compute_greeks {
            return Ok(PricingResult::present_value_only(pv));
        }

        let (vega, rho) = self.bumps.vega_and_rho(&inputs, pv, |bumped| {
            BinomialTree::build(bumped, self.steps).present_value()
        });

        Ok(PricingResult::with_greeks(
            pv,
            tree.delta(inputs.spot),
            tree.gamma(inputs.spot),
            vega,
            tree.theta(),
            rho,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumericalMethod;
    use crate::engines::test_support::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::FlatRateProvider;
    use pricer_models::instruments::ExerciseStyle;

    fn config() -> PricingConfiguration {
        PricingConfiguration::new(NumericalMethod::BinomialTree, true)
    }

    #[test]
    fn test_tree_shape_and_factors() {
        let inputs = ModelInputs::from_option(&atm_call(ExerciseStyle::European), 0.0).unwrap();
        let tree = BinomialTree::build(&inputs, 4);
        assert_eq!(tree.steps(), 4);
        assert_relative_eq!(tree.dt(), 0.25, epsilon = 1e-15);
        assert_relative_eq!(tree.up(), (0.2_f64 * 0.5).exp(), epsilon = 1e-15);
        assert_relative_eq!(tree.up() * tree.down(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_terminal_layer_is_payoff() {
        let inputs = ModelInputs::from_option(&otm_put(ExerciseStyle::European), 0.05).unwrap();
        let tree = BinomialTree::build(&inputs, 10);
        for j in 0..=10 {
            let level = 50.0 * tree.up().powi(j as i32) * tree.down().powi(10 - j as i32);
            assert_relative_eq!(tree.node(10, j), (52.0 - level).max(0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_american_nodes_dominate_exercise_value() {
        let inputs = ModelInputs::from_option(&otm_put(ExerciseStyle::American), 0.05).unwrap();
        let tree = BinomialTree::build(&inputs, 50);
        for i in 0..=50 {
            for j in 0..=i {
                let level = 50.0 * tree.up().powi(j as i32) * tree.down().powi((i - j) as i32);
                assert!(tree.node(i, j) >= 52.0 - level - 1e-12);
            }
        }
    }

    #[test]
    fn test_european_call_reference_values() {
        let result = BinomialTreePricer::default()
            .price(&config(), &atm_call(ExerciseStyle::European), &FlatRateProvider::new(0.0))
            .unwrap();

        assert_relative_eq!(result.present_value, 7.434335, epsilon = 1e-4);
        assert_relative_eq!(result.delta.unwrap(), 0.514766, epsilon = 1e-4);
        assert_relative_eq!(result.gamma.unwrap(), 0.019753, epsilon = 1e-4);
        assert_relative_eq!(result.vega.unwrap(), 39.426725, epsilon = 5e-4);
        assert_relative_eq!(result.theta.unwrap(), -3.436089, epsilon = 1e-4);
        assert_relative_eq!(result.rho.unwrap(), 44.803134, epsilon = 5e-4);
    }

    #[test]
    fn test_american_put_reference_values() {
        let result = BinomialTreePricer::default()
            .price(&config(), &otm_put(ExerciseStyle::American), &FlatRateProvider::new(0.05))
            .unwrap();

        assert_relative_eq!(result.present_value, 7.47095, epsilon = 1e-4);
        assert_relative_eq!(result.delta.unwrap(), -0.419129, epsilon = 1e-4);
        assert_relative_eq!(result.gamma.unwrap(), 0.022737, epsilon = 1e-4);
        assert_relative_eq!(result.vega.unwrap(), 26.268876, epsilon = 5e-4);
        assert_relative_eq!(result.theta.unwrap(), -1.13652, epsilon = 1e-4);
        assert_relative_eq!(result.rho.unwrap(), -33.560044, epsilon = 5e-4);
    }

    #[test]
    fn test_without_greeks() {
        let result = BinomialTreePricer::default()
            .price(
                &PricingConfiguration::new(NumericalMethod::BinomialTree, false),
                &otm_put(ExerciseStyle::European),
                &FlatRateProvider::new(0.05),
            )
            .unwrap();
        assert_relative_eq!(result.present_value, 6.756854, epsilon = 1e-4);
        assert!(!result.has_greeks());
    }

    #[test]
    fn test_step_bounds() {
        assert!(BinomialTreePricer::new(1, BumpPolicy::default()).is_err());
        assert!(BinomialTreePricer::new(
            crate::config::MAX_BINOMIAL_STEPS + 1,
            BumpPolicy::default()
        )
        .is_err());
        assert_eq!(
            BinomialTreePricer::new(150, BumpPolicy::default()).unwrap().steps(),
            150
        );
    }
}
