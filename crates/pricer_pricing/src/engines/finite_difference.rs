//! Explicit finite-difference engine on a log-price grid.
//!
//! ## Grid
//!
//! ```text
//! Δt = T / nTime,  Δz = σ√(3Δt)
//! z_j = ln S + (j - nSpace/2)·Δz
//! ```
//!
//! The spot sits on the centre column `c = nSpace/2`.
//!
//! ## Scheme
//!
//! With ν = r - q - σ²/2 and discounting 1/(1 + rΔt):
//!
//! ```text
//! α = (-Δt/(2Δz)·ν + Δtσ²/(2Δz²)) / (1 + rΔt)
//! β = (1 - Δtσ²/Δz²)              / (1 + rΔt)
//! γ = ( Δt/(2Δz)·ν + Δtσ²/(2Δz²)) / (1 + rΔt)
//! P[i,j] = α·P[i+1,j-1] + β·P[i+1,j] + γ·P[i+1,j+1]
//! ```
//!
//! ## Boundaries
//!
//! | Style    | Type | Low (j = 0)     | High (j = nSpace) |
//! |----------|------|-----------------|-------------------|
//! | European | Call | 0               | S                 |
//! | European | Put  | K·exp(-r·i·Δt)  | 0                 |
//! | American | Call | 0               | S                 |
//! | American | Put  | K               | 0                 |
//!
//! Boundary values are applied to every time row, the terminal row included.

use pricer_core::market_data::RateProvider;
use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
use tracing::debug;

use super::bump::BumpPolicy;
use super::ModelInputs;
use crate::config::{check_grid, EngineSettings, PricingConfiguration, SettingsError};
use crate::result::PricingResult;

/// A solved finite-difference grid.
///
/// `values[i][j]` is the option value at time row i and space column j.
#[derive(Debug, Clone)]
pub struct FiniteDifferenceGrid {
    values: Vec<Vec<f64>>,
    dt: f64,
    dz: f64,
}

impl FiniteDifferenceGrid {
    /// Builds the grid and runs the explicit backward sweep.
    ///
    /// `time_steps` must be at least 1 and `space_steps` even and at least 2.
    pub fn build(inputs: &ModelInputs, time_steps: usize, space_steps: usize) -> Self {
        let dt = inputs.expiry / time_steps as f64;
        let dz = inputs.volatility * (3.0 * dt).sqrt();
        let centre = space_steps / 2;
        let log_spot = inputs.spot.ln();

        let sigma2 = inputs.volatility * inputs.volatility;
        let nu = inputs.rate - inputs.dividend_yield - 0.5 * sigma2;
        let discount = 1.0 / (1.0 + inputs.rate * dt);
        let diffusion = dt * sigma2 / (2.0 * dz * dz);
        let drift = dt / (2.0 * dz) * nu;
        let alpha = discount * (-drift + diffusion);
        let beta = discount * (1.0 - dt * sigma2 / (dz * dz));
        let gamma = discount * (drift + diffusion);
        let early_exercise = inputs.style.allows_early_exercise();

        debug!(
            time_steps,
            space_steps,
            dt,
            dz,
            alpha,
            beta,
            gamma,
            early_exercise,
            "building finite-difference grid"
        );

        let exercise: Vec<f64> = (0..=space_steps)
            .map(|j| {
                let offset = j as f64 - centre as f64;
                inputs.exercise_value((log_spot + offset * dz).exp())
            })
            .collect();

        let mut values = vec![vec![0.0; space_steps + 1]; time_steps + 1];
        for (j, value) in values[time_steps].iter_mut().enumerate() {
            *value = exercise[j].max(0.0);
        }

        for (i, row) in values.iter_mut().enumerate() {
            let (low, high) = boundaries(inputs, i as f64 * dt);
            row[0] = low;
            row[space_steps] = high;
        }

        for i in (0..time_steps).rev() {
            let (head, tail) = values.split_at_mut(i + 1);
            let next = &tail[0];
            let row = &mut head[i];
            for j in 1..space_steps {
                let continuation = alpha * next[j - 1] + beta * next[j] + gamma * next[j + 1];
                row[j] = if early_exercise {
                    exercise[j].max(continuation)
                } else {
                    continuation
                };
            }
        }

        Self { values, dt, dz }
    }

    /// Option value at time row i, space column j.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Index of the column aligned with the spot.
    #[inline]
    pub fn centre(&self) -> usize {
        (self.values[0].len() - 1) / 2
    }

    /// Time step Δt.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Log-price step Δz.
    #[inline]
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Present value at (0, c).
    #[inline]
    pub fn present_value(&self) -> f64 {
        self.node(0, self.centre())
    }

    /// Central difference in log-price, converted to ∂V/∂S.
    pub fn delta(&self, spot: f64) -> f64 {
        let c = self.centre();
        (self.node(0, c + 1) - self.node(0, c - 1)) / (2.0 * self.dz) / spot
    }

    /// Second log-price derivative minus the first, over S².
    pub fn gamma(&self, spot: f64) -> f64 {
        let c = self.centre();
        let (up, mid, down) = (self.node(0, c + 1), self.node(0, c), self.node(0, c - 1));
        let second = (up - 2.0 * mid + down) / (self.dz * self.dz);
        let first = (up - down) / (2.0 * self.dz);
        (second - first) / (spot * spot)
    }

    /// (P[1,c] - P[0,c]) / Δt
    pub fn theta(&self) -> f64 {
        let c = self.centre();
        (self.node(1, c) - self.node(0, c)) / self.dt
    }
}

/// (low, high) boundary values at calendar time `t`.
fn boundaries(inputs: &ModelInputs, t: f64) -> (f64, f64) {
    match (inputs.style, inputs.option_type) {
        (_, OptionType::Call) => (0.0, inputs.spot),
        (ExerciseStyle::European, OptionType::Put) => (inputs.strike * (-inputs.rate * t).exp(), 0.0),
        (ExerciseStyle::American, OptionType::Put) => (inputs.strike, 0.0),
    }
}

/// Finite-difference pricer for European and American options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferencePricer {
    time_steps: usize,
    space_steps: usize,
    bumps: BumpPolicy,
}

impl Default for FiniteDifferencePricer {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self {
            time_steps: settings.fd_time_steps,
            space_steps: settings.fd_space_steps,
            bumps: BumpPolicy::from_settings(&settings),
        }
    }
}

impl FiniteDifferencePricer {
    /// Creates a pricer with the given grid resolution.
    ///
    /// # Errors
    /// - `SettingsError::InvalidStepCount` if either count is out of range
    /// - `SettingsError::OddSpaceSteps` if `space_steps` is odd
    /// - `SettingsError::GridTooLarge` above `MAX_FD_GRID_NODES` nodes
    pub fn new(
        time_steps: usize,
        space_steps: usize,
        bumps: BumpPolicy,
    ) -> Result<Self, SettingsError> {
        check_grid(time_steps, space_steps)?;
        Ok(Self {
            time_steps,
            space_steps,
            bumps,
        })
    }

    /// Creates a pricer from engine settings.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Self::new(
            settings.fd_time_steps,
            settings.fd_space_steps,
            BumpPolicy::from_settings(settings),
        )
    }

    /// Grid resolution as (time steps, space steps).
    #[inline]
    pub fn resolution(&self) -> (usize, usize) {
        (self.time_steps, self.space_steps)
    }

    /// Prices `option`, computing Greeks when `config.compute_greeks` is set.
    ///
    /// With Greeks, two extra full grids are solved (bumped σ, bumped r).
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
        let grid = FiniteDifferenceGrid::build(&inputs, self.time_steps, self.space_steps);
        let pv = grid.present_value();

        if !config.compute_greeks {
            return Ok(PricingResult::present_value_only(pv));
        }

        let (vega, rho) = self.bumps.vega_and_rho(&inputs, pv, |bumped| {
            FiniteDifferenceGrid::build(bumped, self.time_steps, self.space_steps).present_value()
        });

        Ok(PricingResult::with_greeks(
            pv,
            grid.delta(inputs.spot),
            grid.gamma(inputs.spot),
            vega,
            grid.theta(),
            rho,
        ))
    }
}
