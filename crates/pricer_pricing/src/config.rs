//! Pricing request configuration and engine resolution settings.
//!
//! This module provides:
//! - `NumericalMethod`: Tag selecting the pricing engine
//! - `PricingConfiguration`: Per-request method and Greeks flag
//! - `EngineSettings`: Tree/grid resolution and bump sizes shared by all requests

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Default number of binomial tree steps.
pub const DEFAULT_BINOMIAL_STEPS: usize = 500;

/// Default number of finite-difference time steps.
pub const DEFAULT_FD_TIME_STEPS: usize = 200;

/// Default number of finite-difference space steps.
pub const DEFAULT_FD_SPACE_STEPS: usize = 400;

/// Largest accepted number of binomial tree steps.
///
/// The full triangular tree is kept, so memory grows as steps² / 2.
pub const MAX_BINOMIAL_STEPS: usize = 5_000;

/// Largest accepted number of finite-difference time steps.
pub const MAX_FD_TIME_STEPS: usize = 10_000;

/// Largest accepted number of finite-difference space steps.
pub const MAX_FD_SPACE_STEPS: usize = 10_000;

/// Largest accepted finite-difference grid, in nodes.
pub const MAX_FD_GRID_NODES: usize = 10_000_000;

/// Numerical method used to price a vanilla option.
///
/// # Examples
/// ```
/// use pricer_pricing::NumericalMethod;
///
/// let method: NumericalMethod = "binomialtree".parse().unwrap();
/// assert_eq!(method, NumericalMethod::BinomialTree);
/// assert_eq!(method.to_string(), "BinomialTree");
///
/// // Unknown names are reported as not implemented
/// assert!("Heston".parse::<NumericalMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericalMethod {
    /// Closed-form Black-Scholes-Merton.
    Analytic,
    /// Cox-Ross-Rubinstein binomial tree.
    BinomialTree,
    /// Explicit finite differences.
    FiniteDifferences,
    /// Monte Carlo simulation (not implemented).
    MonteCarlo,
}

impl NumericalMethod {
    /// All methods, in declaration order.
    pub const ALL: [NumericalMethod; 4] = [
        NumericalMethod::Analytic,
        NumericalMethod::BinomialTree,
        NumericalMethod::FiniteDifferences,
        NumericalMethod::MonteCarlo,
    ];

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            NumericalMethod::Analytic => "Analytic",
            NumericalMethod::BinomialTree => "BinomialTree",
            NumericalMethod::FiniteDifferences => "FiniteDifferences",
            NumericalMethod::MonteCarlo => "MonteCarlo",
        }
    }
}

impl fmt::Display for NumericalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericalMethod {
    type Err = PricingError;

    /// Parses a method name, ignoring ASCII case.
    ///
    /// # Errors
    /// `PricingError::NotImplemented` for any unrecognised name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PricingError::NotImplemented(format!("Numerical method \"{}\"", s)))
    }
}

/// Per-request pricing configuration.
///
/// # Examples
/// ```
/// use pricer_pricing::{NumericalMethod, PricingConfiguration};
///
/// let config = PricingConfiguration::new(NumericalMethod::FiniteDifferences, false);
/// assert!(!config.compute_greeks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PricingConfiguration {
    /// Engine selector.
    pub numerical_method: NumericalMethod,
    /// Whether Greeks are computed in addition to the present value.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_compute_greeks", alias = "isCalculationWithGreeks")
    )]
    pub compute_greeks: bool,
}

#[cfg(feature = "serde")]
fn default_compute_greeks() -> bool {
    true
}

impl PricingConfiguration {
    /// Creates a configuration.
    pub fn new(numerical_method: NumericalMethod, compute_greeks: bool) -> Self {
        Self {
            numerical_method,
            compute_greeks,
        }
    }
}

/// Engine settings validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A step count is outside its accepted range.
    #[error("Invalid {name}: {value} (must be between {min} and {max})")]
    InvalidStepCount {
        /// Setting name
        name: &'static str,
        /// Supplied value
        value: usize,
        /// Smallest accepted value
        min: usize,
        /// Largest accepted value
        max: usize,
    },

    /// The finite-difference grid holds too many nodes.
    #[error("Finite-difference grid too large: {nodes} nodes (at most {max})")]
    GridTooLarge {
        /// (time steps + 1) × (space steps + 1)
        nodes: usize,
        /// Largest accepted node count
        max: usize,
    },

    /// Grid space steps must be even so a node sits on the spot.
    #[error("Invalid fd_space_steps: {0} (must be even)")]
    OddSpaceSteps(usize),

    /// A bump size is not a positive finite number.
    #[error("Invalid {name}: {value} (must be positive)")]
    InvalidBump {
        /// Setting name
        name: &'static str,
        /// Supplied value
        value: f64,
    },
}

impl From<SettingsError> for PricingError {
    fn from(err: SettingsError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Engine resolution and bump settings.
///
/// Regression values produced by the lattice and grid engines depend on
/// these numbers; the defaults are 500 tree steps and a 200 × 400 grid.
///
/// # Examples
/// ```
/// use pricer_pricing::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.binomial_steps, 500);
/// assert!(settings.validate().is_ok());
///
/// let coarse = EngineSettings { binomial_steps: 150, ..EngineSettings::default() };
/// assert!(coarse.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineSettings {
    /// Number of binomial tree steps, 2 to `MAX_BINOMIAL_STEPS`.
    pub binomial_steps: usize,
    /// Number of finite-difference time steps, 1 to `MAX_FD_TIME_STEPS`.
    pub fd_time_steps: usize,
    /// Number of finite-difference space steps, even, 2 to `MAX_FD_SPACE_STEPS`.
    pub fd_space_steps: usize,
    /// Relative volatility bump for Vega.
    pub volatility_bump: f64,
    /// Relative rate bump for Rho; absolute when |r| is below `rate_bump_floor`.
    pub rate_bump: f64,
    /// Rate magnitude below which `rate_bump` is applied as an absolute shift.
    pub rate_bump_floor: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            binomial_steps: DEFAULT_BINOMIAL_STEPS,
            fd_time_steps: DEFAULT_FD_TIME_STEPS,
            fd_space_steps: DEFAULT_FD_SPACE_STEPS,
            volatility_bump: 0.01,
            rate_bump: 0.01,
            rate_bump_floor: 0.0001,
        }
    }
}

impl EngineSettings {
    /// Validates every setting.
    ///
    /// # Errors
    /// The first `SettingsError` found, checking step counts before bumps.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_binomial_steps(self.binomial_steps)?;
        check_grid(self.fd_time_steps, self.fd_space_steps)?;
        check_bump("volatility_bump", self.volatility_bump)?;
        check_bump("rate_bump", self.rate_bump)?;
        if !(self.rate_bump_floor.is_finite() && self.rate_bump_floor >= 0.0) {
            return Err(SettingsError::InvalidBump {
                name: "rate_bump_floor",
                value: self.rate_bump_floor,
            });
        }
        Ok(())
    }
}

fn check_steps(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), SettingsError> {
    if !(min..=max).contains(&value) {
        return Err(SettingsError::InvalidStepCount {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn check_binomial_steps(steps: usize) -> Result<(), SettingsError> {
    check_steps("binomial_steps", steps, 2, MAX_BINOMIAL_STEPS)
}

pub(crate) fn check_grid(time_steps: usize, space_steps: usize) -> Result<(), SettingsError> {
    check_steps("fd_time_steps", time_steps, 1, MAX_FD_TIME_STEPS)?;
    check_steps("fd_space_steps", space_steps, 2, MAX_FD_SPACE_STEPS)?;
    if space_steps % 2 != 0 {
        return Err(SettingsError::OddSpaceSteps(space_steps));
    }
    let nodes = (time_steps + 1) * (space_steps + 1);
    if nodes > MAX_FD_GRID_NODES {
        return Err(SettingsError::GridTooLarge {
            nodes,
            max: MAX_FD_GRID_NODES,
        });
    }
    Ok(())
}

fn check_bump(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(SettingsError::InvalidBump { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str_is_case_insensitive() {
        assert_eq!(
            "analytic".parse::<NumericalMethod>().unwrap(),
            NumericalMethod::Analytic
        );
        assert_eq!(
            "FINITEDIFFERENCES".parse::<NumericalMethod>().unwrap(),
            NumericalMethod::FiniteDifferences
        );
        assert_eq!(
            "MonteCarlo".parse::<NumericalMethod>().unwrap(),
            NumericalMethod::MonteCarlo
        );
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let err = "Trinomial".parse::<NumericalMethod>().unwrap_err();
        assert!(matches!(err, PricingError::NotImplemented(ref msg) if msg.contains("Trinomial")));
        assert!("".parse::<NumericalMethod>().is_err());
    }

    #[test]
    fn test_method_display_roundtrip() {
        for method in NumericalMethod::ALL {
            assert_eq!(method.to_string().parse::<NumericalMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_default_settings_valid() {
        let settings = EngineSettings::default();
        assert_eq!(settings.fd_time_steps, 200);
        assert_eq!(settings.fd_space_steps, 400);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_reject_small_tree() {
        let settings = EngineSettings {
            binomial_steps: 1,
            ..EngineSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidStepCount {
                name: "binomial_steps",
                value: 1,
                min: 2,
                max: MAX_BINOMIAL_STEPS
            })
        );
    }

    #[test]
    fn test_settings_reject_oversized_resolution() {
        let settings = EngineSettings {
            binomial_steps: 1_000_000,
            ..EngineSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidStepCount { name: "binomial_steps", max, .. })
                if max == MAX_BINOMIAL_STEPS
        ));

        let settings = EngineSettings {
            binomial_steps: MAX_BINOMIAL_STEPS,
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_ok());

        let settings = EngineSettings {
            fd_time_steps: MAX_FD_TIME_STEPS,
            fd_space_steps: MAX_FD_SPACE_STEPS,
            ..EngineSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::GridTooLarge {
                nodes: (MAX_FD_TIME_STEPS + 1) * (MAX_FD_SPACE_STEPS + 1),
                max: MAX_FD_GRID_NODES,
            })
        );
    }

    #[test]
    fn test_settings_reject_odd_space_steps() {
        let settings = EngineSettings {
            fd_space_steps: 401,
            ..EngineSettings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::OddSpaceSteps(401)));
    }

    #[test]
    fn test_settings_reject_bad_bumps() {
        let settings = EngineSettings {
            volatility_bump: 0.0,
            ..EngineSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBump { name: "volatility_bump", .. })
        ));

        let settings = EngineSettings {
            rate_bump: f64::NAN,
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_error_to_pricing_error() {
        let err: PricingError = SettingsError::OddSpaceSteps(3).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_configuration_camel_case() {
            let config: PricingConfiguration =
                serde_json::from_str(r#"{"numericalMethod":"BinomialTree","computeGreeks":false}"#)
                    .unwrap();
            assert_eq!(
                config,
                PricingConfiguration::new(NumericalMethod::BinomialTree, false)
            );
        }

        #[test]
        fn test_configuration_greeks_default_and_alias() {
            let config: PricingConfiguration =
                serde_json::from_str(r#"{"numericalMethod":"Analytic"}"#).unwrap();
            assert!(config.compute_greeks);

            let config: PricingConfiguration = serde_json::from_str(
                r#"{"numericalMethod":"Analytic","isCalculationWithGreeks":false}"#,
            )
            .unwrap();
            assert!(!config.compute_greeks);
        }

        #[test]
        fn test_settings_partial_table() {
            let settings: EngineSettings =
                serde_json::from_str(r#"{"binomial_steps":150}"#).unwrap();
            assert_eq!(settings.binomial_steps, 150);
            assert_eq!(settings.fd_space_steps, 400);
        }
    }
}
