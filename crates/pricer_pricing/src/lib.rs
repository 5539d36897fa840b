//! # Pricer Pricing (Layer 3: Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns a `VanillaOption` and a `PricingConfiguration` into a
//! `PricingResult` using one of three interchangeable numerical methods:
//! - Closed-form Black-Scholes-Merton (European only)
//! - Cox-Ross-Rubinstein binomial tree (European and American)
//! - Explicit finite differences on a log-price grid (European and American)
//!
//! Lattice and grid Greeks combine values read from the solved tree or grid
//! (Delta, Gamma, Theta) with bump-and-reprice estimates (Vega, Rho).
//!
//! ## Rate Provider Contract
//!
//! Every engine queries the injected `RateProvider` exactly once per `price`
//! call and reuses the value for all bumped repricing passes.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::FlatRateProvider;
//! use pricer_core::types::Maturity;
//! use pricer_models::instruments::{ExerciseStyle, OptionType, Underlying, VanillaOption};
//! use pricer_pricing::{NumericalMethod, PricerFactory, PricingConfiguration};
//!
//! let option = VanillaOption::new(
//!     ExerciseStyle::European,
//!     OptionType::Call,
//!     100.0,
//!     Maturity::parse("1Y").unwrap(),
//!     Underlying::new("ACME", 100.0, 0.2, 0.01).unwrap(),
//! )
//! .unwrap();
//!
//! let factory = PricerFactory::default();
//! let pricer = factory.create(NumericalMethod::Analytic).unwrap();
//! let config = PricingConfiguration::new(NumericalMethod::Analytic, true);
//! let result = pricer.price(&config, &option, &FlatRateProvider::new(0.0)).unwrap();
//!
//! assert!((result.present_value - 7.4383).abs() < 1e-3);
//! assert!(result.delta.is_some());
//! ```
//!
//! ## Resolution
//!
//! Default resolutions are 500 tree steps and a 200 × 400 (time × space)
//! grid; see [`EngineSettings`]. Numerical results depend on them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engines;
pub mod factory;
pub mod result;

pub use config::{EngineSettings, NumericalMethod, PricingConfiguration, SettingsError};
pub use engines::{
    AnalyticPricer, BinomialTreePricer, BumpPolicy, FiniteDifferencePricer, ModelInputs,
};
pub use factory::{PricerFactory, VanillaOptionPricer};
pub use result::PricingResult;
