//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)

pub mod black_scholes;
pub mod error;

pub use black_scholes::{BlackScholes, Greeks};
pub use error::AnalyticalError;
