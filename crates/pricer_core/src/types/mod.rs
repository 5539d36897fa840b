//! Core time and error types.
//!
//! This module provides:
//! - `maturity`: Tenor units and maturities with year-fraction conversion
//! - `error`: Structured error types for pricing and maturity parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Maturity`], [`TenorUnit`] from `maturity`
//! - [`PricingError`], [`MaturityError`] from `error`

pub mod error;
pub mod maturity;

pub use error::{MaturityError, PricingError};
pub use maturity::{Maturity, TenorUnit};
