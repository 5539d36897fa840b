//! # pricer_core: Foundation Layer of the Equity Derivatives Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the architecture, providing:
//! - Maturity and tenor types with year-fraction conversion (`types::maturity`)
//! - Error types: `PricingError`, `MaturityError` (`types::error`)
//! - The injected risk-free rate capability (`market_data::rates`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Maturity, TenorUnit};
//!
//! let maturity: Maturity = "6M".parse().unwrap();
//! assert_eq!(maturity.length(), 6);
//! assert_eq!(maturity.unit(), TenorUnit::Month);
//! assert!((maturity.to_year_fraction() - 180.0 / 365.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Maturity` and `TenorUnit`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
