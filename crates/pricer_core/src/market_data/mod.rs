//! Market data inputs for the pricing engines.
//!
//! # Components
//!
//! - [`rates`]: The injected risk-free rate capability (`RateProvider`, `FlatRateProvider`)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{FlatRateProvider, RateProvider};
//!
//! let provider = FlatRateProvider::new(0.05);
//! assert_eq!(provider.annual_risk_free_rate(), 0.05);
//! ```

pub mod rates;

pub use rates::{FlatRateProvider, RateProvider};
