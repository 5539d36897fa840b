//! REST API server for vanilla equity option pricing
//!
//! Exposes the pricing engines of `pricer_pricing` over HTTP:
//! - `POST /api/v1/price/vanilla-option`: price one option with a chosen numerical method
//! - `GET /api/v1/maturity/{tenor}`: parse a tenor and return its conversions
//! - `GET /health`, `GET /ready`: probes

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use pricer_core;
pub use pricer_models;
pub use pricer_pricing;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
