//! Mathematical utilities for the pricing engines.
//!
//! - [`distributions`]: Standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
