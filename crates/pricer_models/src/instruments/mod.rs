//! Instrument data model.
//!
//! # Instrument Types
//!
//! - [`Underlying`]: A dividend-paying equity (spot, volatility, dividend yield)
//! - [`VanillaOption`]: European/American call/put on an `Underlying`
//! - [`OptionType`] and [`ExerciseStyle`]: Two-valued tags consumed by the engines
//!
//! All constructors validate their inputs and return `InstrumentError`,
//! which lifts into `PricingError::InvalidInput` with `?`.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Maturity, PricingError};
//! use pricer_models::instruments::{ExerciseStyle, OptionType, Underlying, VanillaOption};
//!
//! fn build() -> Result<VanillaOption, PricingError> {
//!     let stock = Underlying::new("ACME", 100.0, 0.2, 0.01)?;
//!     let option = VanillaOption::new(
//!         ExerciseStyle::European,
//!         OptionType::Call,
//!         100.0,
//!         Maturity::parse("6M")?,
//!         stock,
//!     )?;
//!     Ok(option)
//! }
//!
//! assert!(build().is_ok());
//! ```

mod error;
mod exercise;
mod payoff;
mod underlying;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use payoff::OptionType;
pub use underlying::Underlying;
pub use vanilla::VanillaOption;
