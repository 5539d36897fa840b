//! # Pricer Models (L2: Business Logic)
//!
//! Instrument data model and closed-form pricing formulas.
//!
//! This crate provides:
//! - Instrument definitions: `Underlying`, `VanillaOption`, `OptionType`, `ExerciseStyle`
//! - The Black-Scholes-Merton model with dividend yield and its analytical Greeks
//!
//! ## Design Principles
//!
//! - **Validating constructors**: instruments cannot hold a non-positive spot or strike
//! - **Direction multiplier**: call and put formulas share one code path via `OptionType::multiplier`
//! - **Error lifting**: module errors convert into `pricer_core::types::PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
