//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error taxonomy shared by every pricing layer
//! - `MaturityError`: Errors from parsing or constructing maturities

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure in the pricing stack is reported as one of these kinds.
/// Narrower module errors (`MaturityError`, instrument and analytical errors)
/// convert into this type with `From`, so `?` lifts them unchanged in meaning.
///
/// # Variants
/// - `Validation`: A required input is absent or empty
/// - `Format`: Text input does not match the expected grammar
/// - `InvalidOperation`: The request is well formed but the method cannot price it
/// - `NotImplemented`: The requested numerical method is not available
/// - `InvalidInput`: Numeric parameters outside their valid domain
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::NotImplemented("MonteCarlo".to_string());
/// assert_eq!(format!("{}", err), "Not implemented: MonteCarlo");
/// assert!(err.is_server_fault());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Required input is absent or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text input does not match the recognised grammar.
    #[error("Format error: {0}")]
    Format(String),

    /// Operation not available for the given instrument.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Numerical method not implemented.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Invalid market data or contract parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PricingError {
    /// Short machine-readable name of the error kind.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// assert_eq!(PricingError::Format("x".into()).kind(), "format_error");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::Validation(_) => "validation_error",
            PricingError::Format(_) => "format_error",
            PricingError::InvalidOperation(_) => "invalid_operation",
            PricingError::NotImplemented(_) => "not_implemented",
            PricingError::InvalidInput(_) => "invalid_input",
        }
    }

    /// Whether the failure signals an unsupported configuration on the
    /// serving side rather than a malformed client request.
    pub fn is_server_fault(&self) -> bool {
        matches!(self, PricingError::NotImplemented(_))
    }
}

/// Maturity-related errors.
///
/// # Variants
/// - `Empty`: No maturity text supplied
/// - `Unparseable`: Length or unit code could not be recognised
/// - `InvalidLength`: A maturity must span at least one unit
/// - `Overflow`: Conversion to days exceeds the representable range
///
/// # Examples
/// ```
/// use pricer_core::types::MaturityError;
///
/// let err = MaturityError::Unparseable("12".to_string());
/// assert_eq!(format!("{}", err), "Cannot parse \"12\" into a maturity");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaturityError {
    /// Empty maturity text.
    #[error("Maturity text must not be empty")]
    Empty,

    /// Text does not match `<digits><unit>` or `ON`.
    #[error("Cannot parse \"{0}\" into a maturity")]
    Unparseable(String),

    /// Length below one.
    #[error("Maturity length must be at least 1, got {0}")]
    InvalidLength(u32),

    /// Day count does not fit in a `u32`.
    #[error("Maturity {0} is too long to express in days")]
    Overflow(String),
}

impl From<MaturityError> for PricingError {
    fn from(err: MaturityError) -> Self {
        match err {
            MaturityError::Empty => PricingError::Validation(err.to_string()),
            MaturityError::Unparseable(_)
            | MaturityError::InvalidLength(_)
            | MaturityError::Overflow(_) => PricingError::Format(err.to_string()),
        }
    }
}
