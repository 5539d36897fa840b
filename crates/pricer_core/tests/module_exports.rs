//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

use std::sync::Arc;

/// Types module is accessible via absolute and re-exported paths.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{MaturityError, PricingError};
    use pricer_core::types::maturity::{Maturity, TenorUnit};

    let maturity = Maturity::new(3, TenorUnit::Week).unwrap();
    assert_eq!(maturity.to_string(), "3W");

    let err: PricingError = MaturityError::Empty.into();
    assert_eq!(err.kind(), "validation_error");

    // Re-exports at module level
    let _: pricer_core::types::Maturity = maturity;
    let _: pricer_core::types::TenorUnit = TenorUnit::Day;
}

/// Math module is accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::distributions::{norm_cdf, norm_pdf};

    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    assert!(norm_pdf(0.0_f64) > 0.39);
    assert_eq!(pricer_core::math::norm_cdf(1.0_f64), norm_cdf(1.0_f64));
}

/// Market data module is accessible and providers compose.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::rates::{FlatRateProvider, RateProvider};

    fn rate_of(provider: &dyn RateProvider) -> f64 {
        provider.annual_risk_free_rate()
    }

    let shared: Arc<dyn RateProvider> = Arc::new(FlatRateProvider::new(0.025));
    assert_eq!(rate_of(&shared), 0.025);
    assert_eq!(rate_of(&*shared), 0.025);
}

/// Maturity errors lift into the pricing taxonomy with `?`.
#[test]
fn test_maturity_error_propagates_with_question_mark() {
    use pricer_core::types::{Maturity, PricingError};

    fn year_fraction(text: &str) -> Result<f64, PricingError> {
        Ok(Maturity::parse(text)?.to_year_fraction())
    }

    assert_eq!(year_fraction("1Y"), Ok(1.0));
    assert!(matches!(year_fraction(""), Err(PricingError::Validation(_))));
    assert!(matches!(year_fraction("Y"), Err(PricingError::Format(_))));
    assert!(matches!(year_fraction("12"), Err(PricingError::Format(_))));
}
