//! Risk-free rate capability.
//!
//! Engines receive a `RateProvider` explicitly and query it once per pricing
//! call. Every internal repricing pass (bumped volatility, bumped rate) reuses
//! that value, so the provider must be free of side effects that matter for
//! pricing.

use std::sync::Arc;

/// Source of the flat annual continuously-compounded risk-free rate.
///
/// # Contract
///
/// - Implementations are stateless from the caller's point of view: repeated
///   calls within one request must return the same rate.
/// - Must be `Send + Sync` to be shared across concurrent requests.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::RateProvider;
///
/// struct Fixed;
///
/// impl RateProvider for Fixed {
///     fn annual_risk_free_rate(&self) -> f64 {
///         0.03
///     }
/// }
///
/// assert_eq!(Fixed.annual_risk_free_rate(), 0.03);
/// ```
pub trait RateProvider: Send + Sync {
    /// Return the annual risk-free rate.
    fn annual_risk_free_rate(&self) -> f64;
}

impl<R: RateProvider + ?Sized> RateProvider for &R {
    #[inline]
    fn annual_risk_free_rate(&self) -> f64 {
        (**self).annual_risk_free_rate()
    }
}

impl<R: RateProvider + ?Sized> RateProvider for Arc<R> {
    #[inline]
    fn annual_risk_free_rate(&self) -> f64 {
        (**self).annual_risk_free_rate()
    }
}

impl<R: RateProvider + ?Sized> RateProvider for Box<R> {
    #[inline]
    fn annual_risk_free_rate(&self) -> f64 {
        (**self).annual_risk_free_rate()
    }
}

/// Rate provider returning one constant rate.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{FlatRateProvider, RateProvider};
///
/// let provider = FlatRateProvider::default();
/// assert_eq!(provider.annual_risk_free_rate(), 0.0);
/// assert_eq!(provider.rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatRateProvider {
    rate: f64,
}

impl FlatRateProvider {
    /// Construct a provider for the given continuously-compounded rate.
    #[inline]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl RateProvider for FlatRateProvider {
    #[inline]
    fn annual_risk_free_rate(&self) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    impl RateProvider for Counting {
        fn annual_risk_free_rate(&self) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            0.02
        }
    }

    fn query<R: RateProvider>(provider: R) -> f64 {
        provider.annual_risk_free_rate()
    }

    #[test]
    fn test_flat_provider_returns_rate() {
        let provider = FlatRateProvider::new(0.05);
        assert_eq!(provider.annual_risk_free_rate(), 0.05);
        assert_eq!(provider.rate(), 0.05);
    }

    #[test]
    fn test_negative_rate_allowed() {
        let provider = FlatRateProvider::new(-0.005);
        assert_eq!(provider.annual_risk_free_rate(), -0.005);
    }

    #[test]
    fn test_reference_and_arc_forward() {
        let provider = FlatRateProvider::new(0.01);
        assert_eq!(query(&provider), 0.01);
        assert_eq!(query(Arc::new(provider)), 0.01);

        let boxed: Box<dyn RateProvider> = Box::new(provider);
        assert_eq!(query(&*boxed), 0.01);
        assert_eq!(query(boxed), 0.01);
    }

    #[test]
    fn test_shared_provider_sees_every_call() {
        let provider = Arc::new(Counting {
            calls: AtomicUsize::new(0),
        });
        assert_eq!(query(Arc::clone(&provider)), 0.02);
        assert_eq!(query(&*provider), 0.02);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_flat_provider_deserialises() {
        let provider: FlatRateProvider = serde_json::from_str(r#"{"rate":0.04}"#).unwrap();
        assert_eq!(provider.rate(), 0.04);
    }
}
