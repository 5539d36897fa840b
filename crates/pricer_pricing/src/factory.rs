//! Pricer selection by numerical method.
//!
//! `PricerFactory` holds validated `EngineSettings` and hands out a
//! `VanillaOptionPricer` for each supported method. The enum dispatches
//! statically; no trait objects are involved.

use pricer_core::market_data::RateProvider;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use tracing::{debug, warn};

use crate::config::{EngineSettings, NumericalMethod, PricingConfiguration, SettingsError};
use crate::engines::{AnalyticPricer, BinomialTreePricer, FiniteDifferencePricer};
use crate::result::PricingResult;

/// A pricer for one numerical method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VanillaOptionPricer {
    /// Closed-form Black-Scholes-Merton.
    Analytic(AnalyticPricer),
    /// Cox-Ross-Rubinstein binomial tree.
    BinomialTree(BinomialTreePricer),
    /// Explicit finite differences.
    FiniteDifferences(FiniteDifferencePricer),
}

impl VanillaOptionPricer {
    /// The method this pricer implements.
    pub fn method(&self) -> NumericalMethod {
        match self {
            VanillaOptionPricer::Analytic(_) => NumericalMethod::Analytic,
            VanillaOptionPricer::BinomialTree(_) => NumericalMethod::BinomialTree,
            VanillaOptionPricer::FiniteDifferences(_) => NumericalMethod::FiniteDifferences,
        }
    }

    /// Prices `option`, querying `rates` exactly once.
    ///
    /// # Errors
    /// Whatever the underlying engine reports; see each engine's `price`.
    pub fn price<R>(
        &self,
        config: &PricingConfiguration,
        option: &VanillaOption,
        rates: &R,
    ) -> Result<PricingResult, PricingError>
    where
        R: RateProvider + ?Sized,
    {
        match self {
            VanillaOptionPricer::Analytic(pricer) => pricer.price(config, option, rates),
            VanillaOptionPricer::BinomialTree(pricer) => pricer.price(config, option, rates),
            VanillaOptionPricer::FiniteDifferences(pricer) => pricer.price(config, option, rates),
        }
    }
}

/// Creates pricers from shared engine settings.
///
/// # Examples
/// ```
/// use pricer_pricing::{NumericalMethod, PricerFactory};
///
/// let factory = PricerFactory::default();
/// let pricer = factory.create(NumericalMethod::BinomialTree).unwrap();
/// assert_eq!(pricer.method(), NumericalMethod::BinomialTree);
///
/// assert!(factory.create(NumericalMethod::MonteCarlo).is_err());
/// assert!(factory.create_by_name("Trinomial").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricerFactory {
    settings: EngineSettings,
}

impl PricerFactory {
    /// Creates a factory after validating `settings`.
    ///
    /// # Errors
    /// The first `SettingsError` reported by `EngineSettings::validate`.
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Settings used for every pricer this factory creates.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Whether `create` succeeds for `method`.
    pub fn supports(&self, method: NumericalMethod) -> bool {
        !matches!(method, NumericalMethod::MonteCarlo)
    }

    /// Returns the pricer for `method`.
    ///
    /// # Errors
    /// `PricingError::NotImplemented` for `NumericalMethod::MonteCarlo`.
    pub fn create(&self, method: NumericalMethod) -> Result<VanillaOptionPricer, PricingError> {
        let pricer = match method {
            NumericalMethod::Analytic => VanillaOptionPricer::Analytic(AnalyticPricer::new()),
            NumericalMethod::BinomialTree => VanillaOptionPricer::BinomialTree(
                BinomialTreePricer::from_settings(&self.settings)?,
            ),
            NumericalMethod::FiniteDifferences => VanillaOptionPricer::FiniteDifferences(
                FiniteDifferencePricer::from_settings(&self.settings)?,
            ),
            NumericalMethod::MonteCarlo => {
                warn!(%method, "numerical method requested but not implemented");
                return Err(PricingError::NotImplemented(format!(
                    "Numerical method \"{}\"",
                    method
                )));
            }
        };
        debug!(%method, "created pricer");
        Ok(pricer)
    }

    /// Parses `name` and returns the matching pricer.
    ///
    /// # Errors
    /// `PricingError::NotImplemented` for unknown or unimplemented names.
    pub fn create_by_name(&self, name: &str) -> Result<VanillaOptionPricer, PricingError> {
        self.create(name.parse()?)
    }
}
