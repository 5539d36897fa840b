//! Black-Scholes-Merton pricing model with continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! With direction multiplier m (+1 call, -1 put):
//!
//! **Price**: V = m·(S·e^(-qT)·N(m·d₁) - K·e^(-rT)·N(m·d₂))
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use crate::instruments::{ExerciseStyle, OptionType, VanillaOption};

/// Closed-form sensitivities of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (calendar time, usually negative)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes-Merton model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// let call = bs.price(OptionType::Call, 100.0, 1.0);
/// let put = bs.price(OptionType::Put, 100.0, 1.0);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
    dividend_yield: f64,
}

/// Quantities shared by the price and every Greek.
struct Terms {
    m: f64,
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    dividend_discount: f64,
    discount: f64,
}

impl BlackScholes {
    /// Creates a new model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Continuously compounded risk-free rate
    /// * `volatility` - Annual volatility (must be positive)
    /// * `dividend_yield` - Continuous dividend yield
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(
        spot: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
    ) -> Result<Self, AnalyticalError> {
        if spot.is_nan() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility.is_nan() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Builds the model from an option's underlying and an externally supplied rate.
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` for American options
    /// - `AnalyticalError::InvalidVolatility` if the underlying volatility is zero
    pub fn for_option(option: &VanillaOption, rate: f64) -> Result<Self, AnalyticalError> {
        if option.option_style() != ExerciseStyle::European {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.option_style().to_string(),
            });
        }
        let underlying = option.underlying();
        Self::new(
            underlying.spot_price(),
            rate,
            underlying.annual_volatility(),
            underlying.annual_dividend_yield(),
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let sigma = self.volatility;
        let drift = (self.rate - self.dividend_yield + 0.5 * sigma * sigma) * expiry;
        ((self.spot / strike).ln() + drift) / (sigma * expiry.sqrt())
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    fn terms(&self, option_type: OptionType, strike: f64, expiry: f64) -> Terms {
        let sqrt_t = expiry.sqrt();
        let d1 = self.d1(strike, expiry);
        Terms {
            m: option_type.multiplier(),
            d1,
            d2: d1 - self.volatility * sqrt_t,
            sqrt_t,
            dividend_discount: (-self.dividend_yield * expiry).exp(),
            discount: (-self.rate * expiry).exp(),
        }
    }

    fn price_from(&self, t: &Terms, strike: f64) -> f64 {
        t.m * (self.spot * t.dividend_discount * norm_cdf(t.m * t.d1)
            - strike * t.discount * norm_cdf(t.m * t.d2))
    }

    fn greeks_from(&self, t: &Terms, strike: f64, expiry: f64) -> Greeks {
        let (s, r, q, sigma) = (self.spot, self.rate, self.dividend_yield, self.volatility);
        let pdf_d1 = norm_pdf(t.d1);
        let cdf_md1 = norm_cdf(t.m * t.d1);
        let cdf_md2 = norm_cdf(t.m * t.d2);

        Greeks {
            delta: t.m * t.dividend_discount * cdf_md1,
            gamma: t.dividend_discount * pdf_d1 / (s * sigma * t.sqrt_t),
            vega: s * t.dividend_discount * pdf_d1 * t.sqrt_t,
            theta: -t.dividend_discount * s * pdf_d1 * sigma / (2.0 * t.sqrt_t)
                - t.m * r * strike * t.discount * cdf_md2
                + t.m * q * s * t.dividend_discount * cdf_md1,
            rho: t.m * strike * expiry * t.discount * cdf_md2,
        }
    }

    /// European option price.
    ///
    /// Returns the intrinsic value when `expiry <= 0`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.0, 0.2, 0.01).unwrap();
    /// let pv = bs.price(OptionType::Call, 100.0, 1.0);
    /// assert!((pv - 7.4383).abs() < 1e-3);
    /// ```
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return option_type.intrinsic(self.spot, strike);
        }
        let terms = self.terms(option_type, strike, expiry);
        self.price_from(&terms, strike)
    }

    /// Price and all five Greeks from a single d₁/d₂ evaluation.
    ///
    /// `expiry` must be positive.
    pub fn price_and_greeks(
        &self,
        option_type: OptionType,
        strike: f64,
        expiry: f64,
    ) -> (f64, Greeks) {
        let terms = self.terms(option_type, strike, expiry);
        (
            self.price_from(&terms, strike),
            self.greeks_from(&terms, strike, expiry),
        )
    }
}
