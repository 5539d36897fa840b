//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float` so callers can evaluate them in `f32` or `f64`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients, highest order last.
const ERFC_COEFFS: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];
const ERFC_P: f64 = 0.327_591_1;

/// Converts an `f64` constant into `T`.
#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let t = one / (one + constant::<T>(ERFC_P) * abs_x);

    // Horner
    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| constant::<T>(a) + t * acc);

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        constant::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as Φ(x) = erfc(-x / √2) / 2.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite `x`.
///
/// # Examples
/// ```
/// use pricer_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / constant::<T>(SQRT_2);
    constant::<T>(0.5) * erfc_approx(arg)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let exponent = -constant::<T>(0.5) * x * x;
    constant::<T>(FRAC_1_SQRT_2PI) * exponent.exp()
}
