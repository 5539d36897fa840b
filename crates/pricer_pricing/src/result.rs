//! Pricing result type.

/// Present value and optional Greeks of one pricing request.
///
/// Greeks are `None` when they were not requested. Serialised in camelCase
/// with absent Greeks written as `null`.
///
/// # Examples
/// ```
/// use pricer_pricing::PricingResult;
///
/// let result = PricingResult::present_value_only(7.5);
/// assert!(!result.has_greeks());
/// assert_eq!(result.delta, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PricingResult {
    /// Present value.
    pub present_value: f64,
    /// ∂V/∂S
    pub delta: Option<f64>,
    /// ∂²V/∂S²
    pub gamma: Option<f64>,
    /// ∂V/∂σ
    pub vega: Option<f64>,
    /// ∂V/∂t
    pub theta: Option<f64>,
    /// ∂V/∂r
    pub rho: Option<f64>,
}

impl PricingResult {
    /// A result carrying only the present value.
    pub fn present_value_only(present_value: f64) -> Self {
        Self {
            present_value,
            ..Self::default()
        }
    }

    /// A result carrying the present value and all five Greeks.
    pub fn with_greeks(
        present_value: f64,
        delta: f64,
        gamma: f64,
        vega: f64,
        theta: f64,
        rho: f64,
    ) -> Self {
        Self {
            present_value,
            delta: Some(delta),
            gamma: Some(gamma),
            vega: Some(vega),
            theta: Some(theta),
            rho: Some(rho),
        }
    }

    /// Whether any Greek is populated.
    pub fn has_greeks(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .any(Option::is_some)
    }
}
