//! Vanilla option pricing endpoint
//!
//! `POST /api/v1/price/vanilla-option` prices one option with the numerical
//! method named in the request and returns the present value and, on request,
//! the five Greeks. Engines run on the blocking pool.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_pricing::{NumericalMethod, PricingConfiguration, PricingResult};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::AppState;
use crate::error::ApiError;

/// Pricing request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    /// Option to price
    pub priceable: VanillaOption,
    /// Method and Greeks flag
    pub pricing_configuration: PricingConfigurationRequest,
}

/// Pricing configuration as sent over the wire
///
/// The method stays a string here so that an unknown name is reported as
/// not implemented rather than as a malformed body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfigurationRequest {
    /// Method name, matched case-insensitively
    pub numerical_method: String,
    /// Whether to compute Greeks
    #[serde(default = "default_compute_greeks", alias = "isCalculationWithGreeks")]
    pub compute_greeks: bool,
}

fn default_compute_greeks() -> bool {
    true
}

impl PricingConfigurationRequest {
    /// Resolves the method name.
    ///
    /// # Errors
    /// `PricingError::NotImplemented` for an unknown method name.
    pub fn to_configuration(&self) -> Result<PricingConfiguration, PricingError> {
        let method: NumericalMethod = self.numerical_method.parse()?;
        Ok(PricingConfiguration::new(method, self.compute_greeks))
    }
}

/// Build the pricing routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/price/vanilla-option", post(price_vanilla_option))
}

/// POST /api/v1/price/vanilla-option
async fn price_vanilla_option(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PricingResult>, ApiError> {
    let Json(request) = payload?;
    let config = request.pricing_configuration.to_configuration()?;

    let span = tracing::info_span!(
        "price_vanilla_option",
        request_id = %Uuid::new_v4(),
        method = %config.numerical_method,
        greeks = config.compute_greeks,
    );

    let task = tokio::task::spawn_blocking(move || {
        span.in_scope(|| -> Result<PricingResult, ApiError> {
            let option = &request.priceable;
            info!(
                style = %option.option_style(),
                option_type = %option.option_type(),
                strike = option.strike(),
                maturity = %option.maturity(),
                spot = option.underlying().spot_price(),
                "pricing vanilla option started"
            );

            let pricer = state.factory.create(config.numerical_method)?;
            let result = pricer.price(&config, option, state.rates.as_ref())?;

            info!(
                present_value = result.present_value,
                "pricing vanilla option finished"
            );
            Ok(result)
        })
    });

    let result = task
        .await
        .map_err(|err| ApiError::Internal(format!("pricing task failed: {}", err)))??;
    Ok(Json(result))
}
