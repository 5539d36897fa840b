//! Tenor conversion endpoint

use axum::extract::Path;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use pricer_core::types::Maturity;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Parsed tenor with its conversions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityResponse {
    /// Number of units
    pub length: u32,
    /// Unit code (D, W, M or Y)
    pub unit: String,
    /// Length in years, days over 365
    pub year_fraction: f64,
    /// Length in days
    pub days: u64,
}

impl MaturityResponse {
    fn from_maturity(maturity: &Maturity) -> Self {
        Self {
            length: maturity.length(),
            unit: maturity.unit().code().to_string(),
            year_fraction: maturity.to_year_fraction(),
            days: maturity.total_days(),
        }
    }
}

/// Build the maturity routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/maturity/{tenor}", get(maturity_handler))
}

/// GET /api/v1/maturity/{tenor}
async fn maturity_handler(Path(tenor): Path<String>) -> Result<Json<MaturityResponse>, ApiError> {
    let maturity = Maturity::parse(&tenor)?;
    Ok(Json(MaturityResponse::from_maturity(&maturity)))
}
