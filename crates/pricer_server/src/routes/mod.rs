//! Route modules for the pricer server
//!
//! This module contains endpoint group-specific routers:
//! - pricing: Vanilla option pricing
//! - maturity: Tenor parsing and year-fraction conversion
//! - health: Liveness and readiness probes

pub mod health;
pub mod maturity;
pub mod pricing;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use pricer_core::market_data::FlatRateProvider;
use pricer_pricing::{PricerFactory, SettingsError};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
    /// Pricer factory built from the configured engine settings
    pub factory: Arc<PricerFactory>,
    /// Rate provider shared by every engine
    pub rates: Arc<FlatRateProvider>,
}

impl AppState {
    /// Create a new AppState
    ///
    /// # Errors
    /// `SettingsError` if the configured engine settings are invalid.
    pub fn new(config: Arc<ServerConfig>) -> Result<Self, SettingsError> {
        let factory = PricerFactory::new(config.engines.clone())?;
        let rates = FlatRateProvider::new(config.risk_free_rate);
        Ok(Self {
            config,
            start_time: Instant::now(),
            factory: Arc::new(factory),
            rates: Arc::new(rates),
        })
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(pricing::routes())
        .merge(maturity::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response};
    use tower::ServiceExt;

    pub fn test_state(risk_free_rate: f64) -> AppState {
        let config = ServerConfig {
            risk_free_rate,
            ..ServerConfig::default()
        };
        AppState::new(Arc::new(config)).unwrap()
    }

    pub async fn get_uri(router: Router, uri: &str) -> Response<Body> {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(router: Router, uri: &str, body: &str) -> Response<Body> {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
