//! HTTP error mapping
//!
//! Every failure leaves a handler as an [`ApiError`], rendered as
//! `{ "error": <kind>, "message": <text> }`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use pricer_core::types::{MaturityError, PricingError};
use serde::{Deserialize, Serialize};

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Errors returned by the HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// A pricing-layer failure.
    Pricing(PricingError),
    /// The request body could not be decoded.
    BadRequest(String),
    /// The server failed while handling a valid request.
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Unsupported numerical methods are 501 and internal failures 500; every
    /// other failure is the client's (400).
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pricing(err) if err.is_server_fault() => StatusCode::NOT_IMPLEMENTED,
            ApiError::Pricing(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Pricing(err) => ErrorBody {
                error: err.kind().to_string(),
                message: err.to_string(),
            },
            ApiError::BadRequest(message) => ErrorBody {
                error: "bad_request".to_string(),
                message: message.clone(),
            },
            ApiError::Internal(message) => ErrorBody {
                error: "internal_error".to_string(),
                message: message.clone(),
            },
        }
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        ApiError::Pricing(err)
    }
}

impl From<MaturityError> for ApiError {
    fn from(err: MaturityError) -> Self {
        ApiError::Pricing(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();
        if status.is_server_error() {
            tracing::warn!(error = %body.error, message = %body.message, "request failed");
        } else {
            tracing::debug!(error = %body.error, message = %body.message, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (PricingError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (PricingError::Format("x".into()), StatusCode::BAD_REQUEST),
            (PricingError::InvalidOperation("x".into()), StatusCode::BAD_REQUEST),
            (PricingError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (PricingError::NotImplemented("x".into()), StatusCode::NOT_IMPLEMENTED),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(
            ApiError::BadRequest("missing field".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("task panicked".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_carries_kind_and_message() {
        let body = ApiError::from(PricingError::Format("Cannot parse \"1Q\"".into())).body();
        assert_eq!(body.error, "format_error");
        assert_eq!(body.message, "Format error: Cannot parse \"1Q\"");
    }

    #[tokio::test]
    async fn test_into_response() {
        let response =
            ApiError::from(PricingError::NotImplemented("MonteCarlo".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "not_implemented");
    }
}
