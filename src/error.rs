//! Application error type and its HTTP representation.
//!
//! Every error leaves the service as a flat JSON envelope:
//!
//! ```json
//! { "error": "Missing required fields" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::providers::ProviderError;

/// Message returned when a lookup is attempted without a label identifier.
pub const MISSING_FIELDS: &str = "Missing required fields";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors produced while serving a tracking lookup.
#[derive(Debug, Error)]
pub enum AppError {
    /// The label identifier was absent or empty. Detected before any
    /// provider call.
    #[error("Missing required fields")]
    MissingFields,

    /// The provider failed. All provider failure kinds collapse here.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_fields_is_bad_request() {
        let response = AppError::MissingFields.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], MISSING_FIELDS);
    }

    #[tokio::test]
    async fn test_provider_error_is_server_error_with_detail() {
        let error = AppError::from(ProviderError::Api {
            status: 404,
            message: "Label not found".to_string(),
        });

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Label not found");
    }

    #[tokio::test]
    async fn test_transport_error_detail_is_prefixed() {
        let error = AppError::from(ProviderError::Transport("connection refused".to_string()));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Tracking provider request failed: connection refused"
        );
    }
}
