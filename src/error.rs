//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::form::FormError;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{0}")]
    Conflict(String),

    #[error("Catalog API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        AppError::Form(FormError::Pricing(err))
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Form(FormError::Pricing(_)) => (StatusCode::UNPROCESSABLE_ENTITY, "pricing"),
            AppError::Form(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::Upstream { status, .. } => {
                // Client errors from the catalog API are passed on, server errors become 502
                let code = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (code, "upstream")
            }
            AppError::Http(_) => (StatusCode::BAD_GATEWAY, "upstream_unreachable"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let message = match &self {
            AppError::Http(e) => {
                tracing::error!("Catalog API request failed: {}", e);
                "Catalog API is unreachable".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            AppError::Upstream { status, message } => {
                tracing::warn!("Catalog API returned {}: {}", status, message);
                message.clone()
            }
            other => other.to_string(),
        };

        let details = match &self {
            AppError::Upstream { status, .. } => Some(serde_json::json!({ "upstreamStatus": status })),
            _ => None,
        };

        let body = ErrorResponse {
            error_type: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Form(FormError::MissingCategory).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(PricingError::DiscountOutOfRange(100.0))
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Conflict("exists".into()).into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_upstream_status_mapping() {
        let client_error = AppError::Upstream {
            status: 400,
            message: "Product code already exists".into(),
        };
        assert_eq!(client_error.into_response().status(), StatusCode::BAD_REQUEST);

        let server_error = AppError::Upstream {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(server_error.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
