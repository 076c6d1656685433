//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A query parameter was present but could not be parsed.
    #[error("invalid value for query parameter '{name}': {value:?}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
    /// The query string itself could not be decoded.
    #[error("{0}")]
    BadRequest(String),
    /// The conversion left the representable decimal range.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// No route matched the request.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter { .. } | AppError::BadRequest(_) | AppError::Conversion(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ApiError {
        let message = self.to_string();
        match self {
            AppError::InvalidParameter { reason, .. } => {
                ApiError::new("BAD_REQUEST", message).with_details(reason.clone())
            }
            AppError::BadRequest(_) => ApiError::new("BAD_REQUEST", message),
            AppError::Conversion(_) => ApiError::new("OUT_OF_RANGE", message),
            AppError::NotFound(_) => ApiError::new("NOT_FOUND", message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::InvalidParameter { name, value, .. } = &self {
            tracing::warn!(parameter = *name, value = %value, "rejected malformed query parameter");
        }
        (self.status(), Json(self.body())).into_response()
    }
}
