//! # Catalog Errors
//!
//! Error types for catalog operations and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Missing or invalid API key
    #[error("Forbidden: Invalid or missing API key")]
    Forbidden,

    /// No product with the requested id
    #[error("Product not found")]
    NotFound,

    /// Required creation fields absent
    #[error("Missing required fields: name, price, or category")]
    MissingFields,

    /// Unexpected failure; the message is logged, never surfaced
    #[error("Something went wrong!")]
    Internal(String),
}

impl CatalogError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Forbidden => StatusCode::FORBIDDEN,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::MissingFields => StatusCode::BAD_REQUEST,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body, the envelope every failed request returns
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&CatalogError> for ErrorResponse {
    fn from(err: &CatalogError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        if let CatalogError::Internal(cause) = &self {
            tracing::error!(%cause, "internal error");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
