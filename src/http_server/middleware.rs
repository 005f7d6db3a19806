//! HTTP Middleware
//!
//! Request logging, the API-key gate, and the terminal panic catcher.
//!
//! # Chain order (outermost first)
//!
//! 1. Panic catcher - converts any panic escaping a handler into a 500
//! 2. CORS
//! 3. Request logger - one line per request, method and path
//! 4. API-key gate - short-circuits with 403 before any handler runs

use std::any::Any;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::catalog::CatalogError;

use super::product_routes::AppState;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Log method and path for every incoming request, then continue.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

/// Enforce the static API key on every route.
///
/// Requests without the header, or with a value other than the configured
/// secret, are answered 403 and never reach a handler.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if key == state.api_key => next.run(request).await,
        _ => CatalogError::Forbidden.into_response(),
    }
}

/// Terminal error handler: turn a handler panic into the generic 500
/// envelope, logging the panic message.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(%detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "Something went wrong!"})),
    )
        .into_response()
}
