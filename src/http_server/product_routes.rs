//! Product HTTP Routes
//!
//! The `/api/products` CRUD endpoints, dispatching to the product store.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::catalog::query::ListParams;
use crate::catalog::{CatalogError, CreateProduct, ListQuery, Product, ProductStore, UpdateProduct};

// ==================
// Shared State
// ==================

/// State shared across handlers and the API-key gate
pub struct AppState {
    pub store: Arc<ProductStore>,
    pub api_key: String,
}

impl AppState {
    pub fn new(store: Arc<ProductStore>, api_key: impl Into<String>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}

// ==================
// Response Types
// ==================

/// Delete response: the removed record wrapped in a one-element sequence,
/// matching the underlying removal operation's return shape.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: Vec<Product>,
}

impl DeleteResponse {
    pub fn new(deleted: Vec<Product>) -> Self {
        Self {
            message: "Product deleted".to_string(),
            deleted,
        }
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products", post(create_product_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/products/{id}", put(update_product_handler))
        .route("/products/{id}", delete(delete_product_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, CatalogError> {
    let query = ListQuery::from(params);
    let products = state.store.list(&query)?;
    Ok(Json(products))
}

async fn get_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CatalogError> {
    let product = state.store.get(&id)?;
    Ok(Json(product))
}

async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), CatalogError> {
    let product = state.store.create(request)?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProduct>,
) -> Result<Json<Product>, CatalogError> {
    let product = state.store.update(&id, request)?;
    Ok(Json(product))
}

async fn delete_product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, CatalogError> {
    let deleted = state.store.delete(&id)?;
    Ok(Json(DeleteResponse::new(deleted)))
}
