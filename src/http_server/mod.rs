//! # HTTP Server Module
//!
//! Axum server for the product catalog API.
//!
//! # Endpoints
//!
//! - `GET /api/products` - list with search/category/pagination
//! - `GET /api/products/{id}` - fetch one
//! - `POST /api/products` - create
//! - `PUT /api/products/{id}` - partial update
//! - `DELETE /api/products/{id}` - remove
//!
//! Every route sits behind the request logger and the `x-api-key` gate.

pub mod config;
pub mod middleware;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
