//! # HTTP Server
//!
//! Assembles the router and middleware chain and runs the serve loop.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::ProductStore;

use super::config::HttpServerConfig;
use super::middleware::{handle_panic, log_request, require_api_key};
use super::product_routes::{product_routes, AppState};

/// HTTP server for the product catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a store with default configuration
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(store: Arc<ProductStore>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with the full middleware chain
    fn build_router(store: Arc<ProductStore>, config: &HttpServerConfig) -> Router {
        let state = Arc::new(AppState::new(store, config.api_key.clone()));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Layers wrap bottom-up: the gate sits closest to the routes, the
        // panic catcher outermost so it observes every stage.
        Router::new()
            .nest("/api", product_routes(state.clone()))
            .layer(middleware::from_fn_with_state(state, require_api_key))
            .layer(middleware::from_fn(log_request))
            .layer(cors)
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("catalogd running at http://{}", addr);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
