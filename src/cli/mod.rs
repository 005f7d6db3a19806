//! CLI module for catalogd
//!
//! Parses arguments, initializes logging, and boots the HTTP server.

mod args;

pub use args::{Cli, Command};

use std::io;
use std::sync::Arc;

use crate::catalog::ProductStore;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> io::Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            host,
            port,
            api_key,
            no_seed,
        } => serve(host, port, api_key, no_seed),
    }
}

fn serve(host: String, port: u16, api_key: String, no_seed: bool) -> io::Result<()> {
    init_tracing();

    let store = if no_seed {
        Arc::new(ProductStore::new())
    } else {
        Arc::new(ProductStore::with_sample_data())
    };

    let config = HttpServerConfig {
        host,
        port,
        api_key,
        ..Default::default()
    };
    let server = HttpServer::with_config(store, config);

    tokio::runtime::Runtime::new()?.block_on(server.start())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
