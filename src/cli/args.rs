//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd serve [--host H] [--port P] [--api-key K] [--no-seed]

use clap::{Parser, Subcommand};

/// catalogd - an in-memory product catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Shared secret expected in the x-api-key header
        #[arg(long, env = "CATALOGD_API_KEY", default_value = "12345")]
        api_key: String,

        /// Start with an empty catalog instead of the sample products
        #[arg(long)]
        no_seed: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["catalogd", "serve"]).unwrap();
        let Command::Serve {
            host,
            port,
            api_key,
            no_seed,
        } = cli.command;
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 3000);
        assert_eq!(api_key, "12345");
        assert!(!no_seed);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "catalogd", "serve", "--port", "8080", "--api-key", "secret", "--no-seed",
        ])
        .unwrap();
        let Command::Serve {
            port,
            api_key,
            no_seed,
            ..
        } = cli.command;
        assert_eq!(port, 8080);
        assert_eq!(api_key, "secret");
        assert!(no_seed);
    }
}
