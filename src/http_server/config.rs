//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, API key, and CORS
//! settings. The API key is injected here at process start; handlers never
//! see a literal secret.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret expected in the `x-api-key` header
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// CORS allowed origins (default: empty = permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    "12345".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: default_api_key(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_key, "12345");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.api_key, "12345");
    }
}
