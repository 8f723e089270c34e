use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};

pub const HOST_VAR: &str = "PACE_API_HOST";
pub const PORT_VAR: &str = "PACE_API_PORT";

/// HTTP server configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load server config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(HOST_VAR).ok().as_deref(),
            std::env::var(PORT_VAR).ok().as_deref(),
        )
    }

    fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self> {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(DEFAULT_HOST)
            .trim()
            .to_string();

        let port = match port {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} is not a valid port: '{}'", PORT_VAR, value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_custom_values() {
        let config = ServerConfig::from_vars(Some("127.0.0.1"), Some("9000")).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_blank_host_uses_default() {
        let config = ServerConfig::from_vars(Some("  "), None).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_port() {
        assert!(ServerConfig::from_vars(None, Some("http")).is_err());
        assert!(ServerConfig::from_vars(None, Some("70000")).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::from_vars(Some("not a host"), None).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
