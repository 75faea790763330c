// src/config.rs
use crate::errors::{ConvertError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Where the conversion server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the submit handler sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers (and tests)
    /// don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("ST2PY_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("ST2PY_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ConvertError::Config(format!("ST2PY_PORT must be a port number, got '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig { host, port })
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = match lookup("ST2PY_SERVER_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(ConvertError::Config(
                    "ST2PY_SERVER_URL is set but empty".to_string(),
                ));
            }
            Some(url) => url.trim().to_string(),
            None => DEFAULT_SERVER_URL.to_string(),
        };

        Ok(ClientConfig { server_url })
    }

    /// Full URL of the conversion endpoint.
    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.server_url.trim_end_matches('/'))
    }
}
