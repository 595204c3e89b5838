//! HTTP listener settings.

use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read `BIND_ADDR` (default `0.0.0.0:3000`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(super::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw.trim().parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        Ok(ServerConfig { bind_addr })
    }
}
