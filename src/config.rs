//! Server configuration read from the environment

use std::net::SocketAddr;

use crate::error::{Error, Result};

/// Environment variable holding the listen address
pub const ADDR_VAR: &str = "COORD_QUERY_ADDR";

/// Environment variable holding the request body limit in bytes
pub const BODY_LIMIT_VAR: &str = "COORD_QUERY_BODY_LIMIT";

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024 * 1024; // 100MB

/// Settings for the HTTP conversion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("{} = {:?}: {}", ADDR_VAR, addr, e)))?;

        let body_limit_bytes = match lookup(BODY_LIMIT_VAR) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|e| Error::Config(format!("{} = {:?}: {}", BODY_LIMIT_VAR, value, e)))?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            bind_addr,
            body_limit_bytes,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}
