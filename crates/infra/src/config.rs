//! Configuration loading and representation.
//!
//! Everything comes from the process environment; `from_lookup` takes any
//! lookup function so tests never touch the real environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which key-value backend holds the records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Redis,
    /// Process-local store (dev/test); data is lost on exit.
    Memory,
}

/// Log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub redis_url: String,
    pub log_format: LogFormat,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_url = lookup("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => default_bind_addr(),
        };

        let store = match lookup("STOCK_STORE").as_deref().map(str::to_lowercase) {
            None => StoreBackend::default(),
            Some(v) if v == "redis" => StoreBackend::Redis,
            Some(v) if v == "memory" => StoreBackend::Memory,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    var: "STOCK_STORE",
                    value: v,
                    reason: "expected one of: redis, memory".to_string(),
                });
            }
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::to_lowercase) {
            None => LogFormat::default(),
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: v,
                    reason: "expected one of: json, pretty".to_string(),
                });
            }
        };

        Ok(Self {
            bind_addr,
            store,
            redis_url,
            log_format,
        })
    }

    /// In-memory store on an ephemeral localhost port (tests/dev).
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            store: StoreBackend::Memory,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
