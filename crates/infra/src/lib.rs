//! Infrastructure layer: key-value stores, key layout, configuration and the
//! stock repository built on top of them.

pub mod config;
pub mod keys;
pub mod kv;
pub mod repository;

pub use config::{ConfigError, LogFormat, ServiceConfig, StoreBackend};
pub use kv::{InMemoryKeyValueStore, KeyValueStore, StoreError};
pub use repository::{RepositoryError, RepositoryResult, StockRepository};
