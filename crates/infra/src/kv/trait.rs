use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// Failure talking to the key-value backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached (or the connection dropped).
    #[error("store connection failed: {0}")]
    Connection(String),

    /// The backend rejected or failed a command.
    #[error("store command failed: {0}")]
    Command(String),
}

/// Synchronous key-value store primitives.
///
/// Implementations must make `incr` atomic across concurrent callers (and,
/// for shared backends, across processes). No other call is expected to
/// coordinate with any other.
pub trait KeyValueStore: Send + Sync {
    /// Atomically increment an integer counter, creating it at 0 first if
    /// absent. Returns the new value.
    fn incr(&self, key: &str) -> Result<i64, StoreError>;

    /// Write every given field of a hash in a single call.
    fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError>;

    /// Fetch all fields of a hash. A missing key yields an empty map.
    fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Remove a key. Returns whether anything was removed.
    fn del(&self, key: &str) -> Result<bool, StoreError>;

    /// Enumerate keys starting with `prefix`, each key at most once.
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Round-trip to the backend (health checks).
    fn ping(&self) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn incr(&self, key: &str) -> Result<i64, StoreError> {
        (**self).incr(key)
    }

    fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        (**self).hset_all(key, fields)
    }

    fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        (**self).hgetall(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn del(&self, key: &str) -> Result<bool, StoreError> {
        (**self).del(key)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        (**self).scan_prefix(prefix)
    }

    fn ping(&self) -> Result<(), StoreError> {
        (**self).ping()
    }
}
