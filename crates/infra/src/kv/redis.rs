//! Redis-backed key-value store (optional).
//!
//! Uses the synchronous client and opens a fresh connection per call; the
//! service holds no connection state beyond the client configuration.

use std::collections::{BTreeSet, HashMap};

use redis::Commands;

use super::r#trait::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct RedisKeyValueStore {
    client: redis::Client,
}

impl RedisKeyValueStore {
    /// Validate the URL and build a client. Does not connect.
    pub fn new(redis_url: impl AsRef<str>) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url.as_ref())
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    fn connection(&self) -> Result<redis::Connection, StoreError> {
        self.client
            .get_connection()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

fn map_err(e: redis::RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Command(e.to_string())
    }
}

/// Escape glob metacharacters so a literal prefix can be used with MATCH.
fn match_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}

impl KeyValueStore for RedisKeyValueStore {
    fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.connection()?;
        conn.incr(key, 1_i64).map_err(map_err)
    }

    fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        conn.hset_multiple::<_, _, _, ()>(key, fields).map_err(map_err)
    }

    fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let mut conn = self.connection()?;
        conn.hgetall(key).map_err(map_err)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection()?;
        conn.exists(key).map_err(map_err)
    }

    fn del(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection()?;
        let removed: i64 = conn.del(key).map_err(map_err)?;
        Ok(removed > 0)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection()?;
        // SCAN may yield a key more than once.
        let keys: BTreeSet<String> = conn
            .scan_match::<_, String>(match_pattern(prefix))
            .map_err(map_err)?
            .collect();
        Ok(keys.into_iter().collect())
    }

    fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let _: String = redis::cmd("PING").query(&mut conn).map_err(map_err)?;
        Ok(())
    }
}
