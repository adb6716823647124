use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{KeyValueStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Counter(i64),
    Hash(HashMap<String, String>),
}

/// In-memory key-value store for tests/dev.
///
/// Mirrors the Redis semantics the service relies on: counters and hashes
/// share one keyspace, `incr` on a hash key and `hset_all` on a counter key
/// are type errors.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, Entry>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert raw hash fields, bypassing the record codec (test seeding).
    pub fn insert_raw_hash(
        &self,
        key: impl Into<String>,
        fields: HashMap<String, String>,
    ) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(key.into(), Entry::Hash(fields));
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::Connection("in-memory store lock poisoned".to_string())
}

fn wrong_type(key: &str) -> StoreError {
    StoreError::Command(format!("WRONGTYPE operation against key {key}"))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let entry = map.entry(key.to_string()).or_insert(Entry::Counter(0));
        match entry {
            Entry::Counter(n) => {
                *n = n
                    .checked_add(1)
                    .ok_or_else(|| StoreError::Command(format!("increment would overflow {key}")))?;
                Ok(*n)
            }
            Entry::Hash(_) => Err(wrong_type(key)),
        }
    }

    fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let entry = map
            .entry(key.to_string())
            .or_insert_with(|| Entry::Hash(HashMap::new()));
        match entry {
            Entry::Hash(hash) => {
                for (field, value) in fields {
                    hash.insert((*field).to_string(), value.clone());
                }
                Ok(())
            }
            Entry::Counter(_) => Err(wrong_type(key)),
        }
    }

    fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        match map.get(key) {
            Some(Entry::Hash(hash)) => Ok(hash.clone()),
            Some(Entry::Counter(_)) => Err(wrong_type(key)),
            None => Ok(HashMap::new()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.contains_key(key))
    }

    fn del(&self, key: &str) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(key).is_some())
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn ping(&self) -> Result<(), StoreError> {
        self.inner.read().map(|_| ()).map_err(|_| poisoned())
    }
}
