//! Stock operations over a key-value store.
//!
//! Every call is at most one read plus one write against the store. Create is
//! safe under concurrency because id assignment is the store's atomic `incr`.
//! Get/update/delete are check-then-act pairs with no transaction: a delete
//! racing an update on the same id can make the update report success and
//! then recreate the hash, or make a get report `NotFound` after its
//! existence check passed. Callers that need stronger guarantees must add
//! them at the store level.

use std::collections::HashSet;

use thiserror::Error;

use stockd_core::{DomainError, StockId};
use stockd_inventory::{StockInput, StockRecord};

use crate::keys;
use crate::kv::{KeyValueStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Stateless stock service: create, list, get, update and delete records.
#[derive(Debug, Clone)]
pub struct StockRepository<S> {
    store: S,
}

impl<S> StockRepository<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assign a fresh id and write all fields in one store call.
    pub fn create(&self, input: StockInput) -> RepositoryResult<StockRecord> {
        let id = StockId::new(self.store.incr(keys::ID_COUNTER_KEY)?);
        self.store.hset_all(&keys::record_key(id), &input.to_fields())?;

        tracing::info!(stock_id = %id, product_id = input.product_id, "stock record created");
        Ok(input.with_id(id))
    }

    /// All records, in whatever order the store enumerates them.
    pub fn list(&self) -> RepositoryResult<Vec<StockRecord>> {
        let found = self.store.scan_prefix(keys::RECORD_PREFIX)?;
        let mut records = Vec::with_capacity(found.len());
        let mut seen = HashSet::with_capacity(found.len());

        for key in found {
            let Some(id) = keys::parse_record_key(&key) else {
                tracing::warn!(%key, "skipping key with non-numeric id suffix");
                continue;
            };
            if !seen.insert(id) {
                continue;
            }

            let fields = self.store.hgetall(&key)?;
            if fields.is_empty() {
                // Deleted between enumeration and fetch.
                continue;
            }
            records.push(StockRecord::decode(id, &key, &fields)?);
        }

        tracing::debug!(count = records.len(), "listed stock records");
        Ok(records)
    }

    pub fn get(&self, id: StockId) -> RepositoryResult<StockRecord> {
        let key = keys::record_key(id);
        if !self.store.exists(&key)? {
            return Err(DomainError::not_found().into());
        }

        let fields = self.store.hgetall(&key)?;
        if fields.is_empty() {
            return Err(DomainError::not_found().into());
        }

        tracing::debug!(stock_id = %id, "fetched stock record");
        Ok(StockRecord::decode(id, &key, &fields)?)
    }

    /// Overwrite all fields of an existing record; the id never changes.
    pub fn update(&self, id: StockId, input: StockInput) -> RepositoryResult<StockRecord> {
        let key = keys::record_key(id);
        if !self.store.exists(&key)? {
            return Err(DomainError::not_found().into());
        }

        self.store.hset_all(&key, &input.to_fields())?;

        tracing::debug!(stock_id = %id, "updated stock record");
        Ok(input.with_id(id))
    }

    pub fn delete(&self, id: StockId) -> RepositoryResult<()> {
        let key = keys::record_key(id);
        if !self.store.exists(&key)? {
            return Err(DomainError::not_found().into());
        }

        self.store.del(&key)?;

        tracing::info!(stock_id = %id, "stock record deleted");
        Ok(())
    }

    /// Check that the backing store answers.
    pub fn ping(&self) -> RepositoryResult<()> {
        Ok(self.store.ping()?)
    }
}
