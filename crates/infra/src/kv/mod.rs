//! Key-value store boundary.
//!
//! The stock service only needs a handful of primitives from its backend:
//! atomic counters, hash-like field maps, existence checks, deletion and
//! prefix enumeration. This module names those primitives without making any
//! storage assumptions.

pub mod in_memory;
#[cfg(feature = "redis")]
pub mod redis;
pub mod r#trait;

pub use in_memory::InMemoryKeyValueStore;
#[cfg(feature = "redis")]
pub use self::redis::RedisKeyValueStore;
pub use r#trait::{KeyValueStore, StoreError};
