//! Strongly-typed identifiers used across the domain.

use core::num::IntErrorKind;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stock record.
///
/// Assigned by the store's atomic counter, so real ids start at 1 and are
/// never reused. Lookups accept any integer; ids that were never issued are
/// simply absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockId(i64);

impl StockId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for StockId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for StockId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<StockId> for i64 {
    fn from(value: StockId) -> Self {
        value.0
    }
}

impl FromStr for StockId {
    type Err = DomainError;

    /// An integer outside the `i64` range is `NotFound`: the counter can
    /// never issue it, so no record can live there.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DomainError::not_found(),
            _ => DomainError::invalid_id(format!("StockId: {e}")),
        })?;
        Ok(Self(value))
    }
}
