use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockd_core::{DomainError, DomainResult, StockId};

/// Names of the string-encoded sub-fields of a stored record.
pub mod fields {
    pub const PRODUCT_ID: &str = "productId";
    pub const QUANTITY: &str = "quantity";
    pub const CATEGORY: &str = "category";

    pub const ALL: [&str; 3] = [PRODUCT_ID, QUANTITY, CATEGORY];
}

/// Caller-supplied stock data (everything except the id).
///
/// No validation beyond types: quantity may be zero or negative, category is
/// free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInput {
    pub product_id: i64,
    pub quantity: i64,
    pub category: String,
}

impl StockInput {
    pub fn new(product_id: i64, quantity: i64, category: impl Into<String>) -> Self {
        Self {
            product_id,
            quantity,
            category: category.into(),
        }
    }

    /// Encode into the full set of string fields written on create/update.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::PRODUCT_ID, self.product_id.to_string()),
            (fields::QUANTITY, self.quantity.to_string()),
            (fields::CATEGORY, self.category.clone()),
        ]
    }

    /// Decode a stored field map.
    ///
    /// `key` is only used to describe the failing entry.
    pub fn from_fields(key: &str, map: &HashMap<String, String>) -> DomainResult<Self> {
        Ok(Self {
            product_id: int_field(key, map, fields::PRODUCT_ID)?,
            quantity: int_field(key, map, fields::QUANTITY)?,
            category: field(key, map, fields::CATEGORY)?.to_string(),
        })
    }

    pub fn with_id(self, id: StockId) -> StockRecord {
        StockRecord {
            id,
            product_id: self.product_id,
            quantity: self.quantity,
            category: self.category,
        }
    }
}

/// A persisted stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: StockId,
    pub product_id: i64,
    pub quantity: i64,
    pub category: String,
}

impl StockRecord {
    pub fn decode(id: StockId, key: &str, map: &HashMap<String, String>) -> DomainResult<Self> {
        StockInput::from_fields(key, map).map(|input| input.with_id(id))
    }
}

fn field<'a>(key: &str, map: &'a HashMap<String, String>, name: &str) -> DomainResult<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| DomainError::corrupt(key, format!("missing field {name}")))
}

fn int_field(key: &str, map: &HashMap<String, String>, name: &str) -> DomainResult<i64> {
    field(key, map, name)?
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::corrupt(key, format!("invalid integer in {name}")))
}
