//! Stock domain: records, caller input and the string field codec used to
//! persist them as hash-like store entries.

pub mod stock;

pub use stock::{StockInput, StockRecord, fields};
