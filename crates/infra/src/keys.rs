//! Store key layout for stock records.
//!
//! - `stock:<id>`: one hash per record (`productId`, `quantity`, `category`)
//! - `stock_id`: the global id counter; it does not match the `stock:` prefix
//!   so enumeration never mistakes it for a record.

use stockd_core::StockId;

pub const NAMESPACE: &str = "stock";
pub const RECORD_PREFIX: &str = "stock:";
pub const ID_COUNTER_KEY: &str = "stock_id";

pub fn record_key(id: StockId) -> String {
    format!("{RECORD_PREFIX}{id}")
}

/// Derive the record id from a `stock:<id>` key.
///
/// Returns `None` for keys outside the namespace or with a non-integer suffix.
pub fn parse_record_key(key: &str) -> Option<StockId> {
    key.strip_prefix(RECORD_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_uses_namespace_prefix() {
        assert_eq!(record_key(StockId::new(12)), "stock:12");
        assert!(RECORD_PREFIX.starts_with(NAMESPACE));
    }

    #[test]
    fn parses_id_from_key_suffix() {
        assert_eq!(parse_record_key("stock:12"), Some(StockId::new(12)));
    }

    #[test]
    fn ignores_foreign_and_malformed_keys() {
        assert_eq!(parse_record_key("stock_id"), None);
        assert_eq!(parse_record_key("stock:abc"), None);
        assert_eq!(parse_record_key("other:1"), None);
    }

    #[test]
    fn counter_key_is_outside_record_prefix() {
        assert!(!ID_COUNTER_KEY.starts_with(RECORD_PREFIX));
    }
}
