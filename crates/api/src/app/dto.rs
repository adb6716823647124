use serde::{Deserialize, Serialize};

use stockd_inventory::{StockInput, StockRecord};

pub const DELETED_MESSAGE: &str = "Stock information deleted";

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRequest {
    #[serde(alias = "product_id")]
    pub product_id: i64,
    pub quantity: i64,
    pub category: String,
}

impl From<StockRequest> for StockInput {
    fn from(body: StockRequest) -> Self {
        StockInput::new(body.product_id, body.quantity, body.category)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub category: String,
}

impl From<StockRecord> for StockResponse {
    fn from(rm: StockRecord) -> Self {
        Self {
            id: rm.id.get(),
            product_id: rm.product_id,
            quantity: rm.quantity,
            category: rm.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
