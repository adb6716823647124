use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockd_infra::StoreBackend;

use crate::app::errors;
use crate::app::services::AppServices;

/// Liveness plus a store round-trip.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    if let Err(e) = services.ping().await {
        return errors::service_error_to_response(e);
    }

    let store = match services.backend() {
        StoreBackend::Redis => "redis",
        StoreBackend::Memory => "memory",
    };
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok", "store": store }))).into_response()
}
