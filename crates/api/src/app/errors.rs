use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockd_core::DomainError;
use stockd_infra::{RepositoryError, StoreError};

use crate::app::services::ServiceError;

pub const NOT_FOUND_MESSAGE: &str = "Stock information not found";

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Repository(RepositoryError::Domain(e)) => domain_error_to_response(e),
        ServiceError::Repository(RepositoryError::Store(e)) => {
            tracing::error!(error = %e, "stock store call failed");
            match e {
                StoreError::Connection(msg) => {
                    json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", msg)
                }
                StoreError::Command(msg) => {
                    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
                }
            }
        }
        ServiceError::Task(msg) => {
            tracing::error!(error = %msg, "stock store task failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => not_found(),
        DomainError::CorruptRecord { .. } => {
            tracing::error!(error = %err, "undecodable stock record");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "corrupt_record", err.to_string())
        }
        DomainError::InvalidId(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_id", msg)
        }
    }
}

/// `detail` carries the same text for clients that read that key.
pub fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "error": "not_found",
            "message": NOT_FOUND_MESSAGE,
            "detail": NOT_FOUND_MESSAGE,
        })),
    )
        .into_response()
}

/// Keep the extractor's status (400/415/422) but use our error body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
