use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockd_core::StockId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/stock/", post(create_stock).get(list_stock))
        .route("/stock", post(create_stock).get(list_stock))
        .route(
            "/stock/:id",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
}

fn parse_id(id: &str) -> Result<StockId, axum::response::Response> {
    id.parse()
        .map_err(errors::domain_error_to_response)
}

pub async fn create_stock(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::StockRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.create(body.into()).await {
        Ok(record) => (StatusCode::OK, Json(dto::StockResponse::from(record))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list().await {
        Ok(records) => {
            let items = records
                .into_iter()
                .map(dto::StockResponse::from)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.get(id).await {
        Ok(record) => (StatusCode::OK, Json(dto::StockResponse::from(record))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::StockRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.update(id, body.into()).await {
        Ok(record) => (StatusCode::OK, Json(dto::StockResponse::from(record))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::MessageResponse {
                message: dto::DELETED_MESSAGE,
            }),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
