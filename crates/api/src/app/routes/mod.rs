use axum::Router;

pub mod stock;
pub mod system;

/// Router for all stock endpoints.
pub fn router() -> Router {
    Router::new().merge(stock::router())
}
