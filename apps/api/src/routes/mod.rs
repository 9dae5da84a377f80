pub mod health;
pub mod screening;

use axum::{
    routing::{get, post},
    Router,
};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/screening/compare",
            post(screening::handle_compare),
        )
        .route(
            "/api/v1/screening/compare-raw",
            post(screening::handle_compare_raw),
        )
}
