use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::AppState;
use super::http::handlers::feed::{invalid_method, show_feed, submit_post};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(show_feed).post(submit_post).fallback(invalid_method),
        )
        .route("/healthz", get(health_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}
