use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health)).with_state(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = OK, description = "The process is up", example = json!({"status": "ok"}))
    ),
    tag = "util"
)]
pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
