use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{auth, eater, maker, meal, order, review};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/meals", meal::get_router())
        .nest("/orders", order::get_router())
        .nest("/reviews", review::get_router())
        .merge(maker::get_router())
        .merge(eater::get_router())
}
