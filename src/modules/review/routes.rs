use crate::types::Context;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

async fn list_reviews(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match ctx.db.find_reviews().await {
        Ok(reviews) => (StatusCode::OK, Json(json!(reviews))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch reviews" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/reviews", get(list_reviews))
}
