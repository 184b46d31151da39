use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{auth, cart, dashboard, menu, payment, review, user};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Bistro is running" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .merge(auth::get_router())
        .merge(user::get_router())
        .merge(menu::get_router())
        .merge(review::get_router())
        .merge(cart::get_router())
        .merge(payment::get_router())
        .merge(dashboard::get_router())
}
