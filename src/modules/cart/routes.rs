use std::sync::Arc;

use super::repository;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    types::Context,
    utils::{extract::JsonBody, validation},
};

fn failed(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

#[derive(Deserialize)]
struct CartFilters {
    email: Option<String>,
}

async fn list_cart_items(
    State(ctx): State<Arc<Context>>,
    Query(filters): Query<CartFilters>,
) -> Response {
    // carts are owner-scoped, no owner means nothing to show
    let Some(email) = filters.email else {
        return (StatusCode::OK, Json(json!([]))).into_response();
    };

    match ctx.db.find_cart_items_by_email(email).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))).into_response(),
        Err(_) => failed("Failed to fetch cart"),
    }
}

#[derive(Deserialize, Validate)]
struct AddCartItemPayload {
    #[validate(length(min = 1))]
    item: String,
    #[validate(email)]
    email: String,
    name: Option<String>,
    image: Option<String>,
    price: Option<BigDecimal>,
}

async fn add_cart_item(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<AddCartItemPayload>,
) -> Response {
    if let Err(response) = validation::validate(&payload) {
        return response;
    }

    match ctx
        .db
        .create_cart_item(repository::CreateCartItemPayload {
            item: payload.item,
            email: payload.email,
            name: payload.name,
            image: payload.image,
            price: payload.price,
        })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to add item to cart"),
    }
}

async fn remove_cart_item(State(ctx): State<Arc<Context>>, Path(id): Path<String>) -> Response {
    match ctx.db.delete_cart_item_by_id(id).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to remove item from cart"),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/carts", get(list_cart_items).post(add_cart_item))
        .route("/carts/:id", delete(remove_cart_item))
}
