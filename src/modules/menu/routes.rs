use super::repository;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    modules::auth::middleware::AdminAuth,
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

async fn list_menu(State(ctx): State<Arc<Context>>) -> Response {
    match ctx.db.find_menu_items().await {
        Ok(items) => (StatusCode::OK, Json(json!(items))).into_response(),
        Err(_) => failed("Failed to fetch menu"),
    }
}

async fn get_menu_item(State(ctx): State<Arc<Context>>, Path(id): Path<String>) -> Response {
    match ctx.db.find_menu_item_by_id(id).await {
        Ok(item) => (StatusCode::OK, Json(json!(item))).into_response(),
        Err(_) => failed("Failed to fetch menu item"),
    }
}

#[derive(Deserialize, Validate)]
struct CreateMenuItemPayload {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    category: String,
    price: BigDecimal,
    #[serde(default)]
    recipe: String,
    image: Option<String>,
}

async fn create_menu_item(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    JsonBody(payload): JsonBody<CreateMenuItemPayload>,
) -> Response {
    if let Err(response) = validation::validate(&payload) {
        return response;
    }

    match ctx
        .db
        .create_menu_item(repository::CreateMenuItemPayload {
            name: payload.name,
            category: payload.category,
            price: payload.price,
            recipe: payload.recipe,
            image: payload.image,
        })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to create menu item"),
    }
}

#[derive(Deserialize)]
struct UpdateMenuItemPayload {
    name: Option<String>,
    category: Option<String>,
    price: Option<BigDecimal>,
    recipe: Option<String>,
    image: Option<String>,
}

async fn update_menu_item(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateMenuItemPayload>,
) -> Response {
    match ctx
        .db
        .update_menu_item_by_id(
            id,
            repository::UpdateMenuItemPayload {
                name: payload.name,
                category: payload.category,
                price: payload.price,
                recipe: payload.recipe,
                image: payload.image,
            },
        )
        .await
    {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to update menu item"),
    }
}

async fn delete_menu_item(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    Path(id): Path<String>,
) -> Response {
    match ctx.db.delete_menu_item_by_id(id).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to delete menu item"),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/menu", get(list_menu).post(create_menu_item))
        .route("/menu/:id", get(get_menu_item))
        .route("/item/:id", patch(update_menu_item).delete(delete_menu_item))
}
