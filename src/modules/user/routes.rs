use super::repository::{self, Role};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    modules::auth::middleware::{AdminAuth, Auth},
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

fn access_denied() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Forbidden access" })),
    )
        .into_response()
}

async fn check_admin(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path(email): Path<String>,
) -> Response {
    if auth.claims.email() != Some(email.as_str()) {
        return access_denied();
    }

    match ctx.db.find_user_by_email(email).await {
        Ok(user) => {
            let admin = user.map(|user| repository::is_admin(&user)).unwrap_or(false);
            (StatusCode::OK, Json(json!({ "admin": admin }))).into_response()
        }
        Err(_) => failed("Failed to fetch user"),
    }
}

async fn promote_to_admin(
    State(ctx): State<Arc<Context>>,
    admin: AdminAuth,
    Path(id): Path<String>,
) -> Response {
    tracing::info!("{} is promoting user {} to admin", admin.user.email, id);

    match ctx.db.set_user_role_by_id(id, Role::Admin).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to update user role"),
    }
}

async fn list_users(State(ctx): State<Arc<Context>>, _: AdminAuth) -> Response {
    match ctx.db.find_users().await {
        Ok(users) => (StatusCode::OK, Json(json!(users))).into_response(),
        Err(_) => failed("Failed to fetch users"),
    }
}

#[derive(Deserialize, Validate)]
struct CreateUserPayload {
    #[validate(email)]
    email: String,
    name: Option<String>,
    photo: Option<String>,
}

async fn create_user(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<CreateUserPayload>,
) -> Response {
    if let Err(response) = validation::validate(&payload) {
        return response;
    }

    match ctx
        .db
        .create_user(repository::CreateUserPayload {
            email: payload.email,
            name: payload.name,
            photo: payload.photo,
        })
        .await
    {
        Ok(Some(result)) => (StatusCode::OK, Json(json!(result))).into_response(),
        Ok(None) => (
            StatusCode::OK,
            Json(json!({ "message": "User already exists", "inserted_id": null })),
        )
            .into_response(),
        Err(_) => failed("Failed to create user"),
    }
}

async fn delete_user(
    State(ctx): State<Arc<Context>>,
    admin: AdminAuth,
    Path(id): Path<String>,
) -> Response {
    tracing::info!("{} is deleting user {}", admin.user.email, id);

    match ctx.db.delete_user_by_id(id).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to delete user"),
    }
}

async fn get_user_by_email(
    State(ctx): State<Arc<Context>>,
    _: Auth,
    Path(email): Path<String>,
) -> Response {
    match ctx.db.find_user_by_email(email).await {
        Ok(user) => (StatusCode::OK, Json(json!(user))).into_response(),
        Err(_) => failed("Failed to fetch user"),
    }
}

#[derive(Deserialize)]
struct UpdateUserPayload {
    name: Option<String>,
    photo: Option<String>,
}

async fn update_user_by_id(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserPayload>,
) -> Response {
    let user = match ctx.db.find_user_by_id(id.clone()).await {
        Ok(user) => user,
        Err(_) => return failed("Failed to update user"),
    };

    if let Some(user) = user {
        if auth.claims.email() != Some(user.email.as_str()) {
            return access_denied();
        }
    }

    match ctx
        .db
        .update_user_by_id(
            id,
            repository::UpdateUserPayload {
                name: payload.name,
                photo: payload.photo,
            },
        )
        .await
    {
        Ok(result) => (StatusCode::OK, Json(json!(result))).into_response(),
        Err(_) => failed("Failed to update user"),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", delete(delete_user))
        .route(
            "/user/admin/:id",
            get(check_admin).patch(promote_to_admin),
        )
        .route("/user/:id", get(get_user_by_email).patch(update_user_by_id))
}
