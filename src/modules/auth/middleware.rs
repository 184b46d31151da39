use super::service::{self, Claims};
use crate::modules::user::{self, repository::User};
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use serde_json::json;
use std::sync::Arc;

enum Error {
    MissingToken,
    InvalidToken,
}

fn get_token_from_header(header: &str) -> Result<&str, Error> {
    let mut parts = header.split(' ');

    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) if !token.is_empty() => Ok(token),
        _ => Err(Error::InvalidToken),
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized access" })),
    )
        .into_response()
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Forbidden access" })),
    )
        .into_response()
}

async fn get_context(parts: &mut Parts) -> Result<Arc<Context>, Response> {
    parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map(|Extension(ctx)| ctx)
        .map_err(|err| {
            tracing::error!("Request context is missing: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        })
}

async fn get_claims_from_request(ctx: &Context, parts: &mut Parts) -> Result<Claims, Error> {
    let headers = parts
        .extract::<HeaderMap>()
        .await
        .map_err(|_| Error::MissingToken)?;

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(Error::MissingToken)?;

    let token = get_token_from_header(auth_header)?;

    service::verify(&ctx.auth.secret, token).map_err(|err| {
        tracing::debug!("Rejected access token: {:?}", err);
        Error::InvalidToken
    })
}

/// A request carrying a valid bearer token.
#[derive(Clone, Debug)]
pub struct Auth {
    pub claims: Claims,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = get_context(parts).await?;

        get_claims_from_request(&ctx, parts)
            .await
            .map(|claims| Self { claims })
            .map_err(|err| {
                if let Error::MissingToken = err {
                    tracing::debug!("Request without an authorization header");
                }
                unauthorized()
            })
    }
}

/// A request whose token subject resolves to an admin user.
#[derive(Clone, Debug)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Auth { claims } = Auth::from_request_parts(parts, state).await?;
        let ctx = get_context(parts).await?;

        let email = claims.email().ok_or_else(forbidden)?.to_string();

        let user = ctx
            .db
            .find_user_by_email(email)
            .await
            .map_err(|_| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to verify user role" })),
                )
                    .into_response()
            })?
            .ok_or_else(forbidden)?;

        if !user::repository::is_admin(&user) {
            return Err(forbidden());
        }

        Ok(Self { user })
    }
}
