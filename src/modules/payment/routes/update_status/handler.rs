use super::{service::service, types::request};
use crate::{modules::auth::middleware::AdminAuth, types::Context, utils::extract::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    admin: AdminAuth,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<request::Body>,
) -> impl IntoResponse {
    tracing::info!("{} is updating the status of order {}", admin.user.email, id);
    service(ctx, request::Payload { id, body }).await
}
