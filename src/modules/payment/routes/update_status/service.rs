use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.db
        .update_payment_status_by_id(payload.id, payload.body.status)
        .await
        .map(response::Success::StatusUpdated)
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)
}
