use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.db
        .find_payments(payload.filters.email)
        .await
        .map(response::Success::Payments)
        .map_err(|_| response::Error::FailedToFetchPayments)
}
