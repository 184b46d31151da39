use super::types::{request, response};
use crate::{modules::auth::service as auth, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    auth::issue(&ctx.auth.secret, payload.subject)
        .map(response::Success::Token)
        .map_err(|_| response::Error::FailedToIssueToken)
}
