use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.db
        .get_admin_stats()
        .await
        .map_err(|_| response::Error::FailedToFetchStats)
        .map(response::Success::Stats)
}
