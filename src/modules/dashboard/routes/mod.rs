mod order_stats;
mod stats;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(stats::get_router())
        .merge(order_stats::get_router())
}
