mod create;
mod done;
mod history;
mod update_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(done::get_router())
        .merge(history::get_router())
        .merge(update_status::get_router())
}
