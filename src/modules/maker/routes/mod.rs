mod list;
mod profile;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/makers", list::get_router())
        .nest("/maker", profile::get_router())
}
