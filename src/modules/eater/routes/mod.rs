mod orders;
mod profile;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/eater",
        Router::new()
            .nest("/orders", orders::get_router())
            .nest("/profile", profile::get_router()),
    )
}
