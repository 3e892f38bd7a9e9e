use super::types::{request, response};
use crate::{
    modules::{
        order::{repository, service::StatusFilter},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let maker = user::repository::find_maker_by_id(&ctx.db_conn.pool, payload.filters.maker_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?
        .ok_or(response::Error::MakerNotFound)?;

    let status_filter = StatusFilter::parse(payload.filters.status_filter.as_deref());
    if status_filter == StatusFilter::Nothing {
        return Ok(response::Success::Orders(vec![]));
    }

    repository::find_many_as_maker(
        &ctx.db_conn.pool,
        repository::FindManyAsMakerFilters {
            maker_id: maker.id,
            status: status_filter.status(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrders)
    .map(response::Success::Orders)
}
