use super::types::{request, response};
use crate::{
    modules::{
        eater::service as eater_service,
        order::{self, service::StatusFilter},
        review, user,
    },
    types::Context,
};
use std::{collections::HashMap, sync::Arc};

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let eater = user::repository::find_eater_by_id(&ctx.db_conn.pool, payload.filters.eater_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?
        .ok_or(response::Error::EaterNotFound)?;

    let status_filter = StatusFilter::parse(payload.filters.status_filter.as_deref());
    if status_filter == StatusFilter::Nothing {
        return Ok(response::Success::Orders(vec![]));
    }

    let orders = order::repository::find_many_as_eater(
        &ctx.db_conn.pool,
        order::repository::FindManyAsEaterFilters {
            eater_id: eater.id,
            status: status_filter.status(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrders)?;

    let snippets = if orders.is_empty() {
        HashMap::new()
    } else {
        let order_ids = orders.iter().map(|order| order.id).collect::<Vec<_>>();
        review::repository::find_many_by_order_ids(&ctx.db_conn.pool, order_ids)
            .await
            .map(review::service::snippets_by_order_id)
            .map_err(|_| response::Error::FailedToFetchOrders)?
    };

    Ok(response::Success::Orders(eater_service::with_reviews(
        orders, snippets,
    )))
}
