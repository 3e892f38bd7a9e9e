use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let status = payload
        .body
        .status()
        .ok_or(response::Error::FailedToUpdateOrderStatus)?;

    repository::update_order_status(&ctx.db_conn.pool, payload.id, status)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)
        .map(response::Success::OrderStatusUpdated)
}
