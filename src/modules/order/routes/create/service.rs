use super::types::{request, response};
use crate::{
    modules::{order::repository, user},
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let maker = user::repository::find_maker_by_id(&ctx.db_conn.pool, payload.maker_id)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .ok_or(response::Error::MakerNotFound)?;

    if repository::find_by_order_code(&ctx.db_conn.pool, payload.order_code.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .is_some()
    {
        return Err(response::Error::OrderCodeAlreadyExists);
    }

    if let Some(eater_id) = payload.eater_id {
        user::repository::find_by_id(&ctx.db_conn.pool, eater_id)
            .await
            .map_err(|_| response::Error::FailedToCreateOrder)?
            .ok_or(response::Error::EaterNotFound)?;
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateOrderPayload {
            maker_id: maker.id,
            eater_id: payload.eater_id,
            order_code: payload.order_code,
            eater_name: payload.eater_name,
            meal_name: payload.meal_name,
            image_data: payload.image_data,
            price: payload.price,
            order_time: payload.order_time.unwrap_or_else(Utc::now),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::UniqueViolation => response::Error::OrderCodeAlreadyExists,
        repository::Error::UnexpectedError => response::Error::FailedToCreateOrder,
    })
    .map(response::Success::OrderCreated)
}
