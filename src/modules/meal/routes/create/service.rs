use super::types::{request, response};
use crate::{
    modules::{meal::repository, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let maker = user::repository::find_maker_by_id(&ctx.db_conn.pool, payload.maker_id)
        .await
        .map_err(|_| response::Error::FailedToCreateMeal)?
        .ok_or(response::Error::MakerNotFound)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMealPayload {
            maker_id: maker.id,
            title: payload.title,
            description: payload.description,
            price: payload.price,
            image_data: payload.image_data,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMeal)
    .map(response::Success::MealCreated)
}
