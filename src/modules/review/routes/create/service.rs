use super::types::{request, response};
use crate::{
    modules::{
        order,
        review::{repository, service as review_service},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let order = order::repository::find_by_id(&ctx.db_conn.pool, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToCreateReview)?
        .ok_or(response::Error::OrderNotFound)?;

    let review = review_service::snapshot(&order, payload.rating, payload.comment).map_err(
        |err| match err {
            review_service::SnapshotError::OrderWithoutEater => response::Error::OrderWithoutEater,
        },
    )?;

    if repository::find_by_order_id(&ctx.db_conn.pool, order.id)
        .await
        .map_err(|_| response::Error::FailedToCreateReview)?
        .is_some()
    {
        return Err(response::Error::ReviewAlreadySubmitted);
    }

    repository::create(&ctx.db_conn.pool, review)
        .await
        .map_err(|err| match err {
            repository::Error::UniqueViolation => response::Error::ReviewAlreadySubmitted,
            repository::Error::UnexpectedError => response::Error::FailedToCreateReview,
        })
        .map(response::Success::ReviewCreated)
}
