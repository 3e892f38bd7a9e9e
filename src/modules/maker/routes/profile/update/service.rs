use super::types::{request, response};
use crate::{
    modules::{maker::repository, user},
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
        .map_err(|_| response::Error::FailedToUpdateProfile)?
        .ok_or(response::Error::MakerNotFound)?;

    repository::upsert(
        &ctx.db_conn.pool,
        repository::UpsertMakerProfilePayload {
            maker_id: maker.id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            country: payload.country,
            location: payload.location,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)
    .map(response::Success::ProfileUpdated)
}
