use super::types::{request, response};
use crate::{
    modules::{eater::repository, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let eater = user::repository::find_eater_by_id(&ctx.db_conn.pool, payload.eater_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateProfile)?
        .ok_or(response::Error::EaterNotFound)?;

    repository::upsert(
        &ctx.db_conn.pool,
        repository::UpsertEaterProfilePayload {
            eater_id: eater.id,
            display_name: payload.display_name,
            phone: payload.phone,
            favorite_cuisine: payload.favorite_cuisine,
            note: payload.note,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)
    .map(response::Success::ProfileUpdated)
}
