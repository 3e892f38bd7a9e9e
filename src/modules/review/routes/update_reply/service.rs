use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::update_reply(&ctx.db_conn.pool, payload.id, payload.body.reply)
        .await
        .map_err(|_| response::Error::FailedToUpdateReply)?
        .ok_or(response::Error::ReviewNotFound)
        .map(response::Success::ReplyUpdated)
}
