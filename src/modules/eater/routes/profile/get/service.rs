use super::types::{request, response};
use crate::{
    modules::{
        eater::{repository, service as eater_service},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let eater = user::repository::find_eater_by_id(&ctx.db_conn.pool, payload.filters.eater_id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::EaterNotFound)?;

    match repository::find_by_eater_id(&ctx.db_conn.pool, eater.id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
    {
        Some(profile) => Ok(response::Success::Profile(profile)),
        None => {
            tracing::debug!("Creating default profile for eater {}", eater.id);

            repository::create_if_missing(
                &ctx.db_conn.pool,
                eater_service::default_profile(&eater),
            )
            .await
            .map_err(|_| response::Error::FailedToFetchProfile)
            .map(response::Success::Profile)
        }
    }
}
