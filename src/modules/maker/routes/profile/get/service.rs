use super::types::{request, response};
use crate::{
    modules::{
        maker::{repository, service as maker_service},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let maker = user::repository::find_maker_by_id(&ctx.db_conn.pool, payload.filters.maker_id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::MakerNotFound)?;

    if let Some(profile) = repository::find_by_maker_id(&ctx.db_conn.pool, maker.id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
    {
        return Ok(response::Success::Profile(profile));
    }

    tracing::debug!("Creating default profile for maker {}", maker.id);

    repository::create_if_missing(&ctx.db_conn.pool, maker_service::default_profile(&maker))
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)
        .map(response::Success::Profile)
}
