use super::types::{request, response};
use crate::{
    modules::{review::repository, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let maker = user::repository::find_maker_by_id(&ctx.db_conn.pool, payload.filters.maker_id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)?
        .ok_or(response::Error::MakerNotFound)?;

    repository::find_many_by_maker_id(&ctx.db_conn.pool, maker.id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)
        .map(response::Success::Reviews)
}
