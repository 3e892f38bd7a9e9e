use super::types::response;
use crate::{
    modules::{
        maker::{repository, service as maker_service},
        meal,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let profiles = repository::find_all(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchMakers)?;

    let meals = meal::repository::find_many(
        &ctx.db_conn.pool,
        meal::repository::FindManyFilters { maker_id: None },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMakers)?;

    Ok(response::Success::Makers(maker_service::summarize(
        profiles, meals,
    )))
}
