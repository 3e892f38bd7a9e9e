use super::types::{request, response};
use crate::{
    modules::{auth::service::password, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if user::repository::find_by_email(&ctx.db_conn.pool, payload.email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let role = payload.role();

    user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            email: payload.email,
            password_hash: password::hash(&payload.password),
            role,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::UniqueViolation => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })
    .map(response::Success::Registered)
}
