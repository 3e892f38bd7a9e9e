use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, FromRow)]
pub struct MakerProfile {
    pub maker_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub location: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub struct UpsertMakerProfilePayload {
    pub maker_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub location: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_by_maker_id<'e, E: PgExecutor<'e>>(
    e: E,
    maker_id: i64,
) -> Result<Option<MakerProfile>> {
    sqlx::query_as::<_, MakerProfile>("SELECT * FROM maker_profiles WHERE maker_id = $1")
        .bind(maker_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching profile of maker {}: {}",
                maker_id,
                err
            );
            Error::UnexpectedError
        })
}

/// Inserts the profile unless the maker already has one. Returns whichever
/// profile is stored afterwards.
pub async fn create_if_missing<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpsertMakerProfilePayload,
) -> Result<MakerProfile> {
    sqlx::query_as::<_, MakerProfile>(
        "
        WITH inserted AS (
            INSERT INTO maker_profiles (maker_id, name, email, phone, country, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (maker_id) DO NOTHING
            RETURNING *
        )
        SELECT * FROM inserted
        UNION ALL
        SELECT * FROM maker_profiles WHERE maker_id = $1
        LIMIT 1
        ",
    )
    .bind(payload.maker_id)
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.country)
    .bind(payload.location)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a maker profile: {}", err);
        Error::UnexpectedError
    })
}

/// Replaces every field of the maker's profile, creating it if needed.
pub async fn upsert<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpsertMakerProfilePayload,
) -> Result<MakerProfile> {
    sqlx::query_as::<_, MakerProfile>(
        "
        INSERT INTO maker_profiles (maker_id, name, email, phone, country, location)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (maker_id) DO UPDATE SET
            name = EXCLUDED.name,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone,
            country = EXCLUDED.country,
            location = EXCLUDED.location,
            updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(payload.maker_id)
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.country)
    .bind(payload.location)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating a maker profile: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<MakerProfile>> {
    sqlx::query_as::<_, MakerProfile>("SELECT * FROM maker_profiles ORDER BY maker_id")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching maker profiles: {}", err);
            Error::UnexpectedError
        })
}
