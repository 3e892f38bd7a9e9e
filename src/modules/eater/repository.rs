use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, FromRow)]
pub struct EaterProfile {
    pub eater_id: i64,
    pub display_name: String,
    pub phone: Option<String>,
    pub favorite_cuisine: Option<String>,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub struct UpsertEaterProfilePayload {
    pub eater_id: i64,
    pub display_name: String,
    pub phone: Option<String>,
    pub favorite_cuisine: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_by_eater_id<'e, E: PgExecutor<'e>>(
    e: E,
    eater_id: i64,
) -> Result<Option<EaterProfile>> {
    sqlx::query_as::<_, EaterProfile>("SELECT * FROM eater_profiles WHERE eater_id = $1")
        .bind(eater_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching profile of eater {}: {}",
                eater_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn create_if_missing<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpsertEaterProfilePayload,
) -> Result<EaterProfile> {
    sqlx::query_as::<_, EaterProfile>(
        "
        WITH inserted AS (
            INSERT INTO eater_profiles (eater_id, display_name, phone, favorite_cuisine, note)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (eater_id) DO NOTHING
            RETURNING *
        )
        SELECT * FROM inserted
        UNION ALL
        SELECT * FROM eater_profiles WHERE eater_id = $1
        LIMIT 1
        ",
    )
    .bind(payload.eater_id)
    .bind(payload.display_name)
    .bind(payload.phone)
    .bind(payload.favorite_cuisine)
    .bind(payload.note)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an eater profile: {}", err);
        Error::UnexpectedError
    })
}

pub async fn upsert<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpsertEaterProfilePayload,
) -> Result<EaterProfile> {
    sqlx::query_as::<_, EaterProfile>(
        "
        INSERT INTO eater_profiles (eater_id, display_name, phone, favorite_cuisine, note)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (eater_id) DO UPDATE SET
            display_name = EXCLUDED.display_name,
            phone = EXCLUDED.phone,
            favorite_cuisine = EXCLUDED.favorite_cuisine,
            note = EXCLUDED.note,
            updated_at = NOW()
        RETURNING *
        ",
    )
    .bind(payload.eater_id)
    .bind(payload.display_name)
    .bind(payload.phone)
    .bind(payload.favorite_cuisine)
    .bind(payload.note)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating an eater profile: {}", err);
        Error::UnexpectedError
    })
}
