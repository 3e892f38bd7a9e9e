use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, FromRow)]
pub struct Meal {
    pub id: i64,
    pub maker_id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_data: String,
    pub created_at: DateTime<Utc>,
}

pub struct CreateMealPayload {
    pub maker_id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_data: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMealPayload) -> Result<Meal> {
    sqlx::query_as::<_, Meal>(
        "
        INSERT INTO meals (maker_id, title, description, price, image_data)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(payload.maker_id)
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_data)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a meal: {}", err);
        Error::UnexpectedError
    })
}

pub struct FindManyFilters {
    pub maker_id: Option<i64>,
}

/// Newest first.
pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: FindManyFilters,
) -> Result<Vec<Meal>> {
    sqlx::query_as::<_, Meal>(
        "
        SELECT *
        FROM meals
        WHERE $1::BIGINT IS NULL OR maker_id = $1
        ORDER BY created_at DESC, id DESC
        ",
    )
    .bind(filters.maker_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many meals: {}", err);
        Error::UnexpectedError
    })
}
