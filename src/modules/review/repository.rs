use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};

use crate::utils::database;

type Result<T> = std::result::Result<T, Error>;

/// A review keeps its own copy of the order fields it was written against.
#[derive(Serialize, Clone, Debug, FromRow)]
pub struct Review {
    pub id: i64,
    pub maker_id: i64,
    pub eater_id: i64,
    pub order_id: i64,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub rating: i32,
    pub comment: String,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub struct CreateReviewPayload {
    pub maker_id: i64,
    pub eater_id: i64,
    pub order_id: i64,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug)]
pub enum Error {
    UniqueViolation,
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateReviewPayload) -> Result<Review> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO maker_reviews (
            maker_id,
            eater_id,
            order_id,
            order_code,
            eater_name,
            meal_name,
            image_data,
            rating,
            comment
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        ",
    )
    .bind(payload.maker_id)
    .bind(payload.eater_id)
    .bind(payload.order_id)
    .bind(payload.order_code)
    .bind(payload.eater_name)
    .bind(payload.meal_name)
    .bind(payload.image_data)
    .bind(payload.rating)
    .bind(payload.comment)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::UniqueViolation;
        }
        tracing::error!("Error occurred while trying to create a review: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: i64,
) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM maker_reviews WHERE order_id = $1")
        .bind(order_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching review for order {}: {}",
                order_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_order_ids<'e, E: PgExecutor<'e>>(
    e: E,
    order_ids: Vec<i64>,
) -> Result<Vec<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM maker_reviews WHERE order_id = ANY($1)")
        .bind(order_ids)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching reviews by order ids: {}", err);
            Error::UnexpectedError
        })
}

/// Most recently created first.
pub async fn find_many_by_maker_id<'e, E: PgExecutor<'e>>(
    e: E,
    maker_id: i64,
) -> Result<Vec<Review>> {
    sqlx::query_as::<_, Review>(
        "
        SELECT *
        FROM maker_reviews
        WHERE maker_id = $1
        ORDER BY created_at DESC, id DESC
        ",
    )
    .bind(maker_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching maker reviews: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_reply<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    reply: String,
) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>(
        "
        UPDATE maker_reviews
        SET reply = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(reply)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating review reply: {}", err);
        Error::UnexpectedError
    })
}
