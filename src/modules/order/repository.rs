use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::str::FromStr;

use crate::utils::database;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("pending"),
            OrderStatus::Preparing => String::from("preparing"),
            OrderStatus::Ready => String::from("ready"),
            OrderStatus::Completed => String::from("completed"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

#[derive(Serialize, Clone, Debug, FromRow)]
pub struct Order {
    pub id: i64,
    pub maker_id: i64,
    pub eater_id: Option<i64>,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub price: f64,
    pub order_time: DateTime<Utc>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct CreateOrderPayload {
    pub maker_id: i64,
    pub eater_id: Option<i64>,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub price: f64,
    pub order_time: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Error {
    UniqueViolation,
    UnexpectedError,
}

/// New orders always start out as [`OrderStatus::Pending`].
pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO maker_orders (
            maker_id,
            eater_id,
            order_code,
            eater_name,
            meal_name,
            image_data,
            price,
            order_time,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        ",
    )
    .bind(payload.maker_id)
    .bind(payload.eater_id)
    .bind(payload.order_code)
    .bind(payload.eater_name)
    .bind(payload.meal_name)
    .bind(payload.image_data)
    .bind(payload.price)
    .bind(payload.order_time)
    .bind(OrderStatus::Pending)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::UniqueViolation;
        }
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM maker_orders WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_order_code<'e, E: PgExecutor<'e>>(
    e: E,
    order_code: String,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM maker_orders WHERE order_code = $1")
        .bind(order_code)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by order code: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub struct FindManyAsMakerFilters {
    pub maker_id: i64,
    pub status: Option<OrderStatus>,
}

/// Most recently created first.
pub async fn find_many_as_maker<'e, E: PgExecutor<'e>>(
    e: E,
    filters: FindManyAsMakerFilters,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT *
        FROM maker_orders
        WHERE
            maker_id = $1
            AND ($2::order_status IS NULL OR status = $2)
        ORDER BY created_at DESC, id DESC
        ",
    )
    .bind(filters.maker_id)
    .bind(filters.status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch maker orders: {}", err);
        Error::UnexpectedError
    })
}

pub struct FindManyAsEaterFilters {
    pub eater_id: i64,
    pub status: Option<OrderStatus>,
}

/// Most recent `order_time` first.
pub async fn find_many_as_eater<'e, E: PgExecutor<'e>>(
    e: E,
    filters: FindManyAsEaterFilters,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT *
        FROM maker_orders
        WHERE
            eater_id = $1
            AND ($2::order_status IS NULL OR status = $2)
        ORDER BY order_time DESC, id DESC
        ",
    )
    .bind(filters.eater_id)
    .bind(filters.status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch eater orders: {}", err);
        Error::UnexpectedError
    })
}

/// Overwrites the status unconditionally; no transition is rejected.
pub async fn update_order_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    status: OrderStatus,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE maker_orders
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(status)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update order status: {}", err);
        Error::UnexpectedError
    })
}
