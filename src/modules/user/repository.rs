use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::str::FromStr;

use crate::utils::database;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Eater,
    Maker,
}

impl Default for Role {
    fn default() -> Self {
        Self::Eater
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "eater" => Ok(Self::Eater),
            "maker" => Ok(Self::Maker),
            _ => Err(()),
        }
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Self::Eater => String::from("eater"),
            Self::Maker => String::from("maker"),
        }
    }
}

#[derive(Serialize, Clone, Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The part of the email address before the `@`.
    pub fn email_local_part(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(self.email.as_str())
    }
}

pub struct CreateUserPayload {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug)]
pub enum Error {
    UniqueViolation,
    UnexpectedError,
}

pub async fn create<'e, E>(e: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (email, password_hash, role)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.role)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::UniqueViolation;
        }
        tracing::error!("Error occured while creating a user account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id_and_role<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    role: Role,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND role = $2")
        .bind(id)
        .bind(role)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching {} with id {}: {}",
                role.to_string(),
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_maker_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<User>> {
    find_by_id_and_role(e, id, Role::Maker).await
}

pub async fn find_eater_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<User>> {
    find_by_id_and_role(e, id, Role::Eater).await
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}
