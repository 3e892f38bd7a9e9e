use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::fmt;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug)]
pub enum Error {
    Connect(sqlx::Error),
    Migrate(MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "Error connecting to database: {}", err),
            Self::Migrate(err) => write!(f, "Failed to run database migrations: {}", err),
        }
    }
}

impl std::error::Error for Error {}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("{:}", err);
            Error::Connect(err)
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}

/// Whether a failed statement was rejected by a unique index.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
