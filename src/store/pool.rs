//! Connection pool lifecycle and schema bootstrap.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Embedded schema, applied idempotently on startup.
pub const SCHEMA_SQL: &str = include_str!("../../schema.sql");

/// Connect to the store at `url` and apply the schema.
///
/// Foreign keys are enabled on every connection so the cascade from
/// `translation_keys` to `translations` is live.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    tracing::info!(url, "connected to store");
    Ok(pool)
}

/// Open a private in-memory database with the schema applied.
///
/// Capped at one connection: each SQLite in-memory connection is its own
/// database, so a second connection would see an empty schema.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    Ok(pool)
}

/// Apply the embedded schema. All statements are `IF NOT EXISTS`.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
