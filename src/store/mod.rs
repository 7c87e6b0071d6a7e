//! # Translation Store
//!
//! Data access layer over the backing SQLite store. All SQL lives in this
//! module tree; handlers only see domain types and [`ApiError`] values.
//!
//! The store is a thin handle around a connection pool and is cheap to
//! clone. It is injected into the HTTP layer at startup rather than accessed
//! as an ambient singleton, so tests can substitute an in-memory store.

mod keys;
mod pool;
mod translations;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiResult;

pub use pool::SCHEMA_SQL;

/// A translation key with its nested per-language values.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationKey {
    pub id: String,
    pub key: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub translations: Vec<TranslationEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A per-language value as nested under its owning key.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TranslationEntry {
    pub id: String,
    pub language_code: String,
    pub value: String,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

/// A full translation row, including its owning key reference.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Translation {
    pub id: String,
    pub translation_key_id: String,
    pub language_code: String,
    pub value: String,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

/// Filters for key listings.
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    /// Case-insensitive substring match on `key`
    pub search: Option<String>,
    /// Exact match on `category`
    pub category: Option<String>,
}

/// One page of keys plus the unbounded filtered count.
#[derive(Debug, Clone)]
pub struct KeyPage {
    pub items: Vec<TranslationKey>,
    /// Total rows matching the filter, independent of the pagination window
    pub total: i64,
}

/// Fields for creating a new translation key (data loading, not routed).
#[derive(Debug, Clone)]
pub struct NewTranslationKey {
    pub key: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Per-entry result of a bulk update.
#[derive(Debug, Clone)]
pub enum BulkEntryOutcome {
    Updated(Translation),
    Failed { error: String },
}

/// Aggregate result of a bulk update. Entries keep the caller's order.
#[derive(Debug, Clone, Default)]
pub struct BulkUpdateOutcome {
    pub entries: Vec<(String, BulkEntryOutcome)>,
    pub successful: usize,
    pub failed: usize,
}

impl BulkUpdateOutcome {
    pub fn total_attempted(&self) -> usize {
        self.entries.len()
    }
}

/// Handle to the backing store. Clones share the same pool.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    pool: SqlitePool,
}

impl TranslationStore {
    /// Wrap an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the store at `url`, creating the database file and schema
    /// if needed.
    pub async fn connect(url: &str) -> ApiResult<Self> {
        let pool = pool::connect(url).await?;
        Ok(Self { pool })
    }

    /// Open a private in-memory store with the schema applied.
    pub async fn in_memory() -> ApiResult<Self> {
        let pool = pool::connect_in_memory().await?;
        Ok(Self { pool })
    }

    /// The underlying pool, for direct queries in tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Called on graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Minimal connectivity probe for health checks.
    pub async fn ping(&self) -> ApiResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM translation_keys")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
