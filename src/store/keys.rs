//! Queries over `translation_keys`: listing with filters and pagination,
//! single-key lookup, and the unrouted data-loading operations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::validation::Pagination;

use super::{KeyFilter, KeyPage, NewTranslationKey, TranslationEntry, TranslationKey, TranslationStore};

/// Flat `translation_keys` row, before translations are attached.
#[derive(Debug, sqlx::FromRow)]
struct KeyRow {
    id: String,
    key: String,
    category: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl KeyRow {
    fn into_key(self, translations: Vec<TranslationEntry>) -> TranslationKey {
        TranslationKey {
            id: self.id,
            key: self.key,
            category: self.category,
            description: self.description,
            translations,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Translation row joined against a page of keys.
#[derive(Debug, sqlx::FromRow)]
struct PageTranslationRow {
    translation_key_id: String,
    id: String,
    language_code: String,
    value: String,
    updated_by: String,
    updated_at: DateTime<Utc>,
}

/// Build the shared `WHERE` clause for the list filters. The caller binds
/// `search` then `category`, in that order, for each occurrence.
fn filter_clause(filter: &KeyFilter) -> String {
    let mut clauses: Vec<&str> = Vec::new();
    if filter.search.is_some() {
        // instr() keeps the match a literal substring; LIKE would give
        // wildcard semantics to % and _ in user input.
        clauses.push("instr(lower(key), lower(?)) > 0");
    }
    if filter.category.is_some() {
        clauses.push("category = ?");
    }
    if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    }
}

impl TranslationStore {
    /// List translation keys with their nested translations.
    ///
    /// `total` is the unbounded filtered count, so clients can paginate.
    /// Keys are ordered by `key`, translations by `language_code`.
    pub async fn list_keys(&self, filter: &KeyFilter, page: Pagination) -> ApiResult<KeyPage> {
        let clause = filter_clause(filter);

        let count_sql = format!("SELECT COUNT(*) FROM translation_keys {}", clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(search) = &filter.search {
            count_query = count_query.bind(search);
        }
        if let Some(category) = &filter.category {
            count_query = count_query.bind(category);
        }
        let total = count_query.fetch_one(self.pool()).await?;

        let keys_sql = format!(
            "SELECT id, key, category, description, created_at, updated_at \
             FROM translation_keys {} ORDER BY key LIMIT ? OFFSET ?",
            clause
        );
        let mut keys_query = sqlx::query_as::<_, KeyRow>(&keys_sql);
        if let Some(search) = &filter.search {
            keys_query = keys_query.bind(search);
        }
        if let Some(category) = &filter.category {
            keys_query = keys_query.bind(category);
        }
        let rows = keys_query
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(self.pool())
            .await?;

        // Fetch translations for exactly the keys on this page.
        let translations_sql = format!(
            "SELECT t.translation_key_id, t.id, t.language_code, t.value, \
                    t.updated_by, t.updated_at \
             FROM translations t \
             JOIN (SELECT id FROM translation_keys {} ORDER BY key LIMIT ? OFFSET ?) page \
               ON page.id = t.translation_key_id \
             ORDER BY t.translation_key_id, t.language_code",
            clause
        );
        let mut translations_query = sqlx::query_as::<_, PageTranslationRow>(&translations_sql);
        if let Some(search) = &filter.search {
            translations_query = translations_query.bind(search);
        }
        if let Some(category) = &filter.category {
            translations_query = translations_query.bind(category);
        }
        let translation_rows = translations_query
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(self.pool())
            .await?;

        let mut by_key: HashMap<String, Vec<TranslationEntry>> = HashMap::new();
        for row in translation_rows {
            by_key
                .entry(row.translation_key_id)
                .or_default()
                .push(TranslationEntry {
                    id: row.id,
                    language_code: row.language_code,
                    value: row.value,
                    updated_by: row.updated_by,
                    updated_at: row.updated_at,
                });
        }

        let items = rows
            .into_iter()
            .map(|row| {
                let translations = by_key.remove(&row.id).unwrap_or_default();
                row.into_key(translations)
            })
            .collect();

        Ok(KeyPage { items, total })
    }

    /// Fetch a single key with its translations, or NotFound.
    pub async fn get_key(&self, key_id: &str) -> ApiResult<TranslationKey> {
        let row = sqlx::query_as::<_, KeyRow>(
            "SELECT id, key, category, description, created_at, updated_at \
             FROM translation_keys WHERE id = ?",
        )
        .bind(key_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Translation key with ID {} not found", key_id))
        })?;

        let translations = sqlx::query_as::<_, TranslationEntry>(
            "SELECT id, language_code, value, updated_by, updated_at \
             FROM translations WHERE translation_key_id = ? ORDER BY language_code",
        )
        .bind(key_id)
        .fetch_all(self.pool())
        .await?;

        Ok(row.into_key(translations))
    }

    /// Look up a key by its stable name.
    pub async fn find_key_by_name(&self, key: &str) -> ApiResult<Option<TranslationKey>> {
        let row = sqlx::query_as::<_, KeyRow>(
            "SELECT id, key, category, description, created_at, updated_at \
             FROM translation_keys WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(self.pool())
        .await?;

        match row {
            Some(row) => {
                let id = row.id.clone();
                let translations = sqlx::query_as::<_, TranslationEntry>(
                    "SELECT id, language_code, value, updated_by, updated_at \
                     FROM translations WHERE translation_key_id = ? ORDER BY language_code",
                )
                .bind(&id)
                .fetch_all(self.pool())
                .await?;
                Ok(Some(row.into_key(translations)))
            }
            None => Ok(None),
        }
    }

    /// Create a translation key. Used by data loading and tests; key
    /// creation is not exposed over HTTP.
    pub async fn insert_key(&self, new: &NewTranslationKey) -> ApiResult<TranslationKey> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO translation_keys (id, key, category, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new.key)
        .bind(&new.category)
        .bind(&new.description)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(TranslationKey {
            id,
            key: new.key.clone(),
            category: new.category.clone(),
            description: new.description.clone(),
            translations: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Delete a key; its translations go with it via the cascade.
    /// Returns whether a row was deleted.
    pub async fn delete_key(&self, key_id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM translation_keys WHERE id = ?")
            .bind(key_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
