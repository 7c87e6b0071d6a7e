//! Writes against `translations` and the flattened locale lookup.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

use super::{BulkEntryOutcome, BulkUpdateOutcome, Translation, TranslationStore};

impl TranslationStore {
    /// Update a translation's value, refreshing `updated_at` and recording
    /// the editor. Single-row, single-statement; concurrent updates to the
    /// same row resolve last-write-wins.
    pub async fn update_translation(
        &self,
        translation_id: &str,
        value: &str,
        updated_by: &str,
    ) -> ApiResult<Translation> {
        sqlx::query_as::<_, Translation>(
            "UPDATE translations SET value = ?, updated_by = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING id, translation_key_id, language_code, value, updated_by, updated_at",
        )
        .bind(value)
        .bind(updated_by)
        .bind(Utc::now())
        .bind(translation_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Translation with ID {} not found", translation_id))
        })
    }

    /// Apply each update independently, folding per-entry outcomes into a
    /// result list that keeps the caller's order. A failed entry never
    /// aborts the remaining entries; this is explicitly not a transaction.
    pub async fn bulk_update(
        &self,
        entries: &[(String, String)],
        updated_by: &str,
    ) -> BulkUpdateOutcome {
        let mut outcome = BulkUpdateOutcome::default();

        for (translation_id, value) in entries {
            let entry = match self.update_translation(translation_id, value, updated_by).await {
                Ok(translation) => {
                    outcome.successful += 1;
                    BulkEntryOutcome::Updated(translation)
                }
                Err(err) => {
                    tracing::warn!(
                        translation_id,
                        error = %err,
                        "bulk update entry failed"
                    );
                    outcome.failed += 1;
                    // err.to_string() is already opaque for internal errors.
                    BulkEntryOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };
            outcome.entries.push((translation_id.clone(), entry));
        }

        outcome
    }

    /// Insert or update the value for (`key_id`, `language_code`). Used by
    /// data loading and tests.
    pub async fn upsert_translation(
        &self,
        key_id: &str,
        language_code: &str,
        value: &str,
        updated_by: &str,
    ) -> ApiResult<Translation> {
        let translation = sqlx::query_as::<_, Translation>(
            "INSERT INTO translations \
                 (id, translation_key_id, language_code, value, updated_by, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT (translation_key_id, language_code) DO UPDATE SET \
                 value = excluded.value, \
                 updated_by = excluded.updated_by, \
                 updated_at = excluded.updated_at \
             RETURNING id, translation_key_id, language_code, value, updated_by, updated_at",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(key_id)
        .bind(language_code)
        .bind(value)
        .bind(updated_by)
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await?;

        Ok(translation)
    }

    /// All values for a locale, flattened to a key-name → value map.
    /// Unpaginated; consumers cache the whole locale client-side.
    pub async fn localizations(&self, locale: &str) -> ApiResult<BTreeMap<String, String>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT k.key, t.value FROM translations t \
             JOIN translation_keys k ON k.id = t.translation_key_id \
             WHERE t.language_code = ?",
        )
        .bind(locale)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().collect())
    }
}
