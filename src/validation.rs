//! # Request Validation
//!
//! Shape and bounds checks applied before any store access. This module
//! performs no database access and has no side effects; every violation is
//! reported with field-level detail as [`ApiError::Validation`] (or
//! [`ApiError::BusinessRule`] for the empty bulk mapping).

use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// Maximum page size for key listings
pub const MAX_LIMIT: i64 = 1000;

/// Default page size for key listings
pub const DEFAULT_LIMIT: i64 = 100;

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Parse and bounds-check `limit`/`offset` query parameters.
///
/// Missing parameters fall back to defaults; non-numeric or out-of-range
/// values are rejected.
pub fn parse_pagination(limit: Option<&str>, offset: Option<&str>) -> ApiResult<Pagination> {
    let limit = match limit {
        None => DEFAULT_LIMIT,
        Some(raw) => {
            let n: i64 = raw.parse().map_err(|_| {
                ApiError::Validation(format!("limit must be an integer, got '{}'", raw))
            })?;
            if !(1..=MAX_LIMIT).contains(&n) {
                return Err(ApiError::Validation(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_LIMIT, n
                )));
            }
            n
        }
    };

    let offset = match offset {
        None => 0,
        Some(raw) => {
            let n: i64 = raw.parse().map_err(|_| {
                ApiError::Validation(format!("offset must be an integer, got '{}'", raw))
            })?;
            if n < 0 {
                return Err(ApiError::Validation(format!(
                    "offset must be non-negative, got {}",
                    n
                )));
            }
            n
        }
    };

    Ok(Pagination { limit, offset })
}

/// Require a non-empty string field (after trimming).
pub fn non_empty(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validate the bulk-update mapping: non-empty, every value a non-empty
/// string. Returns the entries in the caller's key order.
pub fn bulk_updates(updates: &Map<String, Value>) -> ApiResult<Vec<(String, String)>> {
    if updates.is_empty() {
        return Err(ApiError::BusinessRule("No updates provided".to_string()));
    }

    let mut entries = Vec::with_capacity(updates.len());
    for (id, value) in updates {
        let value = value.as_str().ok_or_else(|| {
            ApiError::Validation(format!("updates.{} must be a string value", id))
        })?;
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!(
                "updates.{} must not be empty",
                id
            )));
        }
        entries.push((id.clone(), value.to_string()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let page = parse_pagination(None, None).unwrap();
        assert_eq!(page.limit, DEFAULT_LIMIT);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_pagination_bounds() {
        assert!(parse_pagination(Some("0"), None).is_err());
        assert!(parse_pagination(Some("1001"), None).is_err());
        assert!(parse_pagination(None, Some("-1")).is_err());
        assert!(parse_pagination(Some("abc"), None).is_err());
        assert!(parse_pagination(None, Some("1.5")).is_err());

        let page = parse_pagination(Some("1000"), Some("250")).unwrap();
        assert_eq!(page.limit, 1000);
        assert_eq!(page.offset, 250);
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("Hello", "value").is_ok());
        assert!(non_empty("", "value").is_err());
        assert!(non_empty("   ", "value").is_err());
    }

    #[test]
    fn test_bulk_updates_rejects_empty_map() {
        let updates = Map::new();
        let err = bulk_updates(&updates).unwrap_err();
        assert!(matches!(err, ApiError::BusinessRule(_)));
    }

    #[test]
    fn test_bulk_updates_rejects_non_string_values() {
        let mut updates = Map::new();
        updates.insert("abc".to_string(), json!(42));
        assert!(bulk_updates(&updates).is_err());
    }

    #[test]
    fn test_bulk_updates_preserves_input_order() {
        let mut updates = Map::new();
        updates.insert("zzz".to_string(), json!("last?"));
        updates.insert("aaa".to_string(), json!("first?"));

        let entries = bulk_updates(&updates).unwrap();
        assert_eq!(entries[0].0, "zzz");
        assert_eq!(entries[1].0, "aaa");
    }
}
