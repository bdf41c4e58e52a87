//! Conversions shared by the sea-orm repositories.

use chrono::{DateTime, FixedOffset, Utc};
use domain::DomainError;
use sea_orm::DbErr;
use serde::de::DeserializeOwned;

pub(crate) fn db_error(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

pub(crate) fn to_offset(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
    dt.fixed_offset()
}

/// Reads a lowercase/enum column through the domain type's serde names.
pub(crate) fn parse_enum<T: DeserializeOwned>(column: &str, raw: &str) -> Result<T, DomainError> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).map_err(|_| {
        DomainError::Storage(format!("Unknown value '{}' in column {}", raw, column))
    })
}

pub(crate) fn from_json<T: DeserializeOwned>(
    column: &str,
    value: serde_json::Value,
) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::Storage(format!("Corrupt {} document: {}", column, e)))
}

pub(crate) fn to_json<T: serde::Serialize>(
    column: &str,
    value: &T,
) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::Storage(format!("Cannot encode {}: {}", column, e)))
}

/// Count columns are 64-bit so every `u32` fits unchanged.
pub(crate) fn to_count(value: u32) -> i64 {
    i64::from(value)
}

pub(crate) fn from_count(column: &str, value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::Storage(format!("Out of range value {} in column {}", value, column))
    })
}
