//! Versioned JSON envelope for persisted collections.
//!
//! Payloads are written as `{"schemaVersion": N, "items": [...]}`. A bare JSON
//! array (the unversioned layout) is read as version 0.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, T> {
    schema_version: u32,
    items: &'a [T],
}

pub fn encode<T: Serialize>(name: &str, items: &[T]) -> AppResult<String> {
    serde_json::to_string(&Envelope {
        schema_version: SCHEMA_VERSION,
        items,
    })
    .map_err(|source| AppError::Snapshot {
        name: name.to_string(),
        source,
    })
}

pub fn decode<T: DeserializeOwned>(name: &str, payload: &str) -> AppResult<Vec<T>> {
    let corrupted = |source| AppError::Snapshot {
        name: name.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(payload).map_err(corrupted)?;

    let items = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => {
            let found = map
                .get("schemaVersion")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32;

            if found > SCHEMA_VERSION {
                return Err(AppError::SchemaVersion {
                    name: name.to_string(),
                    found,
                    supported: SCHEMA_VERSION,
                });
            }

            map.remove("items").unwrap_or(Value::Array(Vec::new()))
        }
        other => other,
    };

    serde_json::from_value(items).map_err(corrupted)
}
