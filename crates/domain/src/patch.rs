//! Field-level merge used by the replace-style update endpoints.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{DomainError, Result};

/// Overlays `fields` on the serialized form of `current` and deserializes the
/// result, so the merged document goes through the same validation as a new one.
/// Keys listed in `protected` are ignored.
pub fn merge_fields<T>(current: &T, fields: Map<String, Value>, protected: &[&str]) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut document =
        serde_json::to_value(current).map_err(|e| DomainError::InvalidPayload(e.to_string()))?;

    let object = document
        .as_object_mut()
        .ok_or_else(|| DomainError::InvalidPayload("document is not an object".to_string()))?;

    for (key, value) in fields {
        if protected.contains(&key.as_str()) {
            continue;
        }
        object.insert(key, value);
    }

    serde_json::from_value(document).map_err(|e| DomainError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: String,
        name: String,
        size: u32,
    }

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_overrides_fields() {
        let current = Sample {
            id: "a".into(),
            name: "old".into(),
            size: 1,
        };
        let merged = merge_fields(&current, fields(json!({"name": "new"})), &[]).unwrap();
        assert_eq!(merged.name, "new");
        assert_eq!(merged.size, 1);
    }

    #[test]
    fn test_protected_keys_are_ignored() {
        let current = Sample {
            id: "a".into(),
            name: "old".into(),
            size: 1,
        };
        let merged = merge_fields(&current, fields(json!({"id": "b", "size": 4})), &["id"]).unwrap();
        assert_eq!(merged.id, "a");
        assert_eq!(merged.size, 4);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let current = Sample {
            id: "a".into(),
            name: "old".into(),
            size: 1,
        };
        let result = merge_fields(&current, fields(json!({"size": "big"})), &[]);
        assert!(matches!(result, Err(DomainError::InvalidPayload(_))));
    }
}
