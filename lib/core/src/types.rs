use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ServiceError;

/// Merge a JSON patch into a base value.
///
/// For each key in `patch`:
/// - If the value is `null`, the key is removed from `base`.
/// - Otherwise, the key is set to the patch value.
///
/// This follows RFC 7386 (JSON Merge Patch) semantics.
pub fn merge_patch(
    base: &mut serde_json::Value,
    patch: &serde_json::Value,
) {
    if let (Some(base_obj), Some(patch_obj)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_obj {
            if value.is_null() {
                base_obj.remove(key);
            } else if value.is_object() {
                // Recursively merge nested objects.
                let entry = base_obj
                    .entry(key.clone())
                    .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
                merge_patch(entry, value);
            } else {
                base_obj.insert(key.clone(), value.clone());
            }
        }
    } else {
        *base = patch.clone();
    }
}

/// Apply a JSON merge patch to a typed record.
///
/// The record round-trips through `serde_json::Value`, so a patch that
/// removes or mistypes a required field surfaces as a Validation error
/// rather than a panic.
pub fn apply_patch<T>(current: &T, patch: serde_json::Value) -> Result<T, ServiceError>
where
    T: Serialize + DeserializeOwned,
{
    let mut value = serde_json::to_value(current)
        .map_err(|e| ServiceError::Internal(e.to_string()))?;
    merge_patch(&mut value, &patch);
    serde_json::from_value(value)
        .map_err(|e| ServiceError::Validation(format!("invalid patch: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_merge_patch() {
        let mut base = serde_json::json!({"a": 1, "b": 2, "c": {"d": 3}});
        let patch = serde_json::json!({"b": null, "c": {"e": 4}, "f": 5});
        merge_patch(&mut base, &patch);
        assert_eq!(
            base,
            serde_json::json!({"a": 1, "c": {"d": 3, "e": 4}, "f": 5})
        );
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: i64,
    }

    #[test]
    fn apply_patch_updates_fields() {
        let current = Record { name: "farine".into(), count: 3 };
        let patched: Record =
            apply_patch(&current, serde_json::json!({"count": 7})).unwrap();
        assert_eq!(patched, Record { name: "farine".into(), count: 7 });
    }

    #[test]
    fn apply_patch_rejects_bad_types() {
        let current = Record { name: "farine".into(), count: 3 };
        let err = apply_patch::<Record>(&current, serde_json::json!({"count": "many"}))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn apply_patch_rejects_removed_required_field() {
        let current = Record { name: "farine".into(), count: 3 };
        let err = apply_patch::<Record>(&current, serde_json::json!({"name": null}))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
