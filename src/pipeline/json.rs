//! Safe traversal of loosely-structured forecast JSON.

use serde_json::Value;

use crate::error::{Result, ScreenerError};

/// Descend into nested JSON objects by a sequence of keys.
///
/// Returns `Ok(Some(value))` when every key resolves to a non-null value,
/// `Ok(None)` when a key is absent at any depth or a null sits anywhere on
/// the path (a null is treated as "absent, assume it would have been an
/// object"), and a shape error when a non-object, non-null value is reached
/// before the keys run out.
pub fn deep_get<'a>(root: &'a Value, keys: &[&str]) -> Result<Option<&'a Value>> {
    let mut current = root;
    for (depth, key) in keys.iter().enumerate() {
        match current {
            Value::Object(map) => match map.get(*key) {
                Some(next) => current = next,
                None => return Ok(None),
            },
            Value::Null => return Ok(None),
            other => {
                return Err(ScreenerError::Shape {
                    path: keys[..depth].join("."),
                    found: json_type_name(other),
                })
            }
        }
    }
    if current.is_null() {
        return Ok(None);
    }
    Ok(Some(current))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
