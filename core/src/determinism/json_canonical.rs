use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Compact JSON with object keys in lexicographic order. Audit hashes are
/// computed over these bytes, so floats are rejected outright.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> CoreResult<Vec<u8>> {
    let canonical = canonicalize(serde_json::to_value(value)?)?;
    Ok(serde_json::to_vec(&canonical)?)
}

fn canonicalize(value: Value) -> CoreResult<Value> {
    Ok(match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut out = Map::new();
            for (key, inner) in entries {
                out.insert(key, canonicalize(inner)?);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(canonicalize)
                .collect::<CoreResult<Vec<_>>>()?,
        ),
        Value::Number(n) if n.is_f64() => {
            return Err(CoreError::InvalidInput(format!(
                "canonical JSON forbids non-integer number {}",
                n
            )))
        }
        other => other,
    })
}
