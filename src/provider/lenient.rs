//! Forgiving decoders for provider payloads.
//!
//! The provider mixes entity kinds inside one array and does not promise a
//! stable shape for every entry, so arrays are decoded element by element and
//! anything that does not fit the target type is skipped.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a JSON array into `Vec<T>`, dropping elements that fail to decode.
///
/// A value that is not an array (including `null`) yields an empty vector.
pub fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_each(value))
}

pub fn decode_each<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Decodes an optional document, treating any shape mismatch as absence.
pub fn decode_optional<T: DeserializeOwned>(value: Option<Value>) -> Option<T> {
    value.and_then(|value| serde_json::from_value(value).ok())
}
