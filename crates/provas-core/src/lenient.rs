//! Per-record decoding for collections inside API payloads.
//!
//! The API nests collections several levels deep. A single record missing a
//! required field should not take the whole page down with it, so each
//! element is decoded on its own and malformed ones are dropped with a
//! warning. A value that is not an array at all is still a hard error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Serde `deserialize_with` adapter for `Vec<T>` fields.
///
/// # Errors
///
/// Fails only if the field is not a JSON array.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(decode_records(values))
}

/// Decode each value independently, keeping the ones that parse.
#[must_use]
pub fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(
                    record = record_kind::<T>(),
                    index,
                    %error,
                    "dropping malformed record"
                );
                None
            }
        })
        .collect()
}

fn record_kind<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
