//! Field-level serde adapters shared by the event schemas.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an untyped field so that an explicit JSON `null` reads as
/// `Some(Value::Null)` while a missing field (via `#[serde(default)]`) stays
/// `None`.
///
/// Pair with `skip_serializing_if = "Option::is_none"` so both states survive
/// a round trip.
pub(crate) fn deserialize_present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Deserialize a primitive field so that an explicit JSON `null` reads as the
/// type's default, the same as a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Standard base64 encoding for binary record data.
pub(crate) mod base64_bytes {
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => {
                let engine = base64::engine::general_purpose::STANDARD;
                serializer.serialize_str(&engine.encode(bytes))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let engine = base64::engine::general_purpose::STANDARD;
        engine
            .decode(encoded.as_bytes())
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid base64 record data: {err}")))
    }
}
