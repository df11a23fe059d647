//! JSON encode/decode helpers.
//!
//! Thin wrappers over `serde_json` that return [`crate::Error`] and emit
//! `tracing` events. Every schema is a plain serde type, so calling
//! `serde_json` directly works just as well.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Result;

/// Decode a payload from a JSON string.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    decoded(serde_json::from_str(json))
}

/// Decode a payload from raw JSON bytes, e.g. a Lambda invocation body.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    decoded(serde_json::from_slice(bytes))
}

/// Decode a payload from an already-parsed JSON value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    decoded(serde_json::from_value(value))
}

/// Encode a payload as compact JSON.
pub fn to_string<T: Serialize>(payload: &T) -> Result<String> {
    let json = serde_json::to_string(payload)?;
    trace!(
        payload_type = type_name::<T>(),
        len = json.len(),
        "encoded payload"
    );
    Ok(json)
}

/// Encode a payload as indented JSON.
pub fn to_string_pretty<T: Serialize>(payload: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(payload)?;
    trace!(
        payload_type = type_name::<T>(),
        len = json.len(),
        "encoded payload"
    );
    Ok(json)
}

/// Encode a payload as a JSON value tree.
pub fn to_value<T: Serialize>(payload: &T) -> Result<Value> {
    Ok(serde_json::to_value(payload)?)
}

fn decoded<T>(result: serde_json::Result<T>) -> Result<T> {
    match result {
        Ok(payload) => {
            trace!(payload_type = type_name::<T>(), "decoded payload");
            Ok(payload)
        }
        Err(err) => {
            debug!(
                payload_type = type_name::<T>(),
                line = err.line(),
                column = err.column(),
                category = ?err.classify(),
                error = %err,
                "failed to decode payload"
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3_batch::ResultCode;
    use crate::test_utils::init_test_tracing;
    use crate::Error;

    #[test]
    fn decode_error_keeps_serde_message() {
        init_test_tracing();
        let err = from_str::<ResultCode>(r#""Failed""#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("unknown variant `Failed`"));
    }

    #[test]
    fn encodes_and_decodes_through_helpers() {
        init_test_tracing();
        let json = to_string(&ResultCode::TemporaryFailure).unwrap();
        assert_eq!(json, r#""TemporaryFailure""#);

        let code: ResultCode = from_slice(json.as_bytes()).unwrap();
        assert_eq!(code, ResultCode::TemporaryFailure);
    }

    #[test]
    fn pretty_output_is_valid_json() {
        let pretty = to_string_pretty(&serde_json::json!({ "a": [1, 2] })).unwrap();
        assert!(pretty.contains('\n'));
        let value: Value = from_str(&pretty).unwrap();
        assert_eq!(to_value(&value).unwrap(), serde_json::json!({ "a": [1, 2] }));
    }
}
