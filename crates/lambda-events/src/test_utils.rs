//! Test utilities for payload testing.
//!
//! Sample wire payloads live under `docs/fixtures/` at the workspace root and
//! are loaded once per test binary.
//!
//! # Usage
//!
//! ```ignore
//! use lambda_events::test_utils::{fixture_json, fixtures, init_test_tracing};
//!
//! #[test]
//! fn decodes_sample() {
//!     init_test_tracing();
//!     let raw = fixture_json(fixtures::S3_BATCH_EVENT);
//!     // ... decode and assert
//! }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// File names of the bundled fixtures.
pub mod fixtures {
    /// Destination record for a successful invocation.
    pub const LAMBDA_DESTINATION_EVENT: &str = "lambda-destination-event.json";
    /// Destination record after retries were exhausted (error payload).
    pub const LAMBDA_DESTINATION_EVENT_FAILURE: &str = "lambda-destination-event-failure.json";
    /// Kinesis Analytics output delivery invocation.
    pub const KINESIS_ANALYTICS_OUTPUT_DELIVERY_EVENT: &str =
        "kinesis-analytics-output-delivery-event.json";
    /// Kinesis Analytics output delivery response.
    pub const KINESIS_ANALYTICS_OUTPUT_DELIVERY_RESPONSE: &str =
        "kinesis-analytics-output-delivery-response.json";
    /// S3 Batch Operations invocation, schema 1.0.
    pub const S3_BATCH_EVENT: &str = "s3-batch-event.json";
    /// S3 Batch Operations invocation, schema 2.0.
    pub const S3_BATCH_EVENT_V2: &str = "s3-batch-event-v2.json";
    /// S3 Batch Operations response.
    pub const S3_BATCH_RESPONSE: &str = "s3-batch-response.json";
}

/// Directory holding the sample payloads.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Raw text of a fixture, cached for the lifetime of the test binary.
pub fn fixture_json(name: &str) -> &'static str {
    static CACHE: OnceLock<Mutex<HashMap<String, &'static str>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().expect("fixture cache poisoned");

    if let Some(raw) = cache.get(name).copied() {
        return raw;
    }

    let path = fixtures_dir().join(name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("fixture {} should exist: {err}", path.display()));
    let raw: &'static str = Box::leak(raw.into_boxed_str());
    cache.insert(name.to_string(), raw);
    raw
}

/// Fixture parsed into an untyped JSON tree, for shape comparisons.
pub fn fixture_value(name: &str) -> serde_json::Value {
    serde_json::from_str(fixture_json(name)).expect("fixture should be valid JSON")
}

/// Install a test-writer `tracing` subscriber.
///
/// Honours `RUST_LOG`, defaulting to `debug`. Safe to call from every test.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_is_valid_json() {
        for name in [
            fixtures::LAMBDA_DESTINATION_EVENT,
            fixtures::LAMBDA_DESTINATION_EVENT_FAILURE,
            fixtures::KINESIS_ANALYTICS_OUTPUT_DELIVERY_EVENT,
            fixtures::KINESIS_ANALYTICS_OUTPUT_DELIVERY_RESPONSE,
            fixtures::S3_BATCH_EVENT,
            fixtures::S3_BATCH_EVENT_V2,
            fixtures::S3_BATCH_RESPONSE,
        ] {
            assert!(fixture_value(name).is_object(), "{name} should be an object");
        }
    }

    #[test]
    fn fixture_text_is_cached() {
        let first = fixture_json(fixtures::S3_BATCH_EVENT);
        let second = fixture_json(fixtures::S3_BATCH_EVENT);
        assert!(std::ptr::eq(first, second));
    }
}
