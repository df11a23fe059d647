//! Typed AWS Lambda event and response payloads.
//!
//! Each module models one JSON payload exchanged between Lambda and an event
//! source or destination:
//!
//! - [`destination`]: asynchronous invocation destination records
//! - [`kinesis_analytics`]: Kinesis Analytics output delivery event and response
//! - [`s3_batch`]: S3 Batch Operations custom action event and response
//!
//! Every type is a plain serde value with public fields, a `Default`, a
//! `new` constructor taking every field, and a fluent `builder()`. Builders
//! never fail; no field is required. JSON field names are the camelCase
//! names Lambda uses, enums travel as their literal variant names, and unset
//! fields are omitted.
//!
//! ```
//! use lambda_events::s3_batch::{ResultCode, S3BatchEvent, S3BatchResponse, S3BatchResult};
//!
//! let event: S3BatchEvent = lambda_events::json::from_str(
//!     r#"{"invocationSchemaVersion":"1.0","invocationId":"abc","tasks":[{"taskId":"t1"}]}"#,
//! )?;
//! let response = S3BatchResponse::from_s3_batch_event(&event)
//!     .with_treat_missing_keys_as(ResultCode::PermanentFailure)
//!     .with_result(S3BatchResult::succeeded("t1", "copied"))
//!     .build();
//! assert_eq!(response.invocation_id.as_deref(), Some("abc"));
//! # Ok::<(), lambda_events::Error>(())
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module loads the sample payloads under `docs/fixtures/`.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod custom_serde;
pub mod destination;
pub mod error;
pub mod json;
pub mod kinesis_analytics;
pub mod s3_batch;
pub mod timestamp;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use destination::{LambdaDestinationEvent, RequestContext};
pub use error::{Error, Result, TimestampError};
pub use kinesis_analytics::{
    DeliveryRecord, DeliveryResult, KinesisAnalyticsOutputDeliveryEvent,
    KinesisAnalyticsOutputDeliveryResponse,
};
pub use s3_batch::{ResultCode, S3BatchEvent, S3BatchResponse, S3BatchResult};
