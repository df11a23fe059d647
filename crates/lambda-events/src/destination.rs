//! Asynchronous invocation destination records.
//!
//! When an asynchronous invocation succeeds or exhausts its retries, Lambda
//! sends a record describing the outcome to the configured destination
//! (queue, topic, function or event bus).
//!
//! See <https://docs.aws.amazon.com/lambda/latest/dg/invocation-async.html>.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `condition` values Lambda is known to send.
pub mod condition {
    /// The invocation returned successfully.
    pub const SUCCESS: &str = "Success";
    /// Every retry attempt failed.
    pub const RETRIES_EXHAUSTED: &str = "RetriesExhausted";
    /// The event expired before it could be processed.
    pub const EVENT_AGE_EXCEEDED: &str = "EventAgeExceeded";
}

/// Invocation record delivered to an asynchronous invocation destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LambdaDestinationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Serialized as `yyyy-MM-dd'T'HH:mm:ss.SSSX` in UTC.
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,

    /// The original invocation input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_payload: Option<Map<String, Value>>,

    /// Shape depends on the invocation outcome; an explicit `null` is kept.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::custom_serde::deserialize_present_value"
    )]
    pub response_context: Option<Value>,

    /// Function result or error object; an explicit `null` is kept.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::custom_serde::deserialize_present_value"
    )]
    pub response_payload: Option<Value>,
}

impl LambdaDestinationEvent {
    /// Create a record with every field specified.
    pub fn new(
        version: Option<String>,
        timestamp: Option<DateTime<Utc>>,
        request_context: Option<RequestContext>,
        request_payload: Option<Map<String, Value>>,
        response_context: Option<Value>,
        response_payload: Option<Value>,
    ) -> Self {
        Self {
            version,
            timestamp,
            request_context,
            request_payload,
            response_context,
            response_payload,
        }
    }

    pub fn builder() -> LambdaDestinationEventBuilder {
        LambdaDestinationEventBuilder::default()
    }
}

/// Fluent builder for [`LambdaDestinationEvent`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct LambdaDestinationEventBuilder {
    event: LambdaDestinationEvent,
}

impl LambdaDestinationEventBuilder {
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.event.version = Some(version.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.event.timestamp = Some(timestamp);
        self
    }

    pub fn with_request_context(mut self, request_context: RequestContext) -> Self {
        self.event.request_context = Some(request_context);
        self
    }

    pub fn with_request_payload(mut self, request_payload: Map<String, Value>) -> Self {
        self.event.request_payload = Some(request_payload);
        self
    }

    pub fn with_response_context(mut self, response_context: impl Into<Value>) -> Self {
        self.event.response_context = Some(response_context.into());
        self
    }

    pub fn with_response_payload(mut self, response_payload: impl Into<Value>) -> Self {
        self.event.response_payload = Some(response_payload.into());
        self
    }

    pub fn build(self) -> LambdaDestinationEvent {
        self.event
    }
}

/// Identifies the invocation a destination record describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,

    /// Why the destination was invoked, see [`condition`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(deserialize_with = "crate::custom_serde::deserialize_null_default")]
    pub approximate_invoke_count: i32,
}

impl RequestContext {
    pub fn new(
        request_id: Option<String>,
        function_arn: Option<String>,
        condition: Option<String>,
        approximate_invoke_count: i32,
    ) -> Self {
        Self {
            request_id,
            function_arn,
            condition,
            approximate_invoke_count,
        }
    }

    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::default()
    }

    /// True when Lambda reported the invocation as successful.
    pub fn is_success(&self) -> bool {
        self.condition.as_deref() == Some(condition::SUCCESS)
    }
}

/// Fluent builder for [`RequestContext`].
#[derive(Debug, Clone, Default)]
pub struct RequestContextBuilder {
    context: RequestContext,
}

impl RequestContextBuilder {
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    pub fn with_function_arn(mut self, function_arn: impl Into<String>) -> Self {
        self.context.function_arn = Some(function_arn.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.context.condition = Some(condition.into());
        self
    }

    pub fn with_approximate_invoke_count(mut self, approximate_invoke_count: i32) -> Self {
        self.context.approximate_invoke_count = approximate_invoke_count;
        self
    }

    pub fn build(self) -> RequestContext {
        self.context
    }
}
