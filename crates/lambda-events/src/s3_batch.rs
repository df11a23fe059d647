//! S3 Batch Operations custom Lambda action.
//!
//! A Batch Operations job invokes the function once per batch of tasks with an
//! [`S3BatchEvent`] and expects an [`S3BatchResponse`] carrying a result for
//! each task.
//!
//! See <https://docs.aws.amazon.com/AmazonS3/latest/userguide/batch-ops-invoke-lambda.html>.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-task result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// The task completed normally. If a job completion report was
    /// requested, the result string is included in it.
    Succeeded,
    /// The task will be redriven before the job completes. The result string
    /// is ignored unless this was the final redrive.
    TemporaryFailure,
    /// The task is marked as failed and the result string is surfaced in the
    /// job completion report.
    PermanentFailure,
}

/// Response returned from an S3 Batch Operations custom action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3BatchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_schema_version: Option<String>,

    /// Applied to every task id missing from `results`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_keys_as: Option<ResultCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<S3BatchResult>>,
}

impl S3BatchResponse {
    pub fn new(
        invocation_schema_version: Option<String>,
        treat_missing_keys_as: Option<ResultCode>,
        invocation_id: Option<String>,
        results: Option<Vec<S3BatchResult>>,
    ) -> Self {
        Self {
            invocation_schema_version,
            treat_missing_keys_as,
            invocation_id,
            results,
        }
    }

    pub fn builder() -> S3BatchResponseBuilder {
        S3BatchResponseBuilder::default()
    }

    /// Start a response that echoes the identifying fields of `event`.
    ///
    /// Only `invocationId` and `invocationSchemaVersion` are copied.
    pub fn from_s3_batch_event(event: &S3BatchEvent) -> S3BatchResponseBuilder {
        let mut builder = Self::builder();
        builder.response.invocation_id = event.invocation_id.clone();
        builder.response.invocation_schema_version = event.invocation_schema_version.clone();
        builder
    }
}

/// Fluent builder for [`S3BatchResponse`].
#[derive(Debug, Clone, Default)]
pub struct S3BatchResponseBuilder {
    response: S3BatchResponse,
}

impl S3BatchResponseBuilder {
    pub fn with_invocation_schema_version(mut self, version: impl Into<String>) -> Self {
        self.response.invocation_schema_version = Some(version.into());
        self
    }

    pub fn with_treat_missing_keys_as(mut self, code: ResultCode) -> Self {
        self.response.treat_missing_keys_as = Some(code);
        self
    }

    pub fn with_invocation_id(mut self, invocation_id: impl Into<String>) -> Self {
        self.response.invocation_id = Some(invocation_id.into());
        self
    }

    pub fn with_results(mut self, results: Vec<S3BatchResult>) -> Self {
        self.response.results = Some(results);
        self
    }

    /// Append a single result after any already present.
    pub fn with_result(mut self, result: S3BatchResult) -> Self {
        self.response.results.get_or_insert_with(Vec::new).push(result);
        self
    }

    pub fn build(self) -> S3BatchResponse {
        self.response
    }
}

/// Outcome of a single task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3BatchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,

    /// Free-form; only reported for permanent failures and final redrives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_string: Option<String>,
}

impl S3BatchResult {
    pub fn new(
        task_id: Option<String>,
        result_code: Option<ResultCode>,
        result_string: Option<String>,
    ) -> Self {
        Self {
            task_id,
            result_code,
            result_string,
        }
    }

    pub fn builder() -> S3BatchResultBuilder {
        S3BatchResultBuilder::default()
    }

    /// Result for `task`, echoing its task id.
    pub fn for_task(
        task: &S3BatchTask,
        code: ResultCode,
        result_string: impl Into<String>,
    ) -> Self {
        Self::new(task.task_id.clone(), Some(code), Some(result_string.into()))
    }

    pub fn succeeded(task_id: impl Into<String>, result_string: impl Into<String>) -> Self {
        Self::with_code(task_id, ResultCode::Succeeded, result_string)
    }

    pub fn temporary_failure(task_id: impl Into<String>, result_string: impl Into<String>) -> Self {
        Self::with_code(task_id, ResultCode::TemporaryFailure, result_string)
    }

    pub fn permanent_failure(task_id: impl Into<String>, result_string: impl Into<String>) -> Self {
        Self::with_code(task_id, ResultCode::PermanentFailure, result_string)
    }

    fn with_code(
        task_id: impl Into<String>,
        code: ResultCode,
        result_string: impl Into<String>,
    ) -> Self {
        Self::new(Some(task_id.into()), Some(code), Some(result_string.into()))
    }
}

/// Fluent builder for [`S3BatchResult`].
#[derive(Debug, Clone, Default)]
pub struct S3BatchResultBuilder {
    result: S3BatchResult,
}

impl S3BatchResultBuilder {
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.result.task_id = Some(task_id.into());
        self
    }

    pub fn with_result_code(mut self, result_code: ResultCode) -> Self {
        self.result.result_code = Some(result_code);
        self
    }

    pub fn with_result_string(mut self, result_string: impl Into<String>) -> Self {
        self.result.result_string = Some(result_string.into());
        self
    }

    pub fn build(self) -> S3BatchResult {
        self.result
    }
}

/// Inbound S3 Batch Operations invocation.
///
/// Schema `1.0` tasks carry `s3BucketArn`; schema `2.0` tasks carry
/// `s3Bucket` and the job may carry `userArguments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3BatchEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_schema_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<S3BatchJob>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<S3BatchTask>>,
}

/// The Batch Operations job that issued the invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3BatchJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arguments: Option<HashMap<String, String>>,
}

/// One object the custom action should process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3BatchTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_version_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
}
