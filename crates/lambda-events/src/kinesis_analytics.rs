//! Kinesis Analytics Lambda output delivery.
//!
//! A Kinesis Data Analytics application configured with a Lambda output
//! invokes the function with a [`KinesisAnalyticsOutputDeliveryEvent`] and
//! expects a [`KinesisAnalyticsOutputDeliveryResponse`] naming the outcome of
//! every record.

use serde::{Deserialize, Serialize};

/// Outcome of delivering a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryResult {
    /// The record was delivered successfully.
    Ok,
    /// Delivery of the record failed.
    DeliveryFailed,
}

/// Response model for Kinesis Analytics Lambda output delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KinesisAnalyticsOutputDeliveryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<DeliveryRecord>>,
}

impl KinesisAnalyticsOutputDeliveryResponse {
    pub fn new(records: Option<Vec<DeliveryRecord>>) -> Self {
        Self { records }
    }

    pub fn builder() -> KinesisAnalyticsOutputDeliveryResponseBuilder {
        KinesisAnalyticsOutputDeliveryResponseBuilder::default()
    }

    /// Answer every record of `event` with the same `result`, in order.
    pub fn from_event(event: &KinesisAnalyticsOutputDeliveryEvent, result: DeliveryResult) -> Self {
        let records = event
            .records
            .iter()
            .flatten()
            .map(|record| DeliveryRecord {
                record_id: record.record_id.clone(),
                result: Some(result),
            })
            .collect();

        Self {
            records: Some(records),
        }
    }
}

/// Fluent builder for [`KinesisAnalyticsOutputDeliveryResponse`].
#[derive(Debug, Clone, Default)]
pub struct KinesisAnalyticsOutputDeliveryResponseBuilder {
    response: KinesisAnalyticsOutputDeliveryResponse,
}

impl KinesisAnalyticsOutputDeliveryResponseBuilder {
    pub fn with_records(mut self, records: Vec<DeliveryRecord>) -> Self {
        self.response.records = Some(records);
        self
    }

    /// Append a single record after any already present.
    pub fn with_record(mut self, record: DeliveryRecord) -> Self {
        self.response.records.get_or_insert_with(Vec::new).push(record);
        self
    }

    pub fn build(self) -> KinesisAnalyticsOutputDeliveryResponse {
        self.response
    }
}

/// Delivery outcome for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DeliveryResult>,
}

impl DeliveryRecord {
    pub fn new(record_id: Option<String>, result: Option<DeliveryResult>) -> Self {
        Self { record_id, result }
    }

    pub fn builder() -> DeliveryRecordBuilder {
        DeliveryRecordBuilder::default()
    }

    pub fn ok(record_id: impl Into<String>) -> Self {
        Self::new(Some(record_id.into()), Some(DeliveryResult::Ok))
    }

    pub fn delivery_failed(record_id: impl Into<String>) -> Self {
        Self::new(Some(record_id.into()), Some(DeliveryResult::DeliveryFailed))
    }
}

/// Fluent builder for [`DeliveryRecord`].
#[derive(Debug, Clone, Default)]
pub struct DeliveryRecordBuilder {
    record: DeliveryRecord,
}

impl DeliveryRecordBuilder {
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record.record_id = Some(record_id.into());
        self
    }

    pub fn with_result(mut self, result: DeliveryResult) -> Self {
        self.record.result = Some(result);
        self
    }

    pub fn build(self) -> DeliveryRecord {
        self.record
    }
}

/// Inbound batch of application output records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KinesisAnalyticsOutputDeliveryEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<DeliveryEventRecord>>,
}

/// One output record awaiting delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryEventRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_delivery_record_metadata: Option<LambdaDeliveryRecordMetadata>,

    /// Record payload, base64 on the wire.
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::custom_serde::base64_bytes")]
    pub data: Option<Vec<u8>>,
}

impl DeliveryEventRecord {
    /// Payload as UTF-8 text, if present and valid.
    pub fn decoded_data_utf8(&self) -> Option<&str> {
        self.data
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

/// Delivery attempt metadata attached to each output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LambdaDeliveryRecordMetadata {
    /// Number of previous delivery attempts for this record.
    #[serde(deserialize_with = "crate::custom_serde::deserialize_null_default")]
    pub retry_hint: i64,
}
