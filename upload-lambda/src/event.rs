use serde_json::Value;
use thiserror::Error;

/// The value of `Records[0].eventSource` in S3 notifications.
const S3_EVENT_SOURCE: &str = "aws:s3";

/// Failures to extract the details of an event that was recognised by its shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    /// The field is absent or is not a string.
    #[error("S3 notification has no string value at {path}")]
    MissingField { path: &'static str },
}

/// The kinds of events this lambda knows how to respond to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedEvent {
    /// An HTTP request routed via API Gateway (HTTP API, payload format 2.0)
    ApiGateway,
    /// The first record of an S3 notification
    S3Upload { bucket: String, key: String },
    /// Anything else
    Unknown,
}

impl ClassifiedEvent {
    /// Classifies the raw event and extracts the fields needed for the response in one pass.
    /// The checks are done in this order and the first match wins:
    /// 1. `requestContext.http` is present
    /// 2. `Records[0].eventSource` is `aws:s3`
    ///
    /// Returns an error if the event looks like an S3 notification, but has no bucket name or object key.
    pub fn from_event(event: &Value) -> Result<Self, EventError> {
        if is_api_gateway(event) {
            return Ok(Self::ApiGateway);
        }

        let record = match first_s3_record(event) {
            Some(v) => v,
            None => return Ok(Self::Unknown),
        };

        let bucket = string_at(record, "/s3/bucket/name", "Records[0].s3.bucket.name")?;
        let key = string_at(record, "/s3/object/key", "Records[0].s3.object.key")?;

        Ok(Self::S3Upload { bucket, key })
    }
}

/// Only the presence of `http` matters, its value can be anything.
fn is_api_gateway(event: &Value) -> bool {
    event
        .get("requestContext")
        .and_then(Value::as_object)
        .is_some_and(|ctx| ctx.contains_key("http"))
}

/// Returns the first record if it came from S3. Other records are ignored.
fn first_s3_record(event: &Value) -> Option<&Value> {
    let record = event.get("Records")?.as_array()?.first()?;

    match record.get("eventSource").and_then(Value::as_str) {
        Some(S3_EVENT_SOURCE) => Some(record),
        _ => None,
    }
}

fn string_at(record: &Value, pointer: &str, path: &'static str) -> Result<String, EventError> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(EventError::MissingField { path })
}
