use crate::event::ClassifiedEvent;
use serde::Serialize;
use serde_json::Value;

/// The response returned to the caller, e.g. API Gateway.
/// The body is a JSON-encoded string, i.e. the message is wrapped in quotes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn new(status_code: u16, msg: String) -> Self {
        Self {
            status_code,
            // Display for Value produces valid JSON and cannot fail
            body: Value::String(msg).to_string(),
        }
    }

    /// A 400 response for events that were not recognised.
    pub fn unknown() -> Self {
        Self::new(400, "Unknown event source".to_owned())
    }
}

impl From<&ClassifiedEvent> for HandlerResponse {
    fn from(event: &ClassifiedEvent) -> Self {
        match event {
            ClassifiedEvent::ApiGateway => Self::new(200, "API Gateway call successful!".to_owned()),
            ClassifiedEvent::S3Upload { bucket, key } => {
                Self::new(200, format!("Processed file: s3://{bucket}/{key}"))
            }
            ClassifiedEvent::Unknown => Self::unknown(),
        }
    }
}
