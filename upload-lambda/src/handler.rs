use crate::event::ClassifiedEvent;
use crate::response::HandlerResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, info_span, warn};

/// The lambda entry point. The context is only used for the log span.
///
/// Never returns `Err`: unrecognised or malformed events get a 400 response instead.
/// The runtime reports an `Err` as a failed invocation.
pub async fn my_handler(event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    let (event, ctx) = event.into_parts();

    let span = info_span!("invocation", req_id = %ctx.request_id);
    let _guard = span.enter();

    Ok(handle_event(&event))
}

/// Logs the event, classifies it and maps it onto a response.
pub fn handle_event(event: &Value) -> HandlerResponse {
    info!("Event received: {event}");

    let classified = match ClassifiedEvent::from_event(event) {
        Ok(v) => v,
        Err(e) => {
            warn!("Malformed event: {e}");
            return HandlerResponse::unknown();
        }
    };

    match &classified {
        ClassifiedEvent::S3Upload { bucket, key } => info!("File uploaded to s3://{bucket}/{key}"),
        ClassifiedEvent::ApiGateway => info!("API Gateway call"),
        ClassifiedEvent::Unknown => info!("Unknown event source"),
    }

    HandlerResponse::from(&classified)
}
