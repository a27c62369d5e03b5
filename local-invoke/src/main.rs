/// Runs the upload lambda handler against a payload from a local file and prints the response.
/// No AWS access or runtime emulator is needed.
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use std::env::args;
use tracing::{debug, info};
use upload_lambda::config::{init_tracing, LogOutput};
use upload_lambda::my_handler;

/// Goes into the request ID of the invocation context to tell local runs apart in the logs
const LOCAL_REQUEST_ID: &str = "local-invoke";

const USAGE: &str = "Runs the upload lambda handler against a payload file and prints the response.

Usage: local-invoke [payload_file], e.g. local-invoke s3_put.json";

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(LogOutput::Local);

    let payload_file = match args().nth(1) {
        Some(v) if v == "--help" || v == "-h" => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(v) => v,
        None => {
            eprintln!("{USAGE}");
            return Err(Error::from("Missing payload file name"));
        }
    };

    let payload = read_payload(&payload_file)?;
    info!("Payload from: {payload_file}");

    let response = my_handler(LambdaEvent::new(payload, local_context())).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Reads the file and parses it as JSON.
fn read_payload(file_name: &str) -> Result<Value, Error> {
    let payload = match std::fs::read_to_string(file_name) {
        Ok(v) => v,
        Err(e) => {
            debug!("Failed to read payload: {:?}", e);
            return Err(Error::from(format!("Failed to read payload from {file_name}: {e}")));
        }
    };

    debug!("Read {} bytes", payload.len());

    parse_payload(&payload).map_err(|e| Error::from(format!("Invalid JSON in {file_name}: {e}")))
}

fn parse_payload(payload: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(payload)
}

/// An invocation context with the local request ID and defaults for everything else.
fn local_context() -> Context {
    let mut ctx = Context::default();
    ctx.request_id = LOCAL_REQUEST_ID.to_owned();
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_s3_notification_payload() {
        let payload = r#"{
            "Records": [{
                "eventSource": "aws:s3",
                "s3": { "bucket": { "name": "mybucket" }, "object": { "key": "file.txt" } }
            }]
        }"#;

        assert_eq!(
            parse_payload(payload).unwrap(),
            json!({
                "Records": [{
                    "eventSource": "aws:s3",
                    "s3": { "bucket": { "name": "mybucket" }, "object": { "key": "file.txt" } }
                }]
            })
        );
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_payload("{\"requestContext\": ").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_payload("/no/such/dir/payload.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/payload.json"), "{err}");
    }

    #[tokio::test]
    async fn runs_the_handler_with_local_context() {
        let event = LambdaEvent::new(json!({ "requestContext": { "http": {} } }), local_context());
        assert_eq!(event.context.request_id, LOCAL_REQUEST_ID);

        let response = my_handler(event).await.unwrap();
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "statusCode": 200, "body": "\"API Gateway call successful!\"" })
        );
    }
}
