//! An AWS Lambda handler that tells API Gateway calls apart from S3 upload notifications
//! and returns a fixed `{statusCode, body}` response for each.
//!
//! The handler is shared between the `upload-lambda` binary deployed to AWS
//! and `local-invoke` that runs it against a payload file.

pub mod config;
pub mod event;
pub mod handler;
pub mod response;

pub use event::{ClassifiedEvent, EventError};
pub use handler::{handle_event, my_handler};
pub use response::HandlerResponse;
