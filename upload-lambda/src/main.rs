use lambda_runtime::{service_fn, Error};
use tracing::debug;
use upload_lambda::config::{init_tracing, LogOutput};
use upload_lambda::my_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(LogOutput::Lambda);

    if let Err(e) = lambda_runtime::run(service_fn(my_handler)).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
