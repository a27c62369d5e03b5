use std::str::FromStr;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Log level for our own crates if RUST_LOG is not set
const DEFAULT_DIRECTIVES: [&str; 2] = ["upload_lambda=info", "local_invoke=info"];

/// Where the log output ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// CloudWatch: no colours, the timestamps are added by CloudWatch
    Lambda,
    /// A terminal
    Local,
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this workspace
/// - ERROR for everything else
pub fn init_tracing(output: LogOutput) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_DIRECTIVES.iter().copied()))
        .with_ansi(output == LogOutput::Local) // the color codes work in the terminal only
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

/// Builds the filter from RUST_LOG, falling back onto the defaults.
/// Invalid directives in RUST_LOG are ignored.
fn env_filter<'a>(defaults: impl Iterator<Item = &'a str>) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();

    // RUST_LOG takes precedence over the defaults
    if std::env::var(EnvFilter::DEFAULT_ENV).is_err() {
        for directive in defaults {
            match Directive::from_str(directive) {
                Ok(v) => filter = filter.add_directive(v),
                Err(e) => eprintln!("Invalid logging directive {directive}: {e}. It's a bug."),
            }
        }
    }

    filter
}
