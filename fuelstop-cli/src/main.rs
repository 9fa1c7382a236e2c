//! Entry point for the `fuelstop` binary.
#![forbid(unsafe_code)]

use fuelstop_cli::{CliError, run};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = init_logging() {
        report(&err);
    }
    if let Err(err) = run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

/// Route `log` records and tracing events to stderr, filtered by `RUST_LOG`.
fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports failures on stderr"
)]
fn report(err: &dyn std::fmt::Display) {
    eprintln!("fuelstop: {err}");
}
