//! s3-inspect - S3 bucket inspector
//!
//! Reports the oldest and newest objects of a bucket and the website URL
//! of the newest one.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod exit_code;
mod output;

use commands::Cli;

/// Log directives applied by `--debug`
const DEBUG_DIRECTIVES: &str = "inspect_core=debug,inspect_s3=debug,s3_inspect=debug";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.debug) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}

/// Initialize tracing subscriber for logging on stderr
fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::try_new(DEBUG_DIRECTIVES)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}
