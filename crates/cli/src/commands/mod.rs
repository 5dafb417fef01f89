//! CLI definition and execution

use clap::Parser;

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

mod inspect;

/// s3-inspect - report the oldest and newest objects of an S3 bucket
///
/// Lists one page of objects (optionally under a prefix), prints them in
/// listing order and sorted by last-modified time, and prints the website
/// URL of the newest object when the bucket is hosted as a static website.
/// Credentials come from the standard AWS credential chain.
#[derive(Parser, Debug)]
#[command(name = "s3-inspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bucket to inspect
    pub bucket: Option<String>,

    /// Only inspect keys starting with this prefix
    pub prefix: Option<String>,

    /// Output format: human-readable or JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,

    /// Shared-config profile used to resolve credentials
    #[arg(long)]
    pub profile: Option<String>,

    /// Endpoint of an S3-compatible service
    #[arg(long, env = "S3_INSPECT_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long, default_value = "false")]
    pub path_style: bool,

    /// Maximum number of objects fetched by the single list call
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=1000))]
    pub max_keys: Option<i32>,
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    inspect::execute(cli, output_config).await
}
