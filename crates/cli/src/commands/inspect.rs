//! Bucket inspection command
//!
//! Validates arguments, merges the config file with command-line overrides,
//! runs the inspector against S3, and prints the report.

use inspect_core::{
    ColorMode, ConfigManager, Defaults, InspectRequest, InspectionReport, Inspector, ObjectSummary,
    OutputFormat, ProviderConfig,
};
use inspect_s3::S3Client;

use super::Cli;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Execute the inspection
pub async fn execute(cli: Cli, output_config: OutputConfig) -> ExitCode {
    // Arguments are checked before anything touches disk or network
    let request = match InspectRequest::new(cli.bucket.clone(), cli.prefix.clone()) {
        Ok(r) => r,
        Err(e) => {
            Formatter::new(output_config).error(&e.to_string());
            return ExitCode::UsageError;
        }
    };

    let config = match ConfigManager::new().and_then(|m| m.load()) {
        Ok(c) => c,
        Err(e) => {
            Formatter::new(output_config).error(&format!("Failed to load config: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let formatter = Formatter::new(resolve_output(
        &output_config,
        &config.defaults,
        console::Term::stdout().is_term(),
    ));

    let provider = merge_provider(config.provider, &cli);
    tracing::debug!(?provider, "provider settings");
    let client = match S3Client::new(&provider).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let request = request.with_max_keys(provider.max_keys);
    match Inspector::new(client).inspect(&request).await {
        Ok(report) => {
            print_report(&report, &formatter);
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from_error(&e)
        }
    }
}

/// Command-line values win over the config file
fn merge_provider(mut provider: ProviderConfig, cli: &Cli) -> ProviderConfig {
    if cli.profile.is_some() {
        provider.profile = cli.profile.clone();
    }
    if cli.endpoint_url.is_some() {
        provider.endpoint_url = cli.endpoint_url.clone();
    }
    if cli.max_keys.is_some() {
        provider.max_keys = cli.max_keys;
    }
    provider.force_path_style |= cli.path_style;
    provider
}

/// Flags win over the config file; colors also depend on stdout being a terminal
fn resolve_output(flags: &OutputConfig, defaults: &Defaults, is_terminal: bool) -> OutputConfig {
    OutputConfig {
        json: flags.json || defaults.output == OutputFormat::Json,
        no_color: flags.no_color || !defaults.color.enabled(is_terminal),
        quiet: flags.quiet,
    }
}

fn print_report(report: &InspectionReport, formatter: &Formatter) {
    if let Some(warning) = truncation_warning(report, formatter) {
        formatter.warning(&warning);
    }

    match render_report(report, formatter) {
        Ok(Some(text)) => formatter.println(&text),
        Ok(None) => {}
        Err(e) => formatter.error(&format!("Error serializing output: {e}")),
    }
}

/// Notice for a listing cut off after one page; silent in quiet and JSON modes
fn truncation_warning(report: &InspectionReport, formatter: &Formatter) -> Option<String> {
    if !report.truncated || !formatter.warnings_enabled() {
        return None;
    }
    Some(format!(
        "Listing truncated: only the first {} objects were inspected",
        report.objects.len()
    ))
}

/// Text for stdout, or None in quiet mode
fn render_report(
    report: &InspectionReport,
    formatter: &Formatter,
) -> serde_json::Result<Option<String>> {
    if formatter.is_quiet() {
        return Ok(None);
    }
    if formatter.is_json() {
        return serde_json::to_string_pretty(report).map(Some);
    }
    Ok(Some(render_lines(report, formatter).join("\n")))
}

fn render_lines(report: &InspectionReport, formatter: &Formatter) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.prefix {
        Some(prefix) => lines.push(format!(
            "Bucket: {} ({}), prefix: {prefix}",
            report.bucket, report.region
        )),
        None => lines.push(format!("Bucket: {} ({})", report.bucket, report.region)),
    }

    lines.push(formatter.heading("Unsorted"));
    lines.extend(report.objects.iter().map(object_line));

    lines.push(formatter.heading("Sorted by Last Modified Date"));
    lines.extend(report.sorted.iter().map(object_line));

    lines.push(format!("Oldest: {}", summary_line(&report.oldest)));
    lines.push(format!("Newest: {}", summary_line(&report.newest)));

    if let Some(url) = &report.website_url {
        lines.push(format!("Website URL: {url}"));
    }

    lines
}

fn format_time(object: &ObjectSummary) -> String {
    object
        .last_modified
        .strftime("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn object_line(object: &ObjectSummary) -> String {
    format!(
        "[{}] {:>10} {}",
        format_time(object),
        object.size_human(),
        object.key
    )
}

fn summary_line(object: &ObjectSummary) -> String {
    format!("{} LM: {} UTC", object.key, format_time(object))
}
