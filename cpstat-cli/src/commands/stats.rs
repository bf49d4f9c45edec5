//! Stats command - fetch and render every requested platform.

use anyhow::Result;
use chrono::Utc;
use cpstat_platforms::get_all_stats;
use tracing::{debug, info};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the stats command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let effective = super::effective(cli)?;

    if effective.handles.is_empty() {
        if !cli.quiet {
            eprintln!("Error: Please specify at least one platform username");
            eprintln!("Example: cpstat --cf tourist --lc neal_wu");
        }
        return Ok(ExitCode::NoPlatforms);
    }

    let platforms = effective.handles.requested();
    debug!(?platforms, timeout_ms = effective.timeout_ms, "Fetching stats");

    if cli.format == OutputFormat::Text && !cli.quiet {
        eprintln!("Fetching stats...");
    }

    let stats = get_all_stats(&effective.handles, &effective.fetch_options()).await?;
    info!(
        requested = stats.len(),
        failed = stats.failures().len(),
        "Stats fetched"
    );

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_stats(&stats, &effective.handles));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!(
                "{}",
                formatter.format_stats(&stats, effective.timeout_ms, Utc::now())?
            );
        }
    }

    Ok(ExitCode::Success)
}
