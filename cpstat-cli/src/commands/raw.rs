//! Raw command - print the unnormalized upstream payload.

use anyhow::{Result, anyhow};
use clap::Args;
use cpstat_fetch::FetchContext;
use cpstat_platforms::PlatformRegistry;
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the raw command.
#[derive(Args)]
pub struct RawArgs {
    /// Platform name: cf, lc, cc, gfg (or a full name).
    pub platform: String,

    /// Username on that platform.
    pub username: String,
}

/// Runs the raw command.
pub async fn run(args: &RawArgs, cli: &Cli) -> Result<()> {
    let platform = PlatformRegistry::resolve(&args.platform).ok_or_else(|| {
        anyhow!(
            "Unknown platform: {}. Use: cf, lc, cc, gfg",
            args.platform
        )
    })?;

    let username = args.username.trim();
    if username.is_empty() {
        return Err(anyhow!("Username must not be empty"));
    }

    let effective = super::effective(cli)?;
    let ctx = FetchContext::from_options(&effective.fetch_options())?;

    info!(%platform, username, "Fetching raw payload");
    let payload = PlatformRegistry::fetch_raw(&ctx, platform, username).await?;

    match cli.format {
        OutputFormat::Text => println!("{}", payload.to_pretty_string()),
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_raw(&payload)?);
        }
    }

    Ok(())
}
