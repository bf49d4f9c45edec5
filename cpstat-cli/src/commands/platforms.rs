//! Platforms command - list supported platforms.

use anyhow::Result;
use cpstat_platforms::PlatformRegistry;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the platforms command.
pub fn run(cli: &Cli) -> Result<()> {
    let descriptors = PlatformRegistry::all();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_platforms(descriptors));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_platforms(descriptors)?);
        }
    }

    Ok(())
}
