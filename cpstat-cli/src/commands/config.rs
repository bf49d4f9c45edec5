//! Config command - show the effective configuration.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::CliConfig;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args, Default)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands.
#[derive(Subcommand, Clone, Copy, Default)]
pub enum ConfigAction {
    /// Show the effective configuration (default).
    #[default]
    Show,

    /// Show the config file path.
    Path,
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match args.action.unwrap_or_default() {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_path(cli),
    }
}

fn show_config(cli: &Cli) -> Result<()> {
    let effective = super::effective(cli)?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_config(&effective));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_config(&effective)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = cli.config.clone().or_else(CliConfig::default_path);

    match cli.format {
        OutputFormat::Text => match &path {
            Some(path) => println!("{}", path.display()),
            None => println!("(no config directory on this platform)"),
        },
        OutputFormat::Json => {
            let value = serde_json::json!({
                "configFile": path.map(|p| p.display().to_string()),
            });
            println!("{}", JsonFormatter::new(cli.pretty).format(&value)?);
        }
    }

    Ok(())
}
