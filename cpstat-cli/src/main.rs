// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! cpstat CLI - competitive programming stats from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Codeforces and LeetCode side by side
//! cpstat --cf tourist --lc neal_wu
//!
//! # JSON output with a shorter timeout
//! cpstat --cf tourist --timeout 5000 --format json --pretty
//!
//! # Raw upstream payload
//! cpstat raw gfg some_user
//!
//! # List platforms
//! cpstat platforms
//! ```

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cpstat_core::{Platform, UserHandles};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config as config_cmd, platforms, raw, stats};

// ============================================================================
// CLI Definition
// ============================================================================

/// cpstat CLI - competitive programming stats.
#[derive(Parser)]
#[command(name = "cpstat")]
#[command(about = "Fetch competitive programming stats from multiple platforms")]
#[command(long_about = r#"
cpstat fetches profile statistics from several judges at once.

Supported platforms:
  • Codeforces (--cf)
  • LeetCode (--lc)
  • CodeChef (--cc)
  • GeeksforGeeks (--gfg)

Handles and the timeout can also come from <config dir>/cpstat/config.json;
flags take precedence.

Examples:
  cpstat --cf tourist --lc neal_wu     # Two platforms
  cpstat --gfg geek --format json      # JSON output
  cpstat raw cf tourist                # Raw upstream payload
  cpstat platforms                     # Supported platforms
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'stats' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Codeforces username.
    #[arg(long, value_name = "USERNAME", global = true)]
    pub cf: Option<String>,

    /// LeetCode username.
    #[arg(long, value_name = "USERNAME", global = true)]
    pub lc: Option<String>,

    /// CodeChef username.
    #[arg(long, value_name = "USERNAME", global = true)]
    pub cc: Option<String>,

    /// GeeksforGeeks username.
    #[arg(long, value_name = "USERNAME", global = true)]
    pub gfg: Option<String>,

    /// Request timeout in milliseconds [default: 10000].
    #[arg(
        long,
        value_name = "MS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Usernames given on the command line.
    pub fn handles(&self) -> UserHandles {
        let mut handles = UserHandles::new();
        handles.set(Platform::Codeforces, self.cf.clone());
        handles.set(Platform::LeetCode, self.lc.clone());
        handles.set(Platform::CodeChef, self.cc.clone());
        handles.set(Platform::GeeksforGeeks, self.gfg.clone());
        handles
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and render stats (default if no command specified).
    #[command(visible_alias = "s")]
    Stats,

    /// List supported platforms.
    #[command(visible_alias = "p")]
    Platforms,

    /// Print the raw payload for one platform.
    Raw(raw::RawArgs),

    /// Show configuration.
    Config(config_cmd::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Completed, even if some platforms failed.
    Success = 0,
    /// Unexpected top-level failure.
    Error = 1,
    /// No platform username given.
    NoPlatforms = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

const CRATE_TARGETS: [&str; 4] = ["cpstat", "cpstat_core", "cpstat_fetch", "cpstat_platforms"];

/// Default filter: warn everywhere, `level` for our own crates.
fn filter_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    std::iter::once("warn".to_string())
        .chain(CRATE_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Stats) | None => stats::run(&cli).await,
        Some(Commands::Platforms) => platforms::run(&cli).map(|()| ExitCode::Success),
        Some(Commands::Raw(args)) => raw::run(args, &cli).await.map(|()| ExitCode::Success),
        Some(Commands::Config(args)) => config_cmd::run(args, &cli).map(|()| ExitCode::Success),
    };

    let code = result.unwrap_or_else(|e| report(&e, cli.quiet));
    std::process::exit(code as i32);
}

fn report(error: &anyhow::Error, quiet: bool) -> ExitCode {
    if !quiet {
        eprintln!("Error: {error:#}");
    }
    ExitCode::Error
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_handles_from_flags() {
        let cli = Cli::parse_from(["cpstat", "--cf", "tourist", "--gfg", "geek"]);
        let handles = cli.handles();
        assert_eq!(handles.get(Platform::Codeforces), Some("tourist"));
        assert_eq!(handles.get(Platform::GeeksforGeeks), Some("geek"));
        assert!(handles.get(Platform::LeetCode).is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::parse_from(["cpstat", "stats", "--lc", "neal", "--timeout", "500"]);
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.lc.as_deref(), Some("neal"));
        assert_eq!(cli.timeout, Some(500));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["cpstat", "--cf", "x", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_raw_arguments() {
        let cli = Cli::parse_from(["cpstat", "raw", "gfg", "geek", "-f", "json"]);
        match cli.command {
            Some(Commands::Raw(args)) => {
                assert_eq!(args.platform, "gfg");
                assert_eq!(args.username, "geek");
            }
            _ => panic!("expected raw command"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(
            filter_directive(false),
            "warn,cpstat=warn,cpstat_core=warn,cpstat_fetch=warn,cpstat_platforms=warn"
        );
        assert!(filter_directive(true).contains("cpstat_platforms=debug"));
    }
}
