//! CLI subcommand definitions and handlers.
//!
//! - `otbr-addr locator <VALUE>` - Build the address for a 16-bit locator
//! - `otbr-addr inspect <ADDRESS>` - Show every lane view of an address
//! - `otbr-addr codes [VALUE]` - List the agent error codes

mod codes;
mod inspect;
mod locator;

pub use codes::CodesCommand;
pub use inspect::{InspectCommand, LaneEdit};
pub use locator::{parse_locator, LocatorCommand};

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// otbr-addr - Inspect Thread border router addresses and status codes.
#[derive(Parser, Debug)]
#[command(name = "otbr-addr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect IPv6 addresses, Thread locators and agent error codes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print hex values in upper case
    #[arg(short = 'U', long, global = true)]
    pub uppercase: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the address that carries a 16-bit locator
    #[command(alias = "l")]
    Locator(LocatorCommand),

    /// Show every lane view of an address
    #[command(alias = "i")]
    Inspect(InspectCommand),

    /// List agent error codes
    #[command(alias = "c")]
    Codes(CodesCommand),
}

/// Resolved rendering options shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub format: OutputFormat,
    pub uppercase: bool,
}

impl Context {
    /// Merge command-line flags over loaded settings.
    pub fn new(cli: &Cli, settings: &AppSettings) -> Self {
        Self {
            format: cli.output.unwrap_or(settings.default_output_format),
            uppercase: cli.uppercase || settings.uppercase_hex,
        }
    }
}

impl Cli {
    /// Load settings from `--config` or the default location.
    pub fn settings(&self) -> CliResult<AppSettings> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Run the selected subcommand.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let ctx = Context::new(self, settings);
        debug!(?ctx, "dispatching command");

        match &self.command {
            Commands::Locator(cmd) => cmd.execute(&ctx),
            Commands::Inspect(cmd) => cmd.execute(&ctx),
            Commands::Codes(cmd) => cmd.execute(&ctx),
        }
    }
}
