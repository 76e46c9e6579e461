use anyhow::Context as _;
use clap::Parser;
use otbr_types::cli::Cli;
use otbr_types::config::AppSettings;
use otbr_types::error::{CliError, CliResult};
use otbr_types::output;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();
    let verbose = cli.verbose || settings.as_ref().is_ok_and(|s| s.verbose);
    init_tracing(verbose, cli.quiet);

    match run(&cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{:#}", err));
            exit_code(&err)
        }
    }
}

fn run(cli: &Cli, settings: CliResult<AppSettings>) -> anyhow::Result<()> {
    let settings = settings.context("failed to load settings")?;
    debug!(?settings, "settings loaded");

    cli.execute(&settings)?;
    Ok(())
}

/// Logs go to stderr so JSON and CSV on stdout stay parseable.
fn init_tracing(verbose: bool, quiet: bool) {
    let default = match (verbose, quiet) {
        (_, true) => "error",
        (true, false) => "debug",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    let status = err
        .downcast_ref::<CliError>()
        .map_or(1, CliError::exit_status);
    ExitCode::from(status)
}
