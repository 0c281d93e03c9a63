//! CLI entry point for gator.
//!
//! `gator [OPTIONS] <COMMAND> [ARGS...]`: the command name is looked up in
//! the command registry and the remaining arguments are handed to it.

use anyhow::Result;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gator::commands::default_registry;
use gator::config::{ConfigStore, MissingPolicy};
use gator::output::{Output, OutputMode};
use gator::registry::CommandRegistry;
use gator::GatorError;

const NOT_ENOUGH_ARGUMENTS: &str = "Not enough arguments provided";

#[derive(Parser)]
#[command(name = "gator")]
#[command(version)]
#[command(about = "Manage the gator user configuration", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.gatorconfig.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Fail instead of creating a default config file when none exists
    #[arg(long)]
    no_create: bool,
    /// Increase log verbosity (-v info, -vv debug; RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    argv: Vec<String>,
}

fn main() {
    let registry = default_registry();
    let matches = Cli::command()
        .after_help(format!("COMMANDS:\n{}", registry.summary()))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };
    let output = Output::new(mode);

    let Some((name, args)) = cli.argv.split_first() else {
        output.error(NOT_ENOUGH_ARGUMENTS);
        process::exit(1);
    };

    if let Err(err) = run(&cli, &registry, &output, name, args) {
        output.error(&error_message(&err));
        process::exit(1);
    }
}

fn run(
    cli: &Cli,
    registry: &CommandRegistry,
    output: &Output,
    name: &str,
    args: &[String],
) -> Result<()> {
    let missing = if cli.no_create {
        MissingPolicy::Fail
    } else {
        MissingPolicy::Create
    };
    let store = match &cli.config {
        Some(path) => ConfigStore::new(path, missing),
        None => ConfigStore::from_home(missing)?,
    };
    debug!(path = %store.path().display(), ?missing, "Using config file");

    registry.run(name, args, &store, output)?;
    Ok(())
}

/// Single-line message for a failed invocation.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<GatorError>() {
        Some(known) => known.to_string(),
        None => format!("An unknown error occurred: {:#}", err),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs share stderr with error messages; stdout is command output only.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
