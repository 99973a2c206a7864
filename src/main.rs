//! Pet Roster CLI - Command-line interface for driving the pet roster
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates flags to a roster configuration and output format
//! - Handles external concerns like process exit codes and terminal output

use clap::{Parser, ValueEnum};
use pet_roster::{OutputFormat, RosterConfig, RosterResult};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Pet Roster - Feed every pet and hear what it has to say
#[derive(Parser)]
#[command(name = "pet-roster")]
#[command(version = "0.1.0")]
#[command(about = "Drive a roster of pets through speaking and feeding")]
struct Cli {
    /// Roster configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if !cli.ignored.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", cli.ignored.len());
    }

    let stdout = io::stdout();
    let result = run(cli.config, cli.format, stdout.lock());

    match result {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run<W: Write>(
    config_path: Option<PathBuf>,
    format: OutputFormatArg,
    writer: W,
) -> RosterResult<i32> {
    let config = if let Some(config_path) = config_path {
        RosterConfig::load_from_file(config_path)?
    } else {
        RosterConfig::default()
    };

    pet_roster::run_with_config(&config, format.into(), writer)?;

    Ok(0)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
