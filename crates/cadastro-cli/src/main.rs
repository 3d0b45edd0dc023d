//! # cadastro CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cadastro_cli::config::CliConfig;
use cadastro_cli::format::{run_format, run_normalize, FormatArgs, NormalizeArgs};
use cadastro_cli::mask::{run_mask, MaskArgs};
use cadastro_cli::register::{run_register, RegisterArgs};
use cadastro_cli::validate::{run_validate, ValidateArgs};
use cadastro_cli::OutputFormat;

/// Brazilian CPF/CNPJ toolkit for company registration.
///
/// Validates and formats tax documents, previews masked input, and checks
/// registration payloads before storage.
#[derive(Parser, Debug)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a CPF or CNPJ checksum.
    Validate(ValidateArgs),

    /// Format a CPF or CNPJ with canonical punctuation.
    Format(FormatArgs),

    /// Strip everything but digits.
    Normalize(NormalizeArgs),

    /// Preview masked input for a document, phone, or custom pattern.
    Mask(MaskArgs),

    /// Check a JSON registration payload.
    Register(RegisterArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = OutputFormat::from_json_flag(cli.json);

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Validate(args) => run_validate(args, &config, output),
        Commands::Format(args) => run_format(args, &config, output),
        Commands::Normalize(args) => run_normalize(args, output),
        Commands::Mask(args) => run_mask(args, &config, output),
        Commands::Register(args) => run_register(args, &config, output),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
