//! # Format and Normalize Subcommands

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cadastro_core::{normalize, DocumentType};

use crate::config::CliConfig;
use crate::{render, OutputFormat};

/// Arguments for `cadastro format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Document to format.
    #[arg(value_name = "DOCUMENT")]
    pub document: String,

    /// Document type (cpf or cnpj). Defaults to the configured type.
    #[arg(long, short)]
    pub kind: Option<DocumentType>,
}

/// Arguments for `cadastro normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Text to reduce to its digits.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

/// Input and transformed output of a formatting command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub input: String,
    pub output: String,
}

/// Format `args.document` for its document type.
///
/// Input of the wrong length comes back digit-only rather than failing.
pub fn format_report(args: &FormatArgs, config: &CliConfig) -> FormatReport {
    let kind = args.kind.unwrap_or(config.default_document_type);
    FormatReport {
        input: args.document.clone(),
        output: kind.format(&args.document),
    }
}

pub fn run_format(args: &FormatArgs, config: &CliConfig, output: OutputFormat) -> Result<u8> {
    let report = format_report(args, config);
    println!("{}", render(&report, output, |r| r.output.clone())?);
    Ok(0)
}

pub fn run_normalize(args: &NormalizeArgs, output: OutputFormat) -> Result<u8> {
    let report = FormatReport {
        input: args.input.clone(),
        output: normalize(&args.input),
    };
    println!("{}", render(&report, output, |r| r.output.clone())?);
    Ok(0)
}
