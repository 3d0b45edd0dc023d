//! # Register Subcommand
//!
//! Runs the server-side registration checks over a JSON payload file (or
//! standard input) and prints the normalized record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cadastro_core::{DocumentPolicy, RegistrationError, RegistrationRequest, ValidatedRegistration};

use crate::config::CliConfig;
use crate::{read_input, render, OutputFormat};

/// Arguments for `cadastro register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// JSON payload file, or `-` for standard input.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Document enforcement (digits_only or checksum). Defaults to the
    /// configured policy.
    #[arg(long)]
    pub policy: Option<DocumentPolicy>,
}

/// Parse and check the payload at `args.path`.
///
/// The outer `Result` carries I/O and JSON errors; the inner one the
/// registration verdict.
pub fn check_registration(
    args: &RegisterArgs,
    config: &CliConfig,
) -> Result<Result<ValidatedRegistration, RegistrationError>> {
    let payload = read_input(&args.path)?;
    let request = RegistrationRequest::from_json(&payload)
        .with_context(|| format!("malformed registration payload {}", args.path.display()))?;
    let policy = args.policy.unwrap_or(config.document_policy);
    tracing::debug!(?request, %policy, "checking registration payload");
    Ok(request.validate(policy))
}

fn summary(reg: &ValidatedRegistration) -> String {
    let mut lines = vec![
        format!("accepted: {} <{}>", reg.nome, reg.email),
        format!("nome fantasia: {}", reg.nome_fantasia),
    ];
    if let Some(doc) = &reg.documento {
        let note = if doc.checksum_valid {
            ""
        } else {
            " (checksum not verified)"
        };
        lines.push(format!(
            "documento: {} {}{note}",
            doc.kind.label(),
            doc.kind.format(&doc.digits)
        ));
    }
    if let Some(tipo) = &reg.tipo_empresa {
        lines.push(format!("tipo de empresa: {tipo}"));
    }
    if let Some(razao) = &reg.razao_social {
        lines.push(format!("razão social: {razao}"));
    }
    if let Some(phone) = &reg.whatsapp {
        lines.push(format!("whatsapp: {}", cadastro_core::format_phone(phone)));
    }
    lines.join("\n")
}

/// Execute the register subcommand.
///
/// Returns exit code 0 when the payload is accepted, 1 when rejected.
pub fn run_register(args: &RegisterArgs, config: &CliConfig, output: OutputFormat) -> Result<u8> {
    match check_registration(args, config)? {
        Ok(reg) => {
            println!("{}", render(&reg, output, summary)?);
            Ok(0)
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration rejected");
            match output {
                OutputFormat::Text => println!("rejected: {e}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))?
                ),
            }
            Ok(1)
        }
    }
}
