//! # Validate Subcommand
//!
//! Checksum validation of a single CPF or CNPJ, with the reason for any
//! rejection.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use cadastro_core::{normalize, DocumentType};

use crate::config::CliConfig;
use crate::{render, OutputFormat};

/// Arguments for the `cadastro validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate, with or without punctuation.
    #[arg(value_name = "DOCUMENT")]
    pub document: String,

    /// Document type (cpf or cnpj). Defaults to the configured type.
    #[arg(long, short)]
    pub kind: Option<DocumentType>,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    pub kind: DocumentType,
    pub digits: String,
    pub formatted: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidateReport {
    fn text(&self) -> String {
        match &self.reason {
            None => format!("valid: {} {}", self.kind.label(), self.formatted),
            Some(reason) => format!("invalid: {reason}"),
        }
    }
}

/// Validate `args.document` without printing.
pub fn validate_report(args: &ValidateArgs, config: &CliConfig) -> ValidateReport {
    let kind = args.kind.unwrap_or(config.default_document_type);
    let reason = kind.check(&args.document).err().map(|e| e.to_string());
    ValidateReport {
        kind,
        digits: normalize(&args.document),
        formatted: kind.format(&args.document),
        valid: reason.is_none(),
        reason,
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 for a valid document and 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig, output: OutputFormat) -> Result<u8> {
    let report = validate_report(args, config);
    tracing::info!(kind = %report.kind, valid = report.valid, "validated document");
    println!("{}", render(&report, output, ValidateReport::text)?);
    Ok(if report.valid { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(document: &str, kind: Option<DocumentType>) -> ValidateArgs {
        ValidateArgs {
            document: document.to_string(),
            kind,
        }
    }

    #[test]
    fn valid_cpf_report() {
        let report = validate_report(
            &args("52998224725", Some(DocumentType::Cpf)),
            &CliConfig::default(),
        );
        assert!(report.valid);
        assert_eq!(report.formatted, "529.982.247-25");
        assert_eq!(report.text(), "valid: CPF 529.982.247-25");
    }

    #[test]
    fn kind_falls_back_to_config() {
        let report = validate_report(&args("11.222.333/0001-81", None), &CliConfig::default());
        assert_eq!(report.kind, DocumentType::Cnpj);
        assert!(report.valid);

        let config = CliConfig {
            default_document_type: DocumentType::Cpf,
            ..CliConfig::default()
        };
        let report = validate_report(&args("11.222.333/0001-81", None), &config);
        assert_eq!(report.kind, DocumentType::Cpf);
        assert!(!report.valid);
    }

    #[test]
    fn invalid_report_carries_reason() {
        let report = validate_report(
            &args("12345678901", Some(DocumentType::Cpf)),
            &CliConfig::default(),
        );
        assert!(!report.valid);
        assert_eq!(
            report.text(),
            "invalid: CPF second check digit mismatch: expected 9, found 1"
        );
    }

    #[test]
    fn exit_codes() {
        let config = CliConfig::default();
        let ok = run_validate(&args("11222333000181", None), &config, OutputFormat::Json).unwrap();
        assert_eq!(ok, 0);
        let bad = run_validate(&args("11222333000180", None), &config, OutputFormat::Text).unwrap();
        assert_eq!(bad, 1);
    }

    #[test]
    fn json_omits_reason_when_valid() {
        let report = validate_report(&args("11222333000181", None), &CliConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "cnpj");
        assert!(json.get("reason").is_none());
    }
}
