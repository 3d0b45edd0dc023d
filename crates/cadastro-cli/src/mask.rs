//! # Mask Subcommand
//!
//! Shows what a masked input field would display for the given keystrokes.
//! Without input, prints the mask pattern itself.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use cadastro_core::phone::phone_mask;
use cadastro_core::{DocumentType, Mask};

use crate::config::CliConfig;
use crate::{render, OutputFormat};

/// Arguments for `cadastro mask`.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Typed input to mask. Omit to print the pattern.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Use the CPF or CNPJ mask.
    #[arg(long, short, conflicts_with_all = ["phone", "pattern"])]
    pub kind: Option<DocumentType>,

    /// Use the mobile phone mask.
    #[arg(long, conflicts_with = "pattern")]
    pub phone: bool,

    /// Use a custom pattern where `9` is a digit slot.
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskReport {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

fn select_mask(args: &MaskArgs, config: &CliConfig) -> Result<Mask> {
    if let Some(pattern) = &args.pattern {
        return Mask::parse(pattern.as_str()).context("invalid --pattern");
    }
    if args.phone {
        return Ok(phone_mask());
    }
    Ok(args.kind.unwrap_or(config.default_document_type).mask())
}

/// Build the report for `args` without printing.
///
/// # Errors
///
/// Fails only when `--pattern` has no digit slots.
pub fn mask_report(args: &MaskArgs, config: &CliConfig) -> Result<MaskReport> {
    let mask = select_mask(args, config)?;
    Ok(MaskReport {
        pattern: mask.pattern().to_string(),
        masked: args.input.as_deref().map(|input| mask.apply(input)),
        complete: args.input.as_deref().map(|input| mask.is_complete(input)),
    })
}

pub fn run_mask(args: &MaskArgs, config: &CliConfig, output: OutputFormat) -> Result<u8> {
    let report = mask_report(args, config)?;
    println!(
        "{}",
        render(&report, output, |r| r
            .masked
            .clone()
            .unwrap_or_else(|| r.pattern.clone()))?
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MaskArgs {
        MaskArgs {
            input: None,
            kind: None,
            phone: false,
            pattern: None,
        }
    }

    #[test]
    fn pattern_only_uses_default_kind() {
        let report = mask_report(&args(), &CliConfig::default()).unwrap();
        assert_eq!(report.pattern, "99.999.999/9999-99");
        assert!(report.masked.is_none());
    }

    #[test]
    fn masks_partial_cpf() {
        let a = MaskArgs {
            input: Some("5299822".into()),
            kind: Some(DocumentType::Cpf),
            ..args()
        };
        let report = mask_report(&a, &CliConfig::default()).unwrap();
        assert_eq!(report.masked.as_deref(), Some("529.982.2"));
        assert_eq!(report.complete, Some(false));
    }

    #[test]
    fn masks_phone() {
        let a = MaskArgs {
            input: Some("11987654321".into()),
            phone: true,
            ..args()
        };
        let report = mask_report(&a, &CliConfig::default()).unwrap();
        assert_eq!(report.masked.as_deref(), Some("(11) 9 8765-4321"));
        assert_eq!(report.complete, Some(true));
    }

    #[test]
    fn custom_pattern() {
        let a = MaskArgs {
            input: Some("01012024".into()),
            pattern: Some("99/99/9999".into()),
            ..args()
        };
        let report = mask_report(&a, &CliConfig::default()).unwrap();
        assert_eq!(report.masked.as_deref(), Some("01/01/2024"));
    }

    #[test]
    fn slotless_pattern_is_error() {
        let a = MaskArgs {
            pattern: Some("--".into()),
            ..args()
        };
        assert!(mask_report(&a, &CliConfig::default()).is_err());
    }
}
