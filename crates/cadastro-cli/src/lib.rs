//! # cadastro-cli: Command-Line Interface
//!
//! Thin clap front end over `cadastro-core`.
//!
//! ## Subcommands
//!
//! - `validate`: CPF/CNPJ checksum validation with a rejection reason
//! - `format`: canonical punctuation (lenient for partial input)
//! - `normalize`: digit-only projection
//! - `mask`: progressive input masking for documents, phones, or a custom pattern
//! - `register`: server-side checks over a JSON registration payload
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; every decision is delegated to `cadastro-core`.
//! - Handlers return an exit code: 0 accepted, 1 rejected, 2 operational error
//!   (the latter surfaces as `Err`).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub mod config;
pub mod format;
pub mod mask;
pub mod register;
pub mod validate;

/// How handler results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Render `report` as pretty JSON, or via `text` for human output.
pub fn render<T: Serialize>(
    report: &T,
    output: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
    }
}

/// Read a file, or standard input when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        value: u8,
    }

    #[test]
    fn render_text_and_json() {
        let s = Sample { value: 7 };
        let text = render(&s, OutputFormat::Text, |r| format!("value={}", r.value)).unwrap();
        assert_eq!(text, "value=7");
        let json = render(&s, OutputFormat::Json, |_| unreachable!()).unwrap();
        assert!(json.contains("\"value\": 7"));
    }

    #[test]
    fn read_input_missing_file_is_error() {
        let err = read_input(Path::new("/nonexistent/payload.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/payload.json"));
    }
}
