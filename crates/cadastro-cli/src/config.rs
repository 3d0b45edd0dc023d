//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! default_document_type: cpf      # cpf | cnpj (default cnpj)
//! document_policy: checksum       # digits_only | checksum (default digits_only)
//! ```
//!
//! Command-line flags override these values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cadastro_core::{DocumentPolicy, DocumentType};

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Document type assumed when `--kind` is not given.
    pub default_document_type: DocumentType,
    /// Enforcement applied by `register` when `--policy` is not given.
    pub document_policy: DocumentPolicy,
}

impl CliConfig {
    /// Parse configuration from YAML text. Blank text yields defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            default_document_type = %config.default_document_type,
            document_policy = %config.document_policy,
            "loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_path() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.default_document_type, DocumentType::Cnpj);
        assert_eq!(config.document_policy, DocumentPolicy::DigitsOnly);
    }

    #[test]
    fn parses_yaml_fields() {
        let config =
            CliConfig::from_yaml("default_document_type: cpf\ndocument_policy: checksum\n").unwrap();
        assert_eq!(config.default_document_type, DocumentType::Cpf);
        assert_eq!(config.document_policy, DocumentPolicy::Checksum);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = CliConfig::from_yaml("document_policy: checksum\n").unwrap();
        assert_eq!(config.default_document_type, DocumentType::Cnpj);
        assert_eq!(config.document_policy, DocumentPolicy::Checksum);
    }

    #[test]
    fn blank_yaml_is_default() {
        assert_eq!(CliConfig::from_yaml("  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(CliConfig::from_yaml("policy: checksum\n").is_err());
        assert!(CliConfig::from_yaml("default_document_type: rg\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_document_type: cpf").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_document_type, DocumentType::Cpf);
    }

    #[test]
    fn load_missing_file_is_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/cadastro.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
