//! # Document Types and Dispatch
//!
//! [`DocumentType`] is the single definition of the two Brazilian tax
//! documents accepted at registration. Every `match` on it is exhaustive,
//! so adding a variant forces every consumer to handle it.
//!
//! The free functions [`validate_document`] and [`get_document_mask`] are
//! the type-tagged entry points used by form fields and services.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cnpj::{self, Cnpj, CNPJ_LEN, CNPJ_MASK};
use crate::cpf::{self, Cpf, CPF_LEN, CPF_MASK};
use crate::error::DocumentError;
use crate::mask::Mask;

/// Brazilian tax document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Company registry number, 14 digits. Preselected on the registration
    /// form.
    #[default]
    Cnpj,
}

impl DocumentType {
    /// Both document types, CPF first.
    pub fn all() -> &'static [DocumentType] {
        &[Self::Cpf, Self::Cnpj]
    }

    /// Lowercase tag used on the wire and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }

    /// Uppercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Prompt shown in an empty input field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Cpf => "Digite seu CPF",
            Self::Cnpj => "Digite o CNPJ",
        }
    }

    /// Number of digits in a complete document.
    pub fn digit_len(&self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Masked-input pattern; `9` is a digit slot.
    pub fn mask_pattern(&self) -> &'static str {
        match self {
            Self::Cpf => CPF_MASK,
            Self::Cnpj => CNPJ_MASK,
        }
    }

    /// Parsed [`Mask`] for progressive input masking.
    pub fn mask(&self) -> Mask {
        Mask::builtin(self.mask_pattern())
    }

    /// Checksum validation for this type. Total; see
    /// [`is_valid_cpf`](crate::cpf::is_valid_cpf) and
    /// [`is_valid_cnpj`](crate::cnpj::is_valid_cnpj).
    pub fn validate(&self, raw: &str) -> bool {
        match self {
            Self::Cpf => cpf::is_valid_cpf(raw),
            Self::Cnpj => cnpj::is_valid_cnpj(raw),
        }
    }

    /// Explain why `raw` is not a valid document of this type.
    ///
    /// # Errors
    ///
    /// See [`Cpf::check`] and [`Cnpj::check`].
    pub fn check(&self, raw: &str) -> Result<(), DocumentError> {
        match self {
            Self::Cpf => Cpf::check(raw),
            Self::Cnpj => Cnpj::check(raw),
        }
    }

    /// Canonical display formatting with identity fallback for input of the
    /// wrong length.
    pub fn format(&self, raw: &str) -> String {
        match self {
            Self::Cpf => cpf::format_cpf(raw),
            Self::Cnpj => cnpj::format_cnpj(raw),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DocumentError;

    /// Parse `cpf` or `cnpj`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("cpf") {
            Ok(Self::Cpf)
        } else if tag.eq_ignore_ascii_case("cnpj") {
            Ok(Self::Cnpj)
        } else {
            Err(DocumentError::UnknownType(s.to_string()))
        }
    }
}

/// Validate `raw` as a document of type `kind`.
///
/// `None` and the empty string are `false`. There is no type inference:
/// a valid CNPJ checked as CPF is `false`.
pub fn validate_document(raw: Option<&str>, kind: DocumentType) -> bool {
    match raw {
        None | Some("") => false,
        Some(value) => {
            let valid = kind.validate(value);
            tracing::debug!(kind = %kind, valid, "document validated");
            valid
        }
    }
}

/// Input-mask pattern for `kind`.
pub fn get_document_mask(kind: DocumentType) -> &'static str {
    kind.mask_pattern()
}

/// A checksum-valid document of either type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "lowercase")]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Validate `raw` as `kind` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the [`DocumentError`] explaining the rejection.
    pub fn parse(raw: &str, kind: DocumentType) -> Result<Self, DocumentError> {
        match kind {
            DocumentType::Cpf => Cpf::new(raw).map(Self::Cpf),
            DocumentType::Cnpj => Cnpj::new(raw).map(Self::Cnpj),
        }
    }

    /// The document's type.
    pub fn kind(&self) -> DocumentType {
        match self {
            Self::Cpf(_) => DocumentType::Cpf,
            Self::Cnpj(_) => DocumentType::Cnpj,
        }
    }

    /// Canonical digit-only form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Display form with punctuation.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind().label(), self.formatted())
    }
}
