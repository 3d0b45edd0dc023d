//! # Error Types
//!
//! Structured errors for the constructing and explaining surface of the
//! crate. The boolean validators never produce these; they exist so that
//! `Cpf::new`, `DocumentType::check`, `Mask::parse` and registration
//! checks can say *why* an input was rejected.

use thiserror::Error;

use crate::document::DocumentType;

/// Top-level error type for cadastro operations.
#[derive(Error, Debug)]
pub enum CadastroError {
    /// A tax document failed validation.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// An input mask pattern could not be parsed.
    #[error("mask error: {0}")]
    Mask(#[from] MaskError),

    /// A registration payload was rejected.
    #[error("registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Payload (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Which of the two trailing check digits failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckDigit {
    First,
    Second,
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Reason a CPF or CNPJ candidate was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Digit count after normalization does not match the document type.
    #[error("{} must have {expected} digits, got {actual}", .kind.label())]
    InvalidLength {
        /// Document type being checked.
        kind: DocumentType,
        /// Required digit count.
        expected: usize,
        /// Digit count found after normalization.
        actual: usize,
    },

    /// Every digit is the same; such sequences pass the arithmetic but are
    /// never issued.
    #[error("{} cannot consist of a single repeated digit", .kind.label())]
    RepeatedDigits {
        /// Document type being checked.
        kind: DocumentType,
    },

    /// A check digit does not match the value computed from the prefix.
    #[error("{} {digit} check digit mismatch: expected {expected}, found {found}", .kind.label())]
    CheckDigitMismatch {
        /// Document type being checked.
        kind: DocumentType,
        /// Which check digit failed.
        digit: CheckDigit,
        /// Value computed from the preceding digits.
        expected: u8,
        /// Value present in the input.
        found: u8,
    },

    /// Document type tag is neither `cpf` nor `cnpj`.
    #[error("unknown document type: {0:?}")]
    UnknownType(String),
}

/// Error parsing an input mask pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The pattern contains no `9` placeholder, so no digit could ever be
    /// entered.
    #[error("mask pattern {0:?} has no digit slots")]
    NoDigitSlots(String),
}

/// Reason a registration payload was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// One or more required fields are blank or absent.
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The document failed checksum validation under
    /// [`DocumentPolicy::Checksum`](crate::registration::DocumentPolicy::Checksum).
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_uses_label() {
        let err = DocumentError::InvalidLength {
            kind: DocumentType::Cpf,
            expected: 11,
            actual: 3,
        };
        assert_eq!(err.to_string(), "CPF must have 11 digits, got 3");
    }

    #[test]
    fn check_digit_mismatch_message() {
        let err = DocumentError::CheckDigitMismatch {
            kind: DocumentType::Cnpj,
            digit: CheckDigit::Second,
            expected: 1,
            found: 0,
        };
        assert_eq!(
            err.to_string(),
            "CNPJ second check digit mismatch: expected 1, found 0"
        );
    }

    #[test]
    fn missing_fields_lists_all() {
        let err = RegistrationError::MissingFields(vec!["email", "senha"]);
        assert_eq!(err.to_string(), "required fields missing: email, senha");
    }

    #[test]
    fn document_error_converts_into_top_level() {
        let err: CadastroError = DocumentError::UnknownType("rg".into()).into();
        assert!(matches!(err, CadastroError::Document(_)));
        assert!(err.to_string().contains("\"rg\""));
    }
}
