//! # Inline Validation Feedback
//!
//! Tri-state status shown next to a document field while the user types.
//! An empty field shows nothing; once anything is entered the field is
//! marked valid or invalid.

use serde::{Deserialize, Serialize};

use crate::document::{validate_document, DocumentType};

/// Display state of a document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Nothing entered yet; no feedback.
    Pending,
    Valid,
    Invalid,
}

impl ValidationStatus {
    /// Message shown under the field, if any.
    pub fn message(&self, kind: DocumentType) -> Option<String> {
        match self {
            Self::Pending => None,
            Self::Valid => Some(format!("{} válido", kind.label())),
            Self::Invalid => Some(format!("{} inválido", kind.label())),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Assess the current content of a document field.
pub fn assess(raw: &str, kind: DocumentType) -> ValidationStatus {
    if raw.trim().is_empty() {
        return ValidationStatus::Pending;
    }
    if validate_document(Some(raw), kind) {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Invalid
    }
}
