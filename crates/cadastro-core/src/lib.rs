//! # cadastro-core: Brazilian Tax-Document Primitives
//!
//! Pure, stateless building blocks for the company registration flow:
//! digit normalization, CPF and CNPJ checksum validation, canonical
//! formatting, interactive input masks, and server-side checks over the
//! registration payload.
//!
//! ## Key Design Principles
//!
//! 1. **Total validators.** `is_valid_cpf`, `is_valid_cnpj` and
//!    `validate_document` never fail or panic. Malformed, empty, or
//!    wrong-length input is simply `false`.
//!
//! 2. **Lenient formatters.** `format_cpf` and `format_cnpj` only punctuate
//!    input of the exact expected length. Anything else comes back as its
//!    digit-only projection, so partially typed input survives.
//!
//! 3. **Closed document enum.** [`DocumentType`] has exactly two variants and
//!    every consumer matches on it exhaustively. An unknown tag is an error,
//!    never an implicit CNPJ.
//!
//! 4. **Validated newtypes.** [`Cpf`] and [`Cnpj`] can only be constructed
//!    from checksum-valid input and always hold the canonical digit form.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cadastro-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

/// Implement `Deserialize` for a validated string newtype by deserializing
/// a plain `String` and routing it through the type's `new()` constructor,
/// so invalid documents are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod cnpj;
pub mod company;
pub mod cpf;
pub mod digits;
pub mod document;
pub mod error;
pub mod feedback;
pub mod mask;
pub mod phone;
pub mod registration;

// Re-export primary types for ergonomic imports.
pub use cnpj::{format_cnpj, is_valid_cnpj, Cnpj};
pub use company::{is_known_company_type, COMPANY_TYPES};
pub use cpf::{format_cpf, is_valid_cpf, Cpf};
pub use digits::normalize;
pub use document::{get_document_mask, validate_document, Document, DocumentType};
pub use error::{CadastroError, CheckDigit, DocumentError, MaskError, RegistrationError};
pub use feedback::{assess, ValidationStatus};
pub use mask::Mask;
pub use phone::{format_phone, is_complete_phone, PHONE_MASK};
pub use registration::{DocumentPolicy, RegistrationRequest, ValidatedDocument, ValidatedRegistration};
