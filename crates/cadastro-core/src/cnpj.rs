//! # CNPJ: Cadastro Nacional da Pessoa Jurídica
//!
//! Brazilian company registry number: twelve base digits (eight for the
//! company root, four for the branch) followed by two modulo-11 check
//! digits. Display form is `00.000.000/0000-00`.
//!
//! ## Check digits
//!
//! Weights are assigned right to left starting at 2 and cycling through
//! 2..=9, i.e. the digit at distance `j` from the right carries weight
//! `2 + j % 8`. With `r = sum mod 11`, the check digit is 0 when `r < 2`
//! and `11 - r` otherwise. The second digit is computed over the first
//! thirteen digits, including the first check digit.

use serde::Serialize;

use crate::digits::{all_same, digits_of, normalize};
use crate::document::DocumentType;
use crate::error::{CheckDigit, DocumentError};

/// Digit count of a complete CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Input mask for CNPJ fields.
pub const CNPJ_MASK: &str = "99.999.999/9999-99";

fn check_digit(prefix: &[u8]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .rev()
        .enumerate()
        .map(|(j, d)| u32::from(*d) * (2 + (j as u32 % 8)))
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Compute both CNPJ check digits for a twelve-digit base.
pub fn check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended)]
}

/// True iff `raw` normalizes to a checksum-valid CNPJ.
pub fn is_valid_cnpj(raw: &str) -> bool {
    Cnpj::check(raw).is_ok()
}

/// Format `raw` as `00.000.000/0000-00` when it carries exactly fourteen
/// digits; otherwise return the digit-only projection unchanged.
pub fn format_cnpj(raw: &str) -> String {
    let d = normalize(raw);
    if d.len() != CNPJ_LEN {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// A checksum-valid CNPJ, stored as 14 digits without punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ, validating length and both check digits.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] encountered by [`Cnpj::check`].
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentError> {
        let raw = value.into();
        Self::check(&raw)?;
        Ok(Self(normalize(&raw)))
    }

    /// Explain why `raw` is or is not a valid CNPJ.
    ///
    /// # Errors
    ///
    /// Same classification as [`Cpf::check`](crate::cpf::Cpf::check).
    pub fn check(raw: &str) -> Result<(), DocumentError> {
        let digits = digits_of(raw);
        if digits.len() != CNPJ_LEN {
            return Err(DocumentError::InvalidLength {
                kind: DocumentType::Cnpj,
                expected: CNPJ_LEN,
                actual: digits.len(),
            });
        }
        if all_same(&digits) {
            return Err(DocumentError::RepeatedDigits {
                kind: DocumentType::Cnpj,
            });
        }

        for (digit, end) in [(CheckDigit::First, 12), (CheckDigit::Second, 13)] {
            let expected = check_digit(&digits[..end]);
            let found = digits[end];
            if expected != found {
                return Err(DocumentError::CheckDigitMismatch {
                    kind: DocumentType::Cnpj,
                    digit,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Access the CNPJ in canonical 14-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight-digit company root shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The four-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Return the CNPJ in display form: `XX.XXX.XXX/XXXX-XX`.
    pub fn formatted(&self) -> String {
        format_cnpj(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
