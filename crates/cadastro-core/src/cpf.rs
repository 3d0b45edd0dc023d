//! # CPF: Cadastro de Pessoas Físicas
//!
//! Brazilian individual taxpayer number: nine base digits followed by two
//! modulo-11 check digits. Display form is `000.000.000-00`.
//!
//! ## Check digits
//!
//! Each check digit is computed over all digits that precede it with
//! descending weights ending at 2 (10..2 for the first, 11..2 for the
//! second). The digit is `(sum * 10) mod 11`, with 10 folded to 0.

use serde::Serialize;

use crate::digits::{all_same, digits_of, normalize};
use crate::document::DocumentType;
use crate::error::{CheckDigit, DocumentError};

/// Digit count of a complete CPF.
pub const CPF_LEN: usize = 11;

/// Input mask for CPF fields.
pub const CPF_MASK: &str = "999.999.999-99";

fn check_digit(prefix: &[u8]) -> u8 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// Compute both CPF check digits for a nine-digit base.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// True iff `raw` normalizes to a checksum-valid CPF.
///
/// Punctuation is ignored. Wrong length, repeated-digit sequences and
/// check-digit mismatches all yield `false`.
pub fn is_valid_cpf(raw: &str) -> bool {
    Cpf::check(raw).is_ok()
}

/// Format `raw` as `000.000.000-00` when it carries exactly eleven digits.
///
/// Any other digit count returns the digit-only projection unchanged, so
/// partially typed input is never mangled. No checksum is applied.
pub fn format_cpf(raw: &str) -> String {
    let d = normalize(raw);
    if d.len() != CPF_LEN {
        return d;
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// A checksum-valid CPF.
///
/// The canonical storage format is 11 digits without punctuation. The
/// constructor accepts both `"52998224725"` and `"529.982.247-25"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Create a CPF, validating length and both check digits.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] encountered by [`Cpf::check`].
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentError> {
        let raw = value.into();
        Self::check(&raw)?;
        Ok(Self(normalize(&raw)))
    }

    /// Explain why `raw` is or is not a valid CPF.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::InvalidLength`] if `raw` does not carry 11 digits
    /// - [`DocumentError::RepeatedDigits`] for sequences like `111.111.111-11`
    /// - [`DocumentError::CheckDigitMismatch`] naming the failing digit
    pub fn check(raw: &str) -> Result<(), DocumentError> {
        let digits = digits_of(raw);
        if digits.len() != CPF_LEN {
            return Err(DocumentError::InvalidLength {
                kind: DocumentType::Cpf,
                expected: CPF_LEN,
                actual: digits.len(),
            });
        }
        if all_same(&digits) {
            return Err(DocumentError::RepeatedDigits {
                kind: DocumentType::Cpf,
            });
        }

        for (digit, end) in [(CheckDigit::First, 9), (CheckDigit::Second, 10)] {
            let expected = check_digit(&digits[..end]);
            let found = digits[end];
            if expected != found {
                return Err(DocumentError::CheckDigitMismatch {
                    kind: DocumentType::Cpf,
                    digit,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Access the CPF in canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in display form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        format_cpf(&self.0)
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
