//! # Input Masks
//!
//! A mask is a display pattern where `9` marks a digit slot and every other
//! character is a literal separator, e.g. `999.999.999-99` for CPF or
//! `(99) 9 9999-9999` for a mobile phone.
//!
//! Two operations are built on a mask:
//!
//! - [`Mask::apply`]: progressive masking while the user types. Literals
//!   appear only once a digit follows them; surplus digits are dropped.
//! - [`Mask::format`]: all-or-nothing formatting. Input with exactly
//!   [`Mask::slots`] digits is punctuated, anything else is returned as its
//!   digit-only projection.

use std::str::FromStr;

use crate::digits::normalize;
use crate::error::MaskError;

/// Placeholder character for a digit slot.
pub const DIGIT_SLOT: char = '9';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit,
    Literal(char),
}

/// A parsed input mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    tokens: Vec<Token>,
    slots: usize,
}

impl Mask {
    /// Parse a mask pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::NoDigitSlots`] if the pattern contains no `9`.
    pub fn parse(pattern: impl Into<String>) -> Result<Self, MaskError> {
        let mask = Self::tokenize(pattern.into());
        if mask.slots == 0 {
            return Err(MaskError::NoDigitSlots(mask.pattern));
        }
        Ok(mask)
    }

    /// Build one of the crate's own patterns, which always carry slots.
    pub(crate) fn builtin(pattern: &'static str) -> Self {
        Self::tokenize(pattern.to_string())
    }

    fn tokenize(pattern: String) -> Self {
        let tokens: Vec<Token> = pattern
            .chars()
            .map(|c| {
                if c == DIGIT_SLOT {
                    Token::Digit
                } else {
                    Token::Literal(c)
                }
            })
            .collect();
        let slots = tokens.iter().filter(|t| **t == Token::Digit).count();
        Self {
            pattern,
            tokens,
            slots,
        }
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of digit slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Mask the digits of `raw` as they would appear in a masked field
    /// mid-typing.
    pub fn apply(&self, raw: &str) -> String {
        let digits = normalize(raw);
        let mut next = digits.chars().peekable();
        let mut out = String::with_capacity(self.pattern.len());

        for token in &self.tokens {
            match token {
                Token::Digit => match next.next() {
                    Some(d) => out.push(d),
                    None => break,
                },
                Token::Literal(c) => {
                    if next.peek().is_none() {
                        break;
                    }
                    out.push(*c);
                }
            }
        }

        out
    }

    /// Punctuate `raw` if it has exactly [`slots`](Self::slots) digits,
    /// otherwise return its digit-only projection unchanged.
    pub fn format(&self, raw: &str) -> String {
        let digits = normalize(raw);
        if digits.len() == self.slots {
            self.apply(&digits)
        } else {
            digits
        }
    }

    /// True when `raw` carries exactly as many digits as the mask has slots.
    pub fn is_complete(&self, raw: &str) -> bool {
        normalize(raw).len() == self.slots
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
