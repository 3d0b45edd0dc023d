//! # Phone Numbers
//!
//! Brazilian mobile numbers as entered on the registration form: two-digit
//! area code followed by a nine-digit subscriber number starting with 9.

use crate::digits::normalize;
use crate::mask::Mask;

/// Input mask for mobile (WhatsApp) numbers.
pub const PHONE_MASK: &str = "(99) 9 9999-9999";

/// Digit count of a complete mobile number including area code.
pub const PHONE_LEN: usize = 11;

/// Parsed [`PHONE_MASK`].
pub fn phone_mask() -> Mask {
    Mask::builtin(PHONE_MASK)
}

/// Progressively mask a phone number as typed, e.g. `"1198"` becomes
/// `"(11) 9 8"`.
pub fn format_phone(raw: &str) -> String {
    phone_mask().apply(raw)
}

/// True when `raw` carries a full area code and subscriber number.
pub fn is_complete_phone(raw: &str) -> bool {
    normalize(raw).len() == PHONE_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_complete_number() {
        assert_eq!(format_phone("11987654321"), "(11) 9 8765-4321");
        assert_eq!(format_phone("+55 (11) 98765-4321"), "(55) 1 1987-6543");
    }

    #[test]
    fn formats_partial_number() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("1198"), "(11) 9 8");
        assert_eq!(format_phone("1198765"), "(11) 9 8765");
    }

    #[test]
    fn completeness() {
        assert!(is_complete_phone("(11) 9 8765-4321"));
        assert!(!is_complete_phone("(11) 9 8765-432"));
        assert_eq!(phone_mask().slots(), PHONE_LEN);
    }
}
