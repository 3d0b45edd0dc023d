//! # Digit Normalization
//!
//! Reduces arbitrary user input (with dots, slashes, hyphens, spaces,
//! parentheses) to the ordered sequence of its ASCII decimal digits.
//! Every validator, formatter and mask in the crate starts here.

/// Keep only the ASCII digits `0`-`9` of `raw`, preserving order.
///
/// Total: empty input yields an empty string, and non-ASCII digit
/// characters (e.g. Arabic-Indic or full-width digits) are dropped.
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `raw`, in order.
pub(crate) fn digits_of(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True when every digit equals the first one.
///
/// An empty slice is considered uniform.
pub(crate) fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cpf_punctuation() {
        assert_eq!(normalize("529.982.247-25"), "52998224725");
    }

    #[test]
    fn strips_cnpj_punctuation() {
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn empty_and_digitless_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("abc-./ "), "");
    }

    #[test]
    fn drops_non_ascii_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE, U+FF15 FULLWIDTH DIGIT FIVE
        assert_eq!(normalize("1\u{0663}2\u{FF15}3"), "123");
    }

    #[test]
    fn digits_of_values() {
        assert_eq!(digits_of("(11) 9 8765-4321"), vec![1, 1, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn all_same_detection() {
        assert!(all_same(&[7; 11]));
        assert!(!all_same(&[1, 1, 2]));
        assert!(all_same(&[]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalization is idempotent for arbitrary strings.
        #[test]
        fn normalize_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Output only ever contains ASCII digits.
        #[test]
        fn normalize_only_digits(s in ".*") {
            prop_assert!(normalize(&s).bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
