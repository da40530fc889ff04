//! # Digit-String Primitives
//!
//! Small helpers shared by the checksum engine, the national validators, and
//! the IBAN codec. Account number fields are fixed-width, zero-padded digit
//! strings on the wire; these functions implement the two halves of that
//! contract — right-aligned zero-fill on the way in, leading-zero strip on
//! the way out.

/// Whether the string is non-empty ASCII digits only.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Right-align `value` in a `width`-character slot, filling with `'0'`.
///
/// Returns `None` when the value is longer than the slot — overflow is a
/// rejection, never a truncation.
pub fn zero_pad(value: &str, width: usize) -> Option<String> {
    if value.len() > width {
        return None;
    }
    let mut out = String::with_capacity(width);
    for _ in value.len()..width {
        out.push('0');
    }
    out.push_str(value);
    Some(out)
}

/// Strip leading `'0'` characters from a fixed-width slot value.
///
/// A slot that is entirely zeros becomes the empty string, which downstream
/// validators treat as a missing field.
pub fn strip_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}

/// Remove ASCII whitespace from a formatted identifier.
///
/// Paper-format IBANs arrive with grouping spaces; this is the only
/// normalization applied before parsing.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Padding then stripping recovers the value, modulo its own
        /// leading zeros.
        #[test]
        fn pad_then_strip_round_trips(value in "[1-9][0-9]{0,9}", extra in 0usize..8) {
            let width = value.len() + extra;
            let padded = zero_pad(&value, width).unwrap();
            prop_assert_eq!(padded.len(), width);
            prop_assert_eq!(strip_leading_zeros(&padded), value.as_str());
        }

        /// Padding never changes the numeric interpretation.
        #[test]
        fn pad_preserves_value(n in 0u64..1_000_000_000, extra in 0usize..6) {
            let s = n.to_string();
            let padded = zero_pad(&s, s.len() + extra).unwrap();
            prop_assert_eq!(padded.parse::<u64>().unwrap(), n);
        }
    }
}
