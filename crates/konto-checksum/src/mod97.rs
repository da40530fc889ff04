//! # ISO 7064 Mod 97-10
//!
//! The rolling-modulo reduction shared by the national mod 97-10 check and
//! the ISO 13616 IBAN check. The digit string is processed left to right
//! with a running remainder, so arbitrarily long account numbers reduce
//! without big-integer arithmetic.

use tracing::debug;

/// Reduce a digit string modulo 97.
///
/// Processes left to right, keeping `r = (r * 10 + digit) % 97` — the
/// running remainder never exceeds two digits, so the intermediate value
/// stays far inside machine-integer range. Leading zeros contribute
/// nothing to the remainder but are accepted; they are significant only
/// in that the input is taken exactly as given.
///
/// Returns `None` if the input is empty or contains a non-digit byte.
pub fn remainder(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    let mut r: u32 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        r = (r * 10 + u32::from(b - b'0')) % 97;
    }
    Some(r)
}

/// Compute the two mod 97-10 check digits for a body.
///
/// Check digits are `98 - (body * 100 mod 97)`, zero-padded to width 2.
pub fn check_digits(body: &str) -> Option<String> {
    let mut with_placeholder = String::with_capacity(body.len() + 2);
    with_placeholder.push_str(body);
    with_placeholder.push_str("00");
    let check = 98 - remainder(&with_placeholder)?;
    debug!(body, check, "computed mod 97-10 check digits");
    Some(format!("{check:02}"))
}

/// Whether a full number (body followed by its two check digits) is valid.
///
/// Splits off the last two characters, recomputes, and compares
/// string-wise. Inputs shorter than three characters, or containing
/// non-digits, are invalid.
pub fn is_valid(full: &str) -> bool {
    if full.len() < 3 || !full.is_ascii() {
        return false;
    }
    let (body, supplied) = full.split_at(full.len() - 2);
    match check_digits(body) {
        Some(computed) => {
            debug!(body, supplied, computed, "validated mod 97-10 number");
            computed == supplied
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_rolls_left_to_right() {
        assert_eq!(remainder("0"), Some(0));
        assert_eq!(remainder("97"), Some(0));
        assert_eq!(remainder("98"), Some(1));
        assert_eq!(remainder("9700000042"), Some((9700000042u64 % 97) as u32));
    }

    #[test]
    fn test_remainder_handles_long_inputs() {
        // 34 digits — longer than any machine integer, fine for the
        // rolling reduction.
        let long = "1234567890123456789012345678901234";
        assert!(remainder(long).is_some());
    }

    #[test]
    fn test_remainder_rejects_non_digits() {
        assert_eq!(remainder(""), None);
        assert_eq!(remainder("12A4"), None);
        assert_eq!(remainder("12 4"), None);
    }

    #[test]
    fn test_check_digits_zero_padded() {
        // 195900 mod 97 = 57, so the check digits are 98 - 57 = 41.
        assert_eq!(check_digits("1959").as_deref(), Some("41"));
        // 3000 mod 97 = 90 — a single-digit check must come out "08".
        assert_eq!(check_digits("30").as_deref(), Some("08"));
    }

    #[test]
    fn test_round_trip_is_valid() {
        for body in ["1959", "000000", "12345678901234567890"] {
            let cd = check_digits(body).unwrap();
            assert!(is_valid(&format!("{body}{cd}")));
        }
    }

    #[test]
    fn test_is_valid_rejects_tampering() {
        let cd = check_digits("1959").unwrap();
        let good = format!("1959{cd}");
        assert!(is_valid(&good));
        let bad = format!("1958{cd}");
        assert!(!is_valid(&bad));
    }

    #[test]
    fn test_is_valid_rejects_short_and_dirty() {
        assert!(!is_valid(""));
        assert!(!is_valid("12"));
        assert!(!is_valid("12x45"));
    }
}
