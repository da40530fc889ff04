//! # Cyclic-Weight Mod 10 / Mod 11 Schemes
//!
//! Several national check digits are a weighted digit sum reduced modulo
//! 10 or 11. The weight vector, its direction of application, and the
//! modulus are per-country constants; this module only implements the
//! arithmetic.
//!
//! The weight vector repeats cyclically when the body is longer than the
//! vector. Mod-10 check digits are `(10 - sum) mod 10`; mod-11 check
//! digits are `11 - sum`, where a result of 11 collapses to 0 and a
//! result of 10 means the body admits no valid check digit at all (such
//! account numbers are simply not issued).

/// Which end of the body the weight vector starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// First weight applies to the leftmost digit.
    LeftToRight,
    /// First weight applies to the rightmost digit.
    RightToLeft,
}

/// The modulus a weighted scheme reduces by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightedModulus {
    /// Reduce modulo 10.
    Mod10,
    /// Reduce modulo 11; remainder 1 admits no check digit.
    Mod11,
}

/// A cyclic-weight checksum scheme over a digit-string body.
///
/// Stateless and `Copy`; country tables hold these as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedScheme {
    /// The cyclic weight vector.
    pub weights: &'static [u32],
    /// The reduction modulus.
    pub modulus: WeightedModulus,
    /// Which end the first weight applies to.
    pub direction: Direction,
}

impl WeightedScheme {
    /// Compute the check digit for a body (given without its check digit).
    ///
    /// Returns `None` when the body contains a non-digit, is empty, or —
    /// under mod 11 — admits no valid check digit.
    pub fn check_digit(&self, body: &str) -> Option<u32> {
        if body.is_empty() || self.weights.is_empty() {
            return None;
        }
        let sum = self.weighted_sum(body)?;
        match self.modulus {
            WeightedModulus::Mod10 => Some((10 - sum % 10) % 10),
            WeightedModulus::Mod11 => match 11 - sum % 11 {
                11 => Some(0),
                10 => None,
                check => Some(check),
            },
        }
    }

    /// Whether a full number (body followed by one check digit) is valid.
    pub fn is_valid(&self, full: &str) -> bool {
        if full.len() < 2 || !full.is_ascii() {
            return false;
        }
        let (body, check) = full.split_at(full.len() - 1);
        let supplied = match check.bytes().next() {
            Some(b) if b.is_ascii_digit() => u32::from(b - b'0'),
            _ => return false,
        };
        self.check_digit(body) == Some(supplied)
    }

    fn weighted_sum(&self, body: &str) -> Option<u32> {
        let mut sum: u32 = 0;
        let bytes = body.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_digit() {
                return None;
            }
            let position = match self.direction {
                Direction::LeftToRight => i,
                Direction::RightToLeft => bytes.len() - 1 - i,
            };
            let weight = self.weights[position % self.weights.len()];
            sum += u32::from(b - b'0') * weight;
        }
        Some(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The Polish bank/branch routing scheme.
    const POLISH_ROUTING: WeightedScheme = WeightedScheme {
        weights: &[3, 9, 7, 1, 3, 9, 7],
        modulus: WeightedModulus::Mod10,
        direction: Direction::LeftToRight,
    };

    // The Norwegian account number scheme.
    const NORWEGIAN_ACCOUNT: WeightedScheme = WeightedScheme {
        weights: &[2, 3, 4, 5, 6, 7],
        modulus: WeightedModulus::Mod11,
        direction: Direction::RightToLeft,
    };

    // The Estonian domestic account scheme.
    const ESTONIAN_ACCOUNT: WeightedScheme = WeightedScheme {
        weights: &[7, 3, 1],
        modulus: WeightedModulus::Mod10,
        direction: Direction::RightToLeft,
    };

    #[test]
    fn test_polish_routing_number() {
        // Routing number 1090 1014: body 1090101, check digit 4.
        assert_eq!(POLISH_ROUTING.check_digit("1090101"), Some(4));
        assert!(POLISH_ROUTING.is_valid("10901014"));
        assert!(!POLISH_ROUTING.is_valid("10901015"));
    }

    #[test]
    fn test_norwegian_account_number() {
        // Account 8601 11 17947: body 8601111794, check digit 7.
        assert_eq!(NORWEGIAN_ACCOUNT.check_digit("8601111794"), Some(7));
        assert!(NORWEGIAN_ACCOUNT.is_valid("86011117947"));
        assert!(!NORWEGIAN_ACCOUNT.is_valid("86011117946"));
    }

    #[test]
    fn test_estonian_account_number() {
        // Account 2210 2014 5685: body 22102014568, check digit 5.
        assert_eq!(ESTONIAN_ACCOUNT.check_digit("22102014568"), Some(5));
        assert!(ESTONIAN_ACCOUNT.is_valid("221020145685"));
    }

    #[test]
    fn test_mod11_remainder_one_has_no_check_digit() {
        // A single digit 1 with weight 2 sums to 2 → 11 - 2 = 9; craft a
        // sum ≡ 1 (mod 11) instead: digit 6 with weight 2 gives 12.
        let scheme = WeightedScheme {
            weights: &[2],
            modulus: WeightedModulus::Mod11,
            direction: Direction::RightToLeft,
        };
        assert_eq!(scheme.check_digit("6"), None);
        assert!(!scheme.is_valid("60"));
    }

    #[test]
    fn test_mod11_sum_divisible_gives_zero() {
        // Digit 0 sums to 0 → 11 - 0 = 11 → check digit 0.
        assert_eq!(NORWEGIAN_ACCOUNT.check_digit("0"), Some(0));
    }

    #[test]
    fn test_non_digit_bodies_rejected() {
        assert_eq!(POLISH_ROUTING.check_digit("10x0101"), None);
        assert_eq!(POLISH_ROUTING.check_digit(""), None);
        assert!(!POLISH_ROUTING.is_valid("1090101x"));
        assert!(!POLISH_ROUTING.is_valid("4"));
    }

    #[test]
    fn test_direction_matters() {
        let ltr = WeightedScheme {
            weights: &[1, 2],
            modulus: WeightedModulus::Mod10,
            direction: Direction::LeftToRight,
        };
        let rtl = WeightedScheme {
            weights: &[1, 2],
            modulus: WeightedModulus::Mod10,
            direction: Direction::RightToLeft,
        };
        // "12": LTR sums 1*1 + 2*2 = 5 → check 5; RTL sums 1*2 + 2*1 = 4 → check 6.
        assert_eq!(ltr.check_digit("12"), Some(5));
        assert_eq!(rtl.check_digit("12"), Some(6));
    }
}
