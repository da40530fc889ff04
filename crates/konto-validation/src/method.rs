//! # Validation Method Dispatch
//!
//! The closed set of checksum methods a national rule can reference. The
//! original strategy objects carried no state, so the set collapses to a
//! `Copy` enum with an exhaustive dispatch — adding a method forces every
//! rule table and match to acknowledge it.

use konto_checksum::{mod97, Direction, WeightedModulus, WeightedScheme};

/// A national check digit algorithm, selected per country.
///
/// Stateless; rule tables hold these as constants. Weight vectors are
/// country data, not algorithm logic, so they ride along in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMethod {
    /// ISO 7064 mod 97-10 with two trailing check digits.
    Mod97_10,
    /// Cyclic-weight sum reduced mod 10, one trailing check digit.
    WeightedMod10 {
        /// The cyclic weight vector.
        weights: &'static [u32],
        /// Which end the first weight applies to.
        direction: Direction,
    },
    /// Cyclic-weight sum reduced mod 11, one trailing check digit.
    WeightedMod11 {
        /// The cyclic weight vector.
        weights: &'static [u32],
        /// Which end the first weight applies to.
        direction: Direction,
    },
}

impl ValidationMethod {
    /// Whether a full checksum input (body plus trailing check digits)
    /// is valid under this method.
    pub fn is_valid(&self, digits: &str) -> bool {
        match self.scheme() {
            None => mod97::is_valid(digits),
            Some(scheme) => scheme.is_valid(digits),
        }
    }

    /// Compute the check digits for a body given without them.
    ///
    /// Two digits for mod 97-10, one for the weighted schemes. `None`
    /// when the body is not numeric or — under weighted mod 11 — admits
    /// no check digit.
    pub fn check_digits(&self, body: &str) -> Option<String> {
        match self.scheme() {
            None => mod97::check_digits(body),
            Some(scheme) => scheme.check_digit(body).map(|d| d.to_string()),
        }
    }

    fn scheme(&self) -> Option<WeightedScheme> {
        match *self {
            Self::Mod97_10 => None,
            Self::WeightedMod10 { weights, direction } => Some(WeightedScheme {
                weights,
                modulus: WeightedModulus::Mod10,
                direction,
            }),
            Self::WeightedMod11 { weights, direction } => Some(WeightedScheme {
                weights,
                modulus: WeightedModulus::Mod11,
                direction,
            }),
        }
    }
}
