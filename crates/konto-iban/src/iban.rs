//! # The Iban Newtype
//!
//! A validated IBAN in electronic format — uppercase, no separators.
//! Construction goes through the codec (`to_iban`) or through `FromStr`,
//! which runs the full prefix/length/checksum validation. The inner
//! string is exactly what goes on the wire.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use konto_core::IbanError;

/// An International Bank Account Number in electronic format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iban(String);

impl Iban {
    /// Wrap a string the codec has already assembled and checked.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// The electronic-format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-letter country prefix.
    pub fn country_prefix(&self) -> &str {
        &self.0[..2]
    }

    /// The two check digits following the prefix.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// The country-specific payload after prefix and check digits.
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Render in paper format: space-separated groups of four.
    pub fn to_paper_format(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    /// Parse and fully validate: cleaning, prefix dispatch, length, and
    /// the ISO 13616 checksum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::convert::checked(s)
    }
}
