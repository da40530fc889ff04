//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Formal invalidity (wrong checksum, over-long field at validation time)
//!   is **not** an error — it is `Ok(false)` or `None` at the algorithm
//!   boundary. The variants here cover argument-contract failures and
//!   structured conversion failures only.
//! - Configuration gaps (no codec for a country, unknown IBAN prefix) are
//!   distinct variants, never conflated with formal invalidity.
//! - Every variant carries enough context to report the failure without
//!   re-running the operation.

use thiserror::Error;

use crate::account::FieldKind;
use crate::country::Country;

/// Errors from the national validation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No national validation rule is registered for this country.
    #[error("no national validation rule registered for {0}")]
    UnsupportedCountry(Country),

    /// A required field is empty or absent from the entity's family.
    #[error("the {0} is missing")]
    MissingField(FieldKind),

    /// The injected bank code directory does not know this bank code.
    #[error("bank code {0:?} does not resolve to a supported country")]
    UnknownBankCode(String),

    /// A country name failed to parse.
    #[error("unknown country name {0:?}")]
    UnknownCountryName(String),

    /// The checksum input derived from the fields admits no check digit
    /// (weighted mod-11 bodies with remainder 1, or non-digit content).
    #[error("no check digit exists for the derived input {0:?}")]
    InvalidBody(String),

    /// A field is wider than its checksum slot when deriving check digits.
    #[error("the {field} is {actual} characters, at most {max} fit the slot")]
    FieldTooLong {
        /// Which field overflowed.
        field: FieldKind,
        /// Slot width.
        max: usize,
        /// Supplied length.
        actual: usize,
    },
}

/// Errors from the IBAN conversion layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    /// No IBAN codec is registered for this country.
    #[error("the country {0} has no IBAN scheme registered")]
    UnsupportedCountry(Country),

    /// The IBAN's 2-letter prefix does not map to a supported country.
    #[error("the IBAN prefix {0:?} is not supported")]
    UnsupportedPrefix(String),

    /// The input length does not match the country's fixed IBAN length.
    #[error("expected {expected} characters for a {country} IBAN, got {actual}")]
    InvalidLength {
        /// Country addressed by the prefix.
        country: Country,
        /// The country's fixed IBAN length.
        expected: usize,
        /// Length of the cleaned input.
        actual: usize,
    },

    /// The IBAN was handed to a codec for a different country.
    #[error("expected the IBAN prefix {expected}, found {found}")]
    PrefixMismatch {
        /// The prefix the codec is configured for.
        expected: String,
        /// The prefix on the input.
        found: String,
    },

    /// The ISO 13616 mod-97 check failed.
    #[error("IBAN checksum mismatch")]
    ChecksumMismatch,

    /// A field required for assembly is empty or absent.
    #[error("the {0} is missing")]
    MissingField(FieldKind),

    /// A field value is wider than its fixed slot. Overflow is rejected,
    /// never truncated.
    #[error("the {field} is {actual} characters, at most {max} fit the slot")]
    FieldTooLong {
        /// Which field overflowed.
        field: FieldKind,
        /// Slot width.
        max: usize,
        /// Supplied length.
        actual: usize,
    },

    /// The BIC is not 8 or 11 alphanumeric characters.
    #[error("invalid BIC {0:?}")]
    InvalidBic(String),

    /// The entity's country tag does not match the addressed codec.
    #[error("entity is tagged {actual}, codec handles {expected}")]
    CountryMismatch {
        /// Country the codec is configured for.
        expected: Country,
        /// Country tag on the entity.
        actual: Country,
    },

    /// The checksum input contains a character outside `[0-9A-Za-z]`.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Byte offset within the cleaned input.
        position: usize,
        /// The offending character.
        character: char,
    },
}
