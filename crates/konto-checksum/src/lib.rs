//! # konto-checksum — Check Digit Algorithms
//!
//! Pure numeric algorithms over digit strings. This crate knows nothing
//! about countries: which algorithm applies to which account number, and
//! with which weight vector, is configuration held by the validation and
//! codec crates.
//!
//! ## Algorithm Families
//!
//! - [`mod97`] — ISO 7064 mod 97-10, used stand-alone for national check
//!   digits in several countries.
//! - [`iso13616`] — the IBAN check digit: prefix rotation, letter
//!   expansion, then the same mod-97 reduction.
//! - [`weighted`] — cyclic-weight mod 10 / mod 11 schemes; the weight
//!   vectors themselves are per-country constants owned by callers.
//! - [`cin`] — the Italian/San Marino CIN check character.
//!
//! ## Edge Policy
//!
//! A non-digit character in a position expected to be numeric is a hard
//! validation failure, expressed as `None` or `false` — never a panic and
//! never an error escaping this crate. Leading zeros are significant and
//! are never stripped here.

pub mod cin;
pub mod iso13616;
pub mod mod97;
pub mod weighted;

pub use weighted::{Direction, WeightedModulus, WeightedScheme};
