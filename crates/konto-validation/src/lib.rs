//! # konto-validation — National Check Digit Validation
//!
//! Validates national account numbers against their country's check digit
//! rule. Each supported country declares a [`rules::NationalRule`]: which
//! fields are required, how wide each field may be, how the fields
//! concatenate into the checksum input, and which checksum method applies.
//! The rules are constant data; all arithmetic lives in `konto-checksum`.
//!
//! ## Surfaces
//!
//! - [`is_valid`] / [`check_digits`] — entity-based validation.
//! - [`AccountCheck`] — the bank-code-keyed variant, which resolves the
//!   country through an injected [`BankCodeResolver`] collaborator.
//!
//! ## Failure Discipline
//!
//! Formal invalidity (over-long field, failed checksum) is `Ok(false)`.
//! Argument-contract failures (empty required field, unknown bank code,
//! unsupported country) are `Err` — they indicate a caller or
//! configuration problem, not a bad account number.

pub mod bank_code;
pub mod method;
pub mod rules;
pub mod validator;

pub use bank_code::{AccountCheck, BankCodeResolver};
pub use method::ValidationMethod;
pub use rules::NationalRule;
pub use validator::{check_digits, is_valid};
