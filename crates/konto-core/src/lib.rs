//! # konto-core — Foundational Types for Konto
//!
//! This crate is the bedrock of the Konto workspace. It defines the country
//! tags, the national account number field model, the digit-string primitives
//! shared by the checksum and codec crates, and the error hierarchy.
//! Every other crate in the workspace depends on `konto-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **A single closed `Country` enum.** One definition, exhaustive `match`
//!    everywhere. Registering a new country forces every lookup table to
//!    handle it at compile time.
//!
//! 2. **Account numbers are immutable value objects.** A
//!    [`NationalAccountNumber`] is constructed once — from caller input or
//!    from an IBAN parse — and only ever read afterwards. Field values are
//!    stored exactly as supplied; padding and truncation are codec concerns,
//!    never entity concerns.
//!
//! 3. **Formal invalidity is data, not an error.** A wrong checksum or an
//!    over-long field produces `false`/`None` at the algorithm layer and a
//!    structured result at the API layer. Only argument-contract violations
//!    (a missing required field, an unknown bank code) surface as `Err`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `konto-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod account;
pub mod country;
pub mod digits;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use account::{AccountFamily, AccountParts, FieldKind, NationalAccountNumber};
pub use country::Country;
pub use error::{IbanError, ValidationError};
