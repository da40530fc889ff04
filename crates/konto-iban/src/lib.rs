//! # konto-iban — BBAN/IBAN Conversion
//!
//! Converts national account numbers to IBANs and back. Every country is
//! one constant [`layout::IbanLayout`] record — prefix, total length,
//! field widths, and the checksum suffix literal — consumed by a single
//! generic codec. There is no per-country code.
//!
//! ```
//! use konto_core::{Country, NationalAccountNumber};
//!
//! let account =
//!     NationalAccountNumber::bank_and_account(Country::Germany, "37040044", "532013000");
//! let iban = konto_iban::to_iban(&account).unwrap();
//! assert_eq!(iban.as_str(), "DE89370400440532013000");
//!
//! let parsed = konto_iban::from_iban("DE89 3704 0044 0532 0130 00").unwrap();
//! assert_eq!(parsed.bank_code(), Some("37040044"));
//! ```
//!
//! ## Structure
//!
//! - [`layout`] / [`layouts`] — the per-country constant records and the
//!   match-based registry over them.
//! - [`codec`] — the generic assemble/slice transformation.
//! - [`convert`] — the public front door: country and prefix dispatch.
//! - [`iban`] — the [`Iban`] newtype.

pub mod codec;
pub mod convert;
pub mod iban;
pub mod layout;
pub mod layouts;

pub use convert::{converted, from_iban, is_valid_iban, to_iban};
pub use iban::Iban;
pub use layout::{IbanLayout, NationalCheck};
pub use layouts::{country_for_prefix, layout_for};
