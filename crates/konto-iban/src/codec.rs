//! # The Generic BBAN/IBAN Codec
//!
//! One assemble/slice transformation, driven entirely by a country's
//! [`IbanLayout`]. Assembly zero-pads each field into its fixed slot,
//! derives the ISO 13616 check digits over the payload plus the
//! country's suffix literal, and emits prefix + check digits + BBAN.
//! Parsing reverses it: clean, check the fixed length, check the prefix,
//! verify the checksum, then cut each field at its running-width offset
//! and strip the slot padding.

use tracing::debug;

use konto_checksum::{cin, iso13616};
use konto_core::digits::{strip_leading_zeros, strip_whitespace, zero_pad};
use konto_core::{AccountFamily, FieldKind, IbanError, NationalAccountNumber};

use crate::iban::Iban;
use crate::layout::{IbanLayout, NationalCheck};

/// Assemble the IBAN for an account number under the given layout.
pub fn to_iban(
    layout: &IbanLayout,
    account: &NationalAccountNumber,
) -> Result<Iban, IbanError> {
    if account.country() != layout.country {
        return Err(IbanError::CountryMismatch {
            expected: layout.country,
            actual: account.country(),
        });
    }

    let bank_slot = bank_slot(layout, account)?;
    // A branch of zeros is legal in several countries, so an absent or
    // empty branch pads to zeros rather than failing.
    let branch_slot = pad_field(
        account.branch().unwrap_or(""),
        layout.branch_width,
        FieldKind::Branch,
    )?;
    let account_number = account.account_number();
    if account_number.is_empty() {
        return Err(IbanError::MissingField(FieldKind::AccountNumber));
    }
    let account_slot = pad_field(account_number, layout.account_width, FieldKind::AccountNumber)?;

    let mut payload = String::with_capacity(layout.bban_width());
    payload.push_str(&bank_slot);
    payload.push_str(&branch_slot);
    payload.push_str(&account_slot);
    ensure_alphanumeric(&payload)?;

    let payload = match layout.national_check {
        NationalCheck::Absent => payload,
        NationalCheck::LeadingCin => {
            // The payload was just checked, so a check character exists.
            let check = cin::check_character(&payload).ok_or(IbanError::ChecksumMismatch)?;
            let mut with_cin = String::with_capacity(payload.len() + 1);
            with_cin.push(check);
            with_cin.push_str(&payload);
            with_cin
        }
    };

    let mut checksum_input = String::with_capacity(payload.len() + 6);
    checksum_input.push_str(&payload);
    checksum_input.push_str(layout.checksum_suffix);
    let check_digits =
        iso13616::check_digits(&checksum_input).ok_or(IbanError::ChecksumMismatch)?;

    let mut iban = String::with_capacity(layout.iban_length);
    iban.push_str(layout.prefix);
    iban.push_str(&check_digits);
    iban.push_str(&payload);
    debug_assert_eq!(iban.len(), layout.iban_length);
    debug!(country = %layout.country, iban = %iban, "assembled IBAN");
    Ok(Iban::new_unchecked(iban))
}

/// Parse an IBAN back into the country's account number entity.
pub fn from_iban(layout: &IbanLayout, text: &str) -> Result<NationalAccountNumber, IbanError> {
    let clean = strip_whitespace(text);

    if clean.len() != layout.iban_length {
        return Err(IbanError::InvalidLength {
            country: layout.country,
            expected: layout.iban_length,
            actual: clean.len(),
        });
    }
    ensure_alphanumeric(&clean)?;
    if &clean[..2] != layout.prefix {
        return Err(IbanError::PrefixMismatch {
            expected: layout.prefix.to_string(),
            found: clean[..2].to_string(),
        });
    }
    if !iso13616::validate(&clean) {
        return Err(IbanError::ChecksumMismatch);
    }

    let bank_raw = &clean[layout.bank_offset()..layout.branch_offset()];
    let branch = strip_leading_zeros(&clean[layout.branch_offset()..layout.account_offset()]);
    let account_number =
        strip_leading_zeros(&clean[layout.account_offset()..layout.account_offset() + layout.account_width]);

    let account = match layout.family {
        AccountFamily::BankAndAccount => NationalAccountNumber::bank_and_account(
            layout.country,
            strip_leading_zeros(bank_raw),
            account_number,
        ),
        AccountFamily::BankBranchAndAccount => NationalAccountNumber::bank_branch_and_account(
            layout.country,
            strip_leading_zeros(bank_raw),
            branch,
            account_number,
        ),
        // The BBAN holds the leading slice of the BIC; it comes back as
        // the entity's BIC verbatim.
        AccountFamily::BicBranchAndAccount => NationalAccountNumber::bic_branch_and_account(
            layout.country,
            bank_raw,
            branch,
            account_number,
        ),
    };
    debug!(country = %layout.country, "parsed IBAN into account number");
    Ok(account)
}

fn bank_slot(layout: &IbanLayout, account: &NationalAccountNumber) -> Result<String, IbanError> {
    match layout.family {
        AccountFamily::BankAndAccount | AccountFamily::BankBranchAndAccount => {
            let bank_code = account.bank_code().unwrap_or("");
            if bank_code.is_empty() {
                return Err(IbanError::MissingField(FieldKind::BankCode));
            }
            pad_field(bank_code, layout.bank_width, FieldKind::BankCode)
        }
        AccountFamily::BicBranchAndAccount => {
            let bic = account.bic().unwrap_or("");
            if bic.is_empty() {
                return Err(IbanError::MissingField(FieldKind::Bic));
            }
            if !is_wellformed_bic(bic, layout.bank_width) {
                return Err(IbanError::InvalidBic(bic.to_string()));
            }
            // The BBAN carries only the institution slice of the BIC.
            Ok(bic[..layout.bank_width].to_string())
        }
    }
}

fn pad_field(value: &str, width: usize, field: FieldKind) -> Result<String, IbanError> {
    zero_pad(value, width).ok_or(IbanError::FieldTooLong {
        field,
        max: width,
        actual: value.len(),
    })
}

fn ensure_alphanumeric(s: &str) -> Result<(), IbanError> {
    match s.char_indices().find(|(_, c)| !c.is_ascii_alphanumeric()) {
        Some((position, character)) => Err(IbanError::InvalidCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}

/// A full BIC is 8 or 11 alphanumeric characters; the bare institution
/// slice (as recovered from an IBAN) is accepted too, so parsed entities
/// re-assemble without widening.
fn is_wellformed_bic(bic: &str, institution_width: usize) -> bool {
    (bic.len() == institution_width || bic.len() == 8 || bic.len() == 11)
        && bic.bytes().all(|b| b.is_ascii_alphanumeric())
}
