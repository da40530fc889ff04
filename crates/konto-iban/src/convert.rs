//! # The Conversion Front Door
//!
//! Country and prefix dispatch over the layout registry. Nothing here is
//! algorithmic: the operations check that a codec exists for the
//! addressed country and hand off to the generic codec. Unsupported
//! countries and prefixes surface as distinct errors, never conflated
//! with a formally invalid number.

use tracing::debug;

use konto_checksum::iso13616;
use konto_core::digits::strip_whitespace;
use konto_core::{AccountFamily, Country, IbanError, NationalAccountNumber};

use crate::codec;
use crate::iban::Iban;
use crate::layouts::{country_for_prefix, layout_for};

/// Convert a national account number to its IBAN.
///
/// Fails with [`IbanError::UnsupportedCountry`] when the entity's
/// country has no IBAN scheme registered.
pub fn to_iban(account: &NationalAccountNumber) -> Result<Iban, IbanError> {
    let layout = layout_for(account.country())
        .ok_or(IbanError::UnsupportedCountry(account.country()))?;
    codec::to_iban(layout, account)
}

/// Parse an IBAN into the addressed country's account number entity.
///
/// The prefix selects the codec; length, checksum, and field extraction
/// follow the country's layout.
pub fn from_iban(text: &str) -> Result<NationalAccountNumber, IbanError> {
    let layout = resolve(text)?.1;
    codec::from_iban(layout, text)
}

/// Whether the text is a well-formed IBAN of a supported country.
///
/// A convenience over the full parse: cleaning, prefix dispatch, length
/// and checksum verification, without constructing the entity.
pub fn is_valid_iban(text: &str) -> bool {
    checked(text).is_ok()
}

/// Validate the text and return it as an [`Iban`] value.
pub(crate) fn checked(text: &str) -> Result<Iban, IbanError> {
    let (clean, layout) = resolve(text)?;
    if clean.len() != layout.iban_length {
        return Err(IbanError::InvalidLength {
            country: layout.country,
            expected: layout.iban_length,
            actual: clean.len(),
        });
    }
    if !iso13616::validate(&clean) {
        return Err(IbanError::ChecksumMismatch);
    }
    Ok(Iban::new_unchecked(clean))
}

/// Reshape an account number into the form another country's codec
/// expects: shared fields are copied, fields the target family does not
/// carry are discarded, and absent fields come along empty.
pub fn converted(
    account: &NationalAccountNumber,
    country: Country,
) -> Result<NationalAccountNumber, IbanError> {
    let layout = layout_for(country).ok_or(IbanError::UnsupportedCountry(country))?;
    debug!(from = %account.country(), to = %country, "reshaping account number");
    Ok(match layout.family {
        AccountFamily::BankAndAccount => NationalAccountNumber::bank_and_account(
            country,
            account.bank_code().unwrap_or(""),
            account.account_number(),
        ),
        AccountFamily::BankBranchAndAccount => NationalAccountNumber::bank_branch_and_account(
            country,
            account.bank_code().unwrap_or(""),
            account.branch().unwrap_or(""),
            account.account_number(),
        ),
        AccountFamily::BicBranchAndAccount => NationalAccountNumber::bic_branch_and_account(
            country,
            account.bic().unwrap_or(""),
            account.branch().unwrap_or(""),
            account.account_number(),
        ),
    })
}

fn resolve(text: &str) -> Result<(String, &'static crate::layout::IbanLayout), IbanError> {
    let clean = strip_whitespace(text);
    if clean.len() < 2 {
        return Err(IbanError::UnsupportedPrefix(clean));
    }
    let prefix = clean
        .get(..2)
        .ok_or_else(|| IbanError::UnsupportedPrefix(clean.clone()))?;
    let country =
        country_for_prefix(prefix).ok_or_else(|| IbanError::UnsupportedPrefix(prefix.to_string()))?;
    // Every prefix in the registry maps back to a registered layout.
    let layout = layout_for(country).ok_or(IbanError::UnsupportedCountry(country))?;
    Ok((clean, layout))
}
