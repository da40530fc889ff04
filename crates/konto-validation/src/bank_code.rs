//! # Bank-Code-Keyed Validation
//!
//! Some callers hold only a raw account number and a bank code, without
//! knowing which country's rule applies. The mapping from bank code to
//! country is reference data that lives outside this workspace — a real
//! deployment backs it with a bank directory — so it arrives as an
//! injected [`BankCodeResolver`] collaborator.

use konto_core::{Country, FieldKind, NationalAccountNumber, ValidationError};

use crate::validator;

/// Resolves a bank code to the country whose validation rule applies.
///
/// Implementations are expected to be cheap, read-only lookups. Returning
/// `None` means the bank code is unknown to the directory.
pub trait BankCodeResolver {
    /// The country whose rule governs accounts at this bank, if known.
    fn country_for(&self, bank_code: &str) -> Option<Country>;
}

/// Every `Fn(&str) -> Option<Country>` is a resolver; convenient for
/// tests and small directories.
impl<F> BankCodeResolver for F
where
    F: Fn(&str) -> Option<Country>,
{
    fn country_for(&self, bank_code: &str) -> Option<Country> {
        self(bank_code)
    }
}

/// Bank-code-keyed validation front door.
///
/// Wraps a resolver and exposes the same two operations as the
/// entity-based API, taking `(account_number, bank_code)` pairs.
#[derive(Debug, Clone)]
pub struct AccountCheck<R> {
    resolver: R,
}

impl<R: BankCodeResolver> AccountCheck<R> {
    /// Wrap a bank code directory.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Whether the account number (including its hypothetical check
    /// digits) is valid under the rule of the bank's country.
    pub fn is_valid(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<bool, ValidationError> {
        let account = self.entity(account_number, bank_code)?;
        validator::is_valid(&account)
    }

    /// Derive the check digits for an account number given without them.
    pub fn check_digits(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<String, ValidationError> {
        let account = self.entity(account_number, bank_code)?;
        validator::check_digits(&account)
    }

    fn entity(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<NationalAccountNumber, ValidationError> {
        if bank_code.is_empty() {
            return Err(ValidationError::MissingField(FieldKind::BankCode));
        }
        if account_number.is_empty() {
            return Err(ValidationError::MissingField(FieldKind::AccountNumber));
        }
        let country = self
            .resolver
            .country_for(bank_code)
            .ok_or_else(|| ValidationError::UnknownBankCode(bank_code.to_string()))?;
        Ok(NationalAccountNumber::bank_and_account(
            country,
            bank_code,
            account_number,
        ))
    }
}
