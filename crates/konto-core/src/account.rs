//! # National Account Number Field Model
//!
//! A national bank account identifier is a country tag plus a small set of
//! named fields. Which fields exist depends on the country family:
//!
//! ```text
//! BankAndAccount        ── bank code + account number        (e.g. Germany)
//! BankBranchAndAccount  ── adds a branch / sort code         (e.g. France)
//! BicBranchAndAccount   ── BIC instead of a numeric bank code (United Kingdom)
//! ```
//!
//! Values are stored exactly as supplied — never re-padded, never trimmed.
//! Zero-padding to fixed widths happens at serialization time inside the
//! codec, and leading-zero stripping happens when a field is cut out of a
//! fixed-width IBAN slot. The entity itself is an immutable value object
//! that lives for the duration of a single validate/convert call.

use serde::{Deserialize, Serialize};

use crate::country::Country;

/// The named fields an account number can carry.
///
/// Used by rule tables, layout tables, and error values to talk about
/// fields without holding their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// The numeric bank code identifying the institution.
    BankCode,
    /// The branch or sort code identifying the sub-office.
    Branch,
    /// The account number proper.
    AccountNumber,
    /// The BIC, for countries that identify institutions by BIC.
    Bic,
}

impl FieldKind {
    /// Human-readable field name for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCode => "bank code",
            Self::Branch => "branch",
            Self::AccountNumber => "account number",
            Self::Bic => "bic",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a country's account number — which fields it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFamily {
    /// Bank code + account number.
    BankAndAccount,
    /// Bank code + branch + account number.
    BankBranchAndAccount,
    /// BIC + branch + account number; no numeric bank code.
    BicBranchAndAccount,
}

/// The per-family field payload of a [`NationalAccountNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountParts {
    /// Bank code + account number.
    BankAndAccount {
        /// Institution code, digits in almost every country.
        bank_code: String,
        /// Account number proper.
        account_number: String,
    },
    /// Bank code + branch + account number.
    BankBranchAndAccount {
        /// Institution code.
        bank_code: String,
        /// Branch / sort code.
        branch: String,
        /// Account number proper.
        account_number: String,
    },
    /// BIC + branch + account number.
    BicBranchAndAccount {
        /// The BIC (8 or 11 alphanumeric characters).
        bic: String,
        /// Branch / sort code.
        branch: String,
        /// Account number proper.
        account_number: String,
    },
}

impl AccountParts {
    /// The family this payload belongs to.
    pub fn family(&self) -> AccountFamily {
        match self {
            Self::BankAndAccount { .. } => AccountFamily::BankAndAccount,
            Self::BankBranchAndAccount { .. } => AccountFamily::BankBranchAndAccount,
            Self::BicBranchAndAccount { .. } => AccountFamily::BicBranchAndAccount,
        }
    }
}

/// A national bank account identifier: a country tag plus named fields.
///
/// Immutable after construction. Validators and codecs only ever read it;
/// conversion produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalAccountNumber {
    country: Country,
    parts: AccountParts,
}

impl NationalAccountNumber {
    /// Build a bank-code + account-number identifier (family A).
    pub fn bank_and_account(
        country: Country,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            country,
            parts: AccountParts::BankAndAccount {
                bank_code: bank_code.into(),
                account_number: account_number.into(),
            },
        }
    }

    /// Build a bank-code + branch + account-number identifier (family B).
    pub fn bank_branch_and_account(
        country: Country,
        bank_code: impl Into<String>,
        branch: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            country,
            parts: AccountParts::BankBranchAndAccount {
                bank_code: bank_code.into(),
                branch: branch.into(),
                account_number: account_number.into(),
            },
        }
    }

    /// Build a BIC + branch + account-number identifier (family C).
    pub fn bic_branch_and_account(
        country: Country,
        bic: impl Into<String>,
        branch: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            country,
            parts: AccountParts::BicBranchAndAccount {
                bic: bic.into(),
                branch: branch.into(),
                account_number: account_number.into(),
            },
        }
    }

    /// Assemble from an explicit payload.
    pub fn from_parts(country: Country, parts: AccountParts) -> Self {
        Self { country, parts }
    }

    /// The country tag.
    pub fn country(&self) -> Country {
        self.country
    }

    /// The family payload.
    pub fn parts(&self) -> &AccountParts {
        &self.parts
    }

    /// The family this identifier belongs to.
    pub fn family(&self) -> AccountFamily {
        self.parts.family()
    }

    /// The account number proper. Present in every family.
    pub fn account_number(&self) -> &str {
        match &self.parts {
            AccountParts::BankAndAccount { account_number, .. }
            | AccountParts::BankBranchAndAccount { account_number, .. }
            | AccountParts::BicBranchAndAccount { account_number, .. } => account_number,
        }
    }

    /// The bank code, if this family carries one.
    pub fn bank_code(&self) -> Option<&str> {
        match &self.parts {
            AccountParts::BankAndAccount { bank_code, .. }
            | AccountParts::BankBranchAndAccount { bank_code, .. } => Some(bank_code),
            AccountParts::BicBranchAndAccount { .. } => None,
        }
    }

    /// The branch / sort code, if this family carries one.
    pub fn branch(&self) -> Option<&str> {
        match &self.parts {
            AccountParts::BankAndAccount { .. } => None,
            AccountParts::BankBranchAndAccount { branch, .. }
            | AccountParts::BicBranchAndAccount { branch, .. } => Some(branch),
        }
    }

    /// The BIC, if this family carries one.
    pub fn bic(&self) -> Option<&str> {
        match &self.parts {
            AccountParts::BicBranchAndAccount { bic, .. } => Some(bic),
            _ => None,
        }
    }

    /// Look up a field by kind. Absent fields return `None`; present but
    /// empty fields return `Some("")` — callers decide whether empty means
    /// missing.
    pub fn field(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::BankCode => self.bank_code(),
            FieldKind::Branch => self.branch(),
            FieldKind::AccountNumber => Some(self.account_number()),
            FieldKind::Bic => self.bic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_a_accessors() {
        let acct =
            NationalAccountNumber::bank_and_account(Country::Germany, "37040044", "0532013000");
        assert_eq!(acct.country(), Country::Germany);
        assert_eq!(acct.family(), AccountFamily::BankAndAccount);
        assert_eq!(acct.bank_code(), Some("37040044"));
        assert_eq!(acct.branch(), None);
        assert_eq!(acct.bic(), None);
        assert_eq!(acct.account_number(), "0532013000");
    }

    #[test]
    fn test_family_b_accessors() {
        let acct = NationalAccountNumber::bank_branch_and_account(
            Country::Israel,
            "10",
            "800",
            "99999999",
        );
        assert_eq!(acct.family(), AccountFamily::BankBranchAndAccount);
        assert_eq!(acct.bank_code(), Some("10"));
        assert_eq!(acct.branch(), Some("800"));
        assert_eq!(acct.bic(), None);
    }

    #[test]
    fn test_family_c_accessors() {
        let acct = NationalAccountNumber::bic_branch_and_account(
            Country::UnitedKingdom,
            "NWBKGB2L",
            "601613",
            "31926819",
        );
        assert_eq!(acct.family(), AccountFamily::BicBranchAndAccount);
        assert_eq!(acct.bank_code(), None);
        assert_eq!(acct.bic(), Some("NWBKGB2L"));
        assert_eq!(acct.branch(), Some("601613"));
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        // No silent padding or trimming at construction.
        let acct = NationalAccountNumber::bank_and_account(Country::Austria, "19043", "00234");
        assert_eq!(acct.bank_code(), Some("19043"));
        assert_eq!(acct.account_number(), "00234");
    }

    #[test]
    fn test_field_lookup_by_kind() {
        let acct =
            NationalAccountNumber::bank_branch_and_account(Country::France, "20041", "01005", "x");
        assert_eq!(acct.field(FieldKind::BankCode), Some("20041"));
        assert_eq!(acct.field(FieldKind::Branch), Some("01005"));
        assert_eq!(acct.field(FieldKind::AccountNumber), Some("x"));
        assert_eq!(acct.field(FieldKind::Bic), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let acct = NationalAccountNumber::bank_branch_and_account(
            Country::Poland,
            "109",
            "01014",
            "0000071219812874",
        );
        let json = serde_json::to_string(&acct).unwrap();
        let back: NationalAccountNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, acct);
    }
}
