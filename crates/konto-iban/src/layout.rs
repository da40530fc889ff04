//! # Per-Country Layout Records
//!
//! One constant record describes everything country-specific about an
//! IBAN: the prefix, the fixed total length, which fields the BBAN
//! carries and how wide each slot is, whether a national check character
//! opens the BBAN, and the checksum suffix literal.
//!
//! The suffix is the country code expanded to digits plus the `00`
//! placeholder (`DE` → `131400`). It participates only in check digit
//! computation and is never emitted — the record stores it as a literal
//! rather than recomputing it on every conversion.
//!
//! Cut offsets for parsing are the running sums of the declared widths,
//! so assembly and slicing can never disagree about where a field lives.

use konto_core::AccountFamily;
use konto_core::Country;

/// A national check discipline inside the BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NationalCheck {
    /// No national check character in the BBAN.
    Absent,
    /// A CIN check letter at BBAN position 0, computed over the rest of
    /// the payload (Italy, San Marino).
    LeadingCin,
}

/// The constant IBAN layout for one country.
#[derive(Debug, Clone, Copy)]
pub struct IbanLayout {
    /// The country this layout belongs to.
    pub country: Country,
    /// The fixed 2-letter IBAN prefix.
    pub prefix: &'static str,
    /// The exact total character count of a valid IBAN.
    pub iban_length: usize,
    /// Which fields the BBAN carries.
    pub family: AccountFamily,
    /// Width of the bank code slot (for BIC countries: the slice of the
    /// BIC that opens the BBAN).
    pub bank_width: usize,
    /// Width of the branch slot; zero when the family has no branch.
    pub branch_width: usize,
    /// Width of the account number slot.
    pub account_width: usize,
    /// National check discipline.
    pub national_check: NationalCheck,
    /// Country code as digits plus the `00` placeholder, e.g. `131400`.
    pub checksum_suffix: &'static str,
}

impl IbanLayout {
    /// Width of the national check slot.
    pub fn check_width(&self) -> usize {
        match self.national_check {
            NationalCheck::Absent => 0,
            NationalCheck::LeadingCin => 1,
        }
    }

    /// Offset of the bank slot within the full IBAN.
    pub fn bank_offset(&self) -> usize {
        4 + self.check_width()
    }

    /// Offset of the branch slot within the full IBAN.
    pub fn branch_offset(&self) -> usize {
        self.bank_offset() + self.bank_width
    }

    /// Offset of the account slot within the full IBAN.
    pub fn account_offset(&self) -> usize {
        self.branch_offset() + self.branch_width
    }

    /// Total BBAN width implied by the slots.
    pub fn bban_width(&self) -> usize {
        self.check_width() + self.bank_width + self.branch_width + self.account_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_running_width_sums() {
        let layout = IbanLayout {
            country: Country::Israel,
            prefix: "IL",
            iban_length: 23,
            family: AccountFamily::BankBranchAndAccount,
            bank_width: 3,
            branch_width: 3,
            account_width: 13,
            national_check: NationalCheck::Absent,
            checksum_suffix: "182100",
        };
        assert_eq!(layout.bank_offset(), 4);
        assert_eq!(layout.branch_offset(), 7);
        assert_eq!(layout.account_offset(), 10);
        assert_eq!(layout.bban_width(), 19);
    }

    #[test]
    fn test_cin_shifts_every_offset() {
        let layout = IbanLayout {
            country: Country::Italy,
            prefix: "IT",
            iban_length: 27,
            family: AccountFamily::BankBranchAndAccount,
            bank_width: 5,
            branch_width: 5,
            account_width: 12,
            national_check: NationalCheck::LeadingCin,
            checksum_suffix: "182900",
        };
        assert_eq!(layout.check_width(), 1);
        assert_eq!(layout.bank_offset(), 5);
        assert_eq!(layout.branch_offset(), 10);
        assert_eq!(layout.account_offset(), 15);
    }
}
