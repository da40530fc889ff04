//! # National Rule Table
//!
//! One constant record per country with a national check digit scheme.
//! A rule names the required fields, the per-field maximum lengths, and
//! the `(field, width)` slots that concatenate into the checksum input —
//! each field right-aligned in its slot and zero-filled.
//!
//! The validate-side and calculate-side slots are declared separately:
//! when the check digit lives inside one of the fields (Poland's branch
//! code, Norway's account number), the calculate-side slot is narrower
//! because the caller supplies that field without its check digit. The
//! asymmetry is part of the national specification, not an accident.

use konto_checksum::Direction;
use konto_core::digits::zero_pad;
use konto_core::{Country, FieldKind, NationalAccountNumber};

use crate::method::ValidationMethod;

/// The validation rule for one country.
#[derive(Debug, Clone, Copy)]
pub struct NationalRule {
    /// The country this rule belongs to.
    pub country: Country,
    /// The checksum method applied to the concatenated input.
    pub method: ValidationMethod,
    /// Fields that must be present and non-empty.
    pub required: &'static [FieldKind],
    /// Maximum accepted length per field; longer values are formally
    /// invalid, not errors.
    pub max_lengths: &'static [(FieldKind, usize)],
    /// Concatenation slots for validating a full number (check digit
    /// included in its carrying field).
    pub validate_slots: &'static [(FieldKind, usize)],
    /// Concatenation slots for deriving check digits (the carrying field
    /// is supplied without them).
    pub check_slots: &'static [(FieldKind, usize)],
}

impl NationalRule {
    /// Concatenate the account's fields per the given slots.
    ///
    /// Returns `None` when a field overflows its slot.
    pub(crate) fn concat(
        &self,
        account: &NationalAccountNumber,
        slots: &[(FieldKind, usize)],
    ) -> Option<String> {
        let mut out = String::new();
        for &(field, width) in slots {
            let value = account.field(field).unwrap_or("");
            out.push_str(&zero_pad(value, width)?);
        }
        Some(out)
    }
}

/// Poland — the 8-digit bank/branch routing number carries its own check
/// digit in the last branch position.
static POLAND: NationalRule = NationalRule {
    country: Country::Poland,
    method: ValidationMethod::WeightedMod10 {
        weights: &[3, 9, 7, 1, 3, 9, 7],
        direction: Direction::LeftToRight,
    },
    required: &[FieldKind::BankCode, FieldKind::Branch, FieldKind::AccountNumber],
    max_lengths: &[
        (FieldKind::BankCode, 3),
        (FieldKind::Branch, 5),
        (FieldKind::AccountNumber, 16),
    ],
    validate_slots: &[(FieldKind::BankCode, 3), (FieldKind::Branch, 5)],
    check_slots: &[(FieldKind::BankCode, 3), (FieldKind::Branch, 4)],
};

/// Estonia — the domestic account number ends in a weighted mod-10 check
/// digit; the bank code does not participate.
static ESTONIA: NationalRule = NationalRule {
    country: Country::Estonia,
    method: ValidationMethod::WeightedMod10 {
        weights: &[7, 3, 1],
        direction: Direction::RightToLeft,
    },
    required: &[FieldKind::AccountNumber],
    max_lengths: &[(FieldKind::AccountNumber, 14)],
    validate_slots: &[(FieldKind::AccountNumber, 14)],
    check_slots: &[(FieldKind::AccountNumber, 13)],
};

/// Norway — the 11-digit account number (register number + account) ends
/// in a weighted mod-11 check digit.
static NORWAY: NationalRule = NationalRule {
    country: Country::Norway,
    method: ValidationMethod::WeightedMod11 {
        weights: &[2, 3, 4, 5, 6, 7],
        direction: Direction::RightToLeft,
    },
    required: &[FieldKind::BankCode, FieldKind::AccountNumber],
    max_lengths: &[(FieldKind::BankCode, 4), (FieldKind::AccountNumber, 7)],
    validate_slots: &[(FieldKind::BankCode, 4), (FieldKind::AccountNumber, 7)],
    check_slots: &[(FieldKind::BankCode, 4), (FieldKind::AccountNumber, 6)],
};

/// Serbia — two trailing mod 97-10 check digits over bank code + account.
static SERBIA: NationalRule = NationalRule {
    country: Country::Serbia,
    method: ValidationMethod::Mod97_10,
    required: &[FieldKind::BankCode, FieldKind::AccountNumber],
    max_lengths: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 15)],
    validate_slots: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 15)],
    check_slots: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 13)],
};

/// Montenegro — same discipline as Serbia.
static MONTENEGRO: NationalRule = NationalRule {
    country: Country::Montenegro,
    method: ValidationMethod::Mod97_10,
    required: &[FieldKind::BankCode, FieldKind::AccountNumber],
    max_lengths: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 15)],
    validate_slots: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 15)],
    check_slots: &[(FieldKind::BankCode, 3), (FieldKind::AccountNumber, 13)],
};

/// Bosnia and Herzegovina — mod 97-10 over bank + branch + account.
static BOSNIA_AND_HERZEGOVINA: NationalRule = NationalRule {
    country: Country::BosniaAndHerzegovina,
    method: ValidationMethod::Mod97_10,
    required: &[FieldKind::BankCode, FieldKind::Branch, FieldKind::AccountNumber],
    max_lengths: &[
        (FieldKind::BankCode, 3),
        (FieldKind::Branch, 3),
        (FieldKind::AccountNumber, 10),
    ],
    validate_slots: &[
        (FieldKind::BankCode, 3),
        (FieldKind::Branch, 3),
        (FieldKind::AccountNumber, 10),
    ],
    check_slots: &[
        (FieldKind::BankCode, 3),
        (FieldKind::Branch, 3),
        (FieldKind::AccountNumber, 8),
    ],
};

/// Look up the national rule for a country.
///
/// Countries without a national check digit scheme return `None`; their
/// account numbers are constrained only by the IBAN layer.
pub fn rule_for(country: Country) -> Option<&'static NationalRule> {
    match country {
        Country::Poland => Some(&POLAND),
        Country::Estonia => Some(&ESTONIA),
        Country::Norway => Some(&NORWAY),
        Country::Serbia => Some(&SERBIA),
        Country::Montenegro => Some(&MONTENEGRO),
        Country::BosniaAndHerzegovina => Some(&BOSNIA_AND_HERZEGOVINA),
        _ => None,
    }
}
