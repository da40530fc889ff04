//! # Entity Validation Front Door
//!
//! Validates a [`NationalAccountNumber`] against its country's rule and
//! derives national check digits. The flow mirrors the rule record:
//! required-field check (fail fast), maximum-length check (formally
//! invalid), slot concatenation, checksum dispatch.

use tracing::debug;

use konto_core::{NationalAccountNumber, ValidationError};

use crate::rules::{rule_for, NationalRule};

/// Whether the account number is formally valid under its country's
/// national check digit rule.
///
/// `Ok(false)` for over-long fields or a failed checksum. `Err` only for
/// argument-contract failures: a required field is empty, or the country
/// has no national rule registered.
pub fn is_valid(account: &NationalAccountNumber) -> Result<bool, ValidationError> {
    let rule = rule_for(account.country())
        .ok_or(ValidationError::UnsupportedCountry(account.country()))?;

    require_fields(rule, account)?;

    if exceeds_max_lengths(rule, account) {
        return Ok(false);
    }

    // The max-length check already bounds every slot field, so the
    // concatenation cannot overflow here; treat a surprise as invalid.
    let Some(input) = rule.concat(account, rule.validate_slots) else {
        return Ok(false);
    };
    let valid = rule.method.is_valid(&input);
    debug!(country = %account.country(), input = %input, valid, "validated national account number");
    Ok(valid)
}

/// Derive the national check digits for an account number supplied
/// without them.
///
/// The carrying field (e.g. Poland's branch code) is expected without
/// its check digit, so the calculate-side slots apply.
pub fn check_digits(account: &NationalAccountNumber) -> Result<String, ValidationError> {
    let rule = rule_for(account.country())
        .ok_or(ValidationError::UnsupportedCountry(account.country()))?;

    require_fields(rule, account)?;

    for &(field, width) in rule.check_slots {
        let len = account.field(field).unwrap_or("").len();
        if len > width {
            return Err(ValidationError::FieldTooLong {
                field,
                max: width,
                actual: len,
            });
        }
    }

    // Widths were just checked, so the concatenation cannot overflow.
    let input = rule.concat(account, rule.check_slots).unwrap_or_default();
    let digits = rule
        .method
        .check_digits(&input)
        .ok_or_else(|| ValidationError::InvalidBody(input.clone()))?;
    debug!(country = %account.country(), input = %input, digits = %digits, "derived national check digits");
    Ok(digits)
}

fn require_fields(
    rule: &NationalRule,
    account: &NationalAccountNumber,
) -> Result<(), ValidationError> {
    for &field in rule.required {
        match account.field(field) {
            Some(value) if !value.is_empty() => {}
            _ => return Err(ValidationError::MissingField(field)),
        }
    }
    Ok(())
}

fn exceeds_max_lengths(rule: &NationalRule, account: &NationalAccountNumber) -> bool {
    rule.max_lengths
        .iter()
        .any(|&(field, max)| account.field(field).unwrap_or("").len() > max)
}
