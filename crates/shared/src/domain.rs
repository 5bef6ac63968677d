use serde::Serialize;

use crate::error::PhoneNumberError;

pub const MIN_PHONE_DIGITS: usize = 2;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Phone number as the user typed it.
///
/// Validation runs on the digit-only form (every non-digit stripped), but the
/// raw text is what gets stored and sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, PhoneNumberError> {
        validate_phone_digits(&digits_only(raw))?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digits(&self) -> String {
        digits_only(&self.0)
    }
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// E.164-like check: 2 to 15 digits, first digit 1-9.
pub fn validate_phone_digits(digits: &str) -> Result<(), PhoneNumberError> {
    let count = digits.len();
    if count == 0 {
        return Err(PhoneNumberError::NoDigits);
    }
    if digits.starts_with('0') {
        return Err(PhoneNumberError::LeadingZero);
    }
    if count < MIN_PHONE_DIGITS {
        return Err(PhoneNumberError::TooShort {
            digits: count,
            min: MIN_PHONE_DIGITS,
        });
    }
    if count > MAX_PHONE_DIGITS {
        return Err(PhoneNumberError::TooLong {
            digits: count,
            max: MAX_PHONE_DIGITS,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
