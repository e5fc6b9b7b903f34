//! Luhn checksum.
//!
//! Digits are walked from the rightmost one. Every second digit (starting with
//! the one left of the check digit) is doubled, and a doubled value above 9 is
//! folded back by subtracting 9. The number passes when the total is a
//! multiple of 10.

use crate::domain::model::CandidateNumber;
use crate::domain::ports::CardValidator;
use crate::utils::error::Result;

/// Running Luhn sum over the digits of `number`.
pub fn checksum(number: &CandidateNumber) -> u64 {
    let mut sum = 0u64;
    let mut alternate = false;

    for &digit in number.digits().iter().rev() {
        let mut value = u64::from(digit);
        if alternate {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        alternate = !alternate;
    }

    sum
}

/// An empty number has a sum of 0 and therefore passes.
pub fn is_valid(number: &CandidateNumber) -> bool {
    checksum(number) % 10 == 0
}

/// Parse an already normalized string and check it.
pub fn is_valid_str(normalized: &str) -> Result<bool> {
    let number = CandidateNumber::parse(normalized)?;
    Ok(is_valid(&number))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LuhnValidator;

impl CardValidator for LuhnValidator {
    fn is_valid(&self, number: &CandidateNumber) -> bool {
        let sum = checksum(number);
        tracing::debug!(digits = number.len(), checksum = sum, "Luhn checksum computed");
        sum % 10 == 0
    }
}
