use crate::utils::error::{CardError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A card number after separators are stripped, held as digit values `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateNumber {
    digits: Vec<u8>,
}

impl CandidateNumber {
    /// Parse a normalized string. Every character must be an ASCII digit;
    /// the first one that is not is reported with its zero-based position.
    pub fn parse(normalized: &str) -> Result<Self> {
        let digits = normalized
            .chars()
            .enumerate()
            .map(|(position, character)| match character.to_digit(10) {
                Some(d) => Ok(d as u8),
                None => Err(CardError::InvalidCharacter {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl FromStr for CandidateNumber {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CandidateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// What to do with a line that has no digits once separators are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// Reject it as `EmptyInput`.
    #[default]
    Reject,
    /// Let the checksum decide; an empty sum is 0, so it verifies.
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    NotVerified,
}

impl Verdict {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Verdict::Verified
        } else {
            Verdict::NotVerified
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }

    /// Text printed for this verdict, without the trailing line breaks.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Verified => "Credit Card is Verified.",
            Verdict::NotVerified => "Credit card is not Verified",
        }
    }
}

/// Result of one prompt/read/check round.
#[derive(Debug)]
pub struct AttemptOutcome {
    pub verdict: Verdict,
    /// Set when the line was rejected before the checksum ran.
    pub rejection: Option<CardError>,
}

impl AttemptOutcome {
    pub fn checked(valid: bool) -> Self {
        Self {
            verdict: Verdict::from_valid(valid),
            rejection: None,
        }
    }

    pub fn rejected(reason: CardError) -> Self {
        Self {
            verdict: Verdict::NotVerified,
            rejection: Some(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: usize,
    pub verified: bool,
}
