#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::EmptyPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};

pub const DEFAULT_PROMPT: &str = "Enter a CC Number: ";

/// Settings the input loop runs with, after flags and file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: String,
    pub empty_policy: EmptyPolicy,
    /// `None` keeps prompting until a number is verified.
    pub max_attempts: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            empty_policy: EmptyPolicy::Reject,
            max_attempts: None,
        }
    }
}

impl ConfigProvider for SessionConfig {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn empty_policy(&self) -> EmptyPolicy {
        self.empty_policy
    }

    fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("session.prompt", &self.prompt)?;
        if let Some(max) = self.max_attempts {
            validate_positive_number("session.max_attempts", max, 1)?;
        }
        Ok(())
    }
}
