pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, SessionConfig};
pub use crate::core::{
    luhn::{checksum, is_valid, is_valid_str, LuhnValidator},
    normalize::normalize,
    session::Session,
};
pub use domain::model::{CandidateNumber, EmptyPolicy, SessionSummary, Verdict};
pub use utils::error::{CardError, Result};
