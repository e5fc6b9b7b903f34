use crate::config::toml_config::TomlConfig;
use crate::config::SessionConfig;
use crate::domain::model::EmptyPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cc-verify")]
#[command(about = "Check credit card numbers against the Luhn checksum")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat an empty or separator-only line as a valid number
    #[arg(long)]
    pub allow_empty: bool,

    /// Stop after this many numbers fail verification
    #[arg(long)]
    pub max_attempts: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// 合併設定：預設值 < 設定檔 < 命令列
    pub fn resolve(&self, file: Option<&TomlConfig>) -> SessionConfig {
        let mut session = SessionConfig::default();
        if let Some(file) = file {
            file.apply_to(&mut session);
        }
        if self.allow_empty {
            session.empty_policy = EmptyPolicy::Accept;
        }
        if let Some(max) = self.max_attempts {
            session.max_attempts = Some(max);
        }
        session
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(max) = self.max_attempts {
            validate_positive_number("max_attempts", max, 1)?;
        }
        Ok(())
    }
}
