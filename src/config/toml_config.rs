use crate::config::SessionConfig;
use crate::domain::model::EmptyPolicy;
use crate::utils::error::{CardError, Result};
use crate::utils::validation::{
    validate_log_level, validate_non_empty_string, validate_positive_number, Validate,
};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub validation: ValidationSection,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationSection {
    pub empty_policy: Option<EmptyPolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    pub max_attempts: Option<usize>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CardError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        tracing::debug!("Loaded configuration file {}", path.display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_ATTEMPTS})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    /// 套用到既有設定上，檔案中沒寫的欄位維持不變
    pub fn apply_to(&self, config: &mut SessionConfig) {
        if let Some(policy) = self.validation.empty_policy {
            config.empty_policy = policy;
        }
        if let Some(max) = self.session.max_attempts {
            config.max_attempts = Some(max);
        }
        if let Some(prompt) = &self.session.prompt {
            config.prompt = prompt.clone();
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max) = self.session.max_attempts {
            validate_positive_number("session.max_attempts", max, 1)?;
        }
        if let Some(prompt) = &self.session.prompt {
            validate_non_empty_string("session.prompt", prompt)?;
        }
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
