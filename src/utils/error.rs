use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Input is not valid UTF-8 at byte {position}")]
    InvalidEncoding { position: usize },

    #[error("Empty card number")]
    EmptyInput,

    #[error("No valid card number after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error("Input closed after {attempts} attempts without a valid card number")]
    EndOfInput { attempts: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Session,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardError::InvalidCharacter { .. }
            | CardError::InvalidEncoding { .. }
            | CardError::EmptyInput => ErrorCategory::Input,
            CardError::AttemptsExhausted { .. } | CardError::EndOfInput { .. } => {
                ErrorCategory::Session
            }
            CardError::ConfigError { .. }
            | CardError::InvalidConfigValueError { .. }
            | CardError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Session => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 輸入錯誤會讓使用者重新輸入，其他錯誤結束程式
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CardError::InvalidCharacter {
                character,
                position,
            } => format!(
                "The card number contains '{}' at position {}; {}",
                character.escape_debug(),
                position + 1,
                "only digits, spaces and hyphens are allowed"
            ),
            CardError::InvalidEncoding { position } => format!(
                "The input could not be decoded as text (byte {})",
                position + 1
            ),
            CardError::EmptyInput => "No digits were entered".to_string(),
            CardError::AttemptsExhausted { attempts } => {
                format!("Gave up after {} unsuccessful attempts", attempts)
            }
            CardError::EndOfInput { attempts } => format!(
                "Input ended before a valid card number was entered ({} attempts)",
                attempts
            ),
            CardError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            CardError::ConfigError { message } => format!("Configuration problem: {}", message),
            CardError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
            CardError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is not valid: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardError::InvalidCharacter { .. } | CardError::InvalidEncoding { .. } => {
                "Type the number using digits only, optionally grouped with spaces or hyphens"
            }
            CardError::EmptyInput => "Type the card number before pressing enter",
            CardError::AttemptsExhausted { .. } => {
                "Check the number on the card, or raise --max-attempts"
            }
            CardError::EndOfInput { .. } => {
                "Provide at least one valid card number on standard input"
            }
            CardError::IoError(_) => "Make sure standard input and output are available",
            CardError::ConfigError { .. }
            | CardError::InvalidConfigValueError { .. }
            | CardError::ConfigValidationError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
        }
    }

    /// 依嚴重程度決定的程序結束碼，任何錯誤都不會回傳 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
