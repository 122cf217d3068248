use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Availability oracle returned HTTP {status}: {body}")]
    OracleStatus { status: u16, body: String },

    #[error("Malformed oracle response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid command: {message}")]
    CommandError { message: String },
}

impl CartError {
    /// 是否為可用性查詢失敗 (可由使用者重試)
    pub fn is_oracle_failure(&self) -> bool {
        matches!(
            self,
            CartError::ApiError(_)
                | CartError::OracleStatus { .. }
                | CartError::MalformedResponse { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::ApiError(e) if e.is_timeout() => {
                "The availability service did not answer in time".to_string()
            }
            CartError::ApiError(_) => "Could not reach the availability service".to_string(),
            CartError::OracleStatus { status, .. } => {
                format!("The availability service rejected the request (HTTP {})", status)
            }
            CartError::MalformedResponse { .. } => {
                "The availability service sent an unexpected answer".to_string()
            }
            CartError::IoError(e) => format!("File system error: {}", e),
            CartError::SerializationError(_) => "Could not encode or decode JSON data".to_string(),
            CartError::ConfigError { message } => format!("Configuration problem: {}", message),
            CartError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CartError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CartError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            CartError::CommandError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::ApiError(_) | CartError::OracleStatus { .. } => {
                "Check the oracle endpoint and try adding the domain again"
            }
            CartError::MalformedResponse { .. } => {
                "Make sure the oracle answers with {\"name\": \"available\" | \"unavailable\"}"
            }
            CartError::IoError(_) => "Check that the file exists and is readable",
            CartError::SerializationError(_) => "Check the JSON payload format",
            CartError::ConfigError { .. }
            | CartError::ConfigValidationError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::MissingConfigError { .. } => {
                "Fix the command-line flags or the TOML configuration file"
            }
            CartError::CommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
