use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Registration rejected with status {status}: {body}")]
    RegistrationRejected { status: u16, body: String },

    #[error("Registration response did not contain an access token")]
    MissingAccessToken,
}

/// 錯誤分類，用於日誌輸出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Protocol,
    System,
}

impl QualifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QualifierError::Http(_) => ErrorCategory::Network,
            QualifierError::Io(_) => ErrorCategory::System,
            QualifierError::ConfigParse { .. }
            | QualifierError::InvalidConfigValue { .. }
            | QualifierError::MissingConfig { .. } => ErrorCategory::Configuration,
            QualifierError::Serialization(_)
            | QualifierError::RegistrationRejected { .. }
            | QualifierError::MissingAccessToken => ErrorCategory::Protocol,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QualifierError::Http(_) => "Check network connectivity and that the endpoint URL is reachable",
            QualifierError::Io(_) => "Check that the configuration file exists and is readable",
            QualifierError::ConfigParse { .. } => "Fix the TOML syntax in the configuration file",
            QualifierError::InvalidConfigValue { .. } => "Correct the highlighted configuration value",
            QualifierError::MissingConfig { .. } => {
                "Add the missing field to the configuration file or pass it on the command line"
            }
            QualifierError::RegistrationRejected { .. } => {
                "Verify the candidate name, registration number and email"
            }
            QualifierError::Serialization(_) | QualifierError::MissingAccessToken => {
                "The registration endpoint answered with an unexpected body; verify the generate URL"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QualifierError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            QualifierError::MissingConfig { field } => {
                format!("Configuration field '{}' is required", field)
            }
            QualifierError::RegistrationRejected { status, .. } => {
                format!("The registration service refused the request (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QualifierError>;
