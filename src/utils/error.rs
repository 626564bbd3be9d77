use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input ended while waiting for: {question}")]
    InputClosed { question: String },

    #[error("Terminal already closed")]
    TerminalClosed,
}

impl MailerError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MailerError::ConfigError { .. }
                | MailerError::MissingConfigError { .. }
                | MailerError::InvalidConfigValueError { .. }
        )
    }

    /// Short message for the console, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MailerError::ApiError(e) if e.is_timeout() => {
                "The completion API did not answer in time".to_string()
            }
            MailerError::ApiError(_) => "Could not reach the completion API".to_string(),
            MailerError::ApiStatusError { status, .. } => {
                format!("The completion API rejected the request (HTTP {})", status)
            }
            MailerError::InvalidResponseError { .. } | MailerError::SerializationError(_) => {
                "The completion API returned an unexpected response".to_string()
            }
            MailerError::IoError(e) => format!("Console I/O failed: {}", e),
            MailerError::ConfigError { message } => format!("Configuration problem: {}", message),
            MailerError::MissingConfigError { field } => {
                format!("Missing required setting `{}`", field)
            }
            MailerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting `{}`: {}", field, reason)
            }
            MailerError::InputClosed { .. } => "Input ended before all questions were answered".to_string(),
            MailerError::TerminalClosed => "The console was already closed".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MailerError::ApiError(_) => "Check your network connection and the --base-url setting",
            MailerError::ApiStatusError { status: 401, .. } => {
                "Check that OPENAI_API_KEY holds a valid key"
            }
            MailerError::ApiStatusError { status: 429, .. } => "Wait a moment and run the tool again",
            MailerError::ApiStatusError { .. } => "Check the --model and --base-url settings",
            MailerError::InvalidResponseError { .. } | MailerError::SerializationError(_) => {
                "Make sure --base-url points at an OpenAI-compatible chat completion API"
            }
            MailerError::MissingConfigError { .. } => {
                "Set OPENAI_API_KEY or pass --api-key, or add it to the --config file"
            }
            MailerError::ConfigError { .. } | MailerError::InvalidConfigValueError { .. } => {
                "Fix the value in your --config file or on the command line"
            }
            MailerError::IoError(_) | MailerError::InputClosed { .. } | MailerError::TerminalClosed => {
                "Run the tool from an interactive terminal and answer every question"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MailerError>;
