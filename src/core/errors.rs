//! Custom error types for translation, health checks and storage

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Backend URL could not be parsed
    #[error("Invalid URL configuration: {url}")]
    InvalidUrl {
        url: String,
    },

    /// Host unreachable, timed out, or the body could not be read
    #[error("Network error: {message}")]
    Transport {
        message: String,
    },

    /// Non-200 status from the translation service
    #[error("Server error: {status}")]
    Server {
        status: u16,
    },

    /// 200 response whose body does not match the expected schema
    #[error("Invalid server response: {message}")]
    Decode {
        message: String,
    },

    /// Well-formed failure reported by the translation service itself
    #[error("{message}")]
    Application {
        message: String,
        details: Option<String>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Reqwest error raised while building the HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TranslationError {
    /// Whether the failure happened below the application protocol
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslationError::Transport { .. } | TranslationError::Http(_))
    }

    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            TranslationError::InvalidUrl { .. } => "Invalid URL configuration".to_string(),
            TranslationError::Transport { .. } | TranslationError::Http(_) => {
                "Could not reach the translation service. Check your connection.".to_string()
            }
            TranslationError::Server { status } => format!("Server error: {}", status),
            TranslationError::Decode { .. } => "Invalid server response".to_string(),
            TranslationError::Application { message, .. } => message.clone(),
            TranslationError::Config { message } => format!("Configuration error: {}", message),
            TranslationError::Internal(_) => "Something went wrong".to_string(),
        }
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::Internal(err.to_string())
    }
}

/// Reasons a backend health check did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HealthCheckError {
    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Cannot connect - is the server running?")]
    CannotConnect,

    #[error("Connection timed out")]
    Timeout,

    #[error("Server returned status: {0}")]
    Status(u16),

    #[error("Invalid response from server")]
    InvalidResponse,

    #[error("Connection failed: {0}")]
    Failed(String),
}

/// Key-value store errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key cannot be mapped onto the backing medium
    #[error("Invalid storage key: {key}")]
    InvalidKey {
        key: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
