//! Error types for the sideline ecosystem.

use thiserror::Error;

/// Errors that can occur in sideline operations.
#[derive(Error, Debug)]
pub enum SidelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No template found for reminder kind '{0}'")]
    TemplateNotFound(String),

    #[error("Missing data for placeholder {0}")]
    MissingPlaceholderData(&'static str),

    #[error("Reminder already recorded as sent under key '{0}'")]
    DuplicateSend(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for sideline operations.
pub type SidelineResult<T> = Result<T, SidelineError>;
