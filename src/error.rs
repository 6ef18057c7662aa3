//! Error types shared across the application
//!
//! Errors that travel inside iced messages must be `Clone`,
//! so transport and decoder errors are flattened to strings.

use thiserror::Error;

/// Rejected date range input. The message is shown verbatim in the notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select both start and end dates.")]
    MissingDate,
    #[error("Dates must use the YYYY-MM-DD format (got \"{0}\").")]
    InvalidDate(String),
    #[error("Start date must be earlier than end date.")]
    InvertedRange,
}

/// Failure to load the feed document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid feed document: {0}")]
    Parse(String),
}

/// Failure to download or decode a remote image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("failed to download image: {0}")]
    Download(String),
    #[error("failed to decode image: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that abort startup before the window opens
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] FetchError),
    #[error(transparent)]
    Gui(#[from] iced::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(err.to_string()),
        }
    }
}
