use thiserror::Error;

/// Error type that captures tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date `{input}`, expected DD.MM.YYYY: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
