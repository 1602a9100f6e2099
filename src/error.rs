use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinsightError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid PIN: '{0}' (expected exactly 4 digits)")]
    InvalidPin(String),

    #[error("Duplicate PIN found: {pin}")]
    DuplicatePin { pin: String },

    #[error("Expected {expected} PINs, got {actual}")]
    IncompleteTable { expected: usize, actual: usize },

    #[error("Invalid count {count} for PIN {pin} (counts must be >= 1)")]
    InvalidCount { pin: String, count: u64 },
}

pub type PsResult<T> = Result<T, PinsightError>;
