use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackfitError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Instruction index {index} out of range for sequence of length {len}")]
    Index { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackfitError>;
