use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingsumError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RingsumError>;
