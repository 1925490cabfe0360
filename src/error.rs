use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse simulation config JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Simulation config is invalid: {0}")]
    InvalidConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
