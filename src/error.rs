//! Error types for Orchard Sim

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchardError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrchardError>;
