//! Error types for the arena client SDK

use thiserror::Error;

/// Result type for arena operations
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Arena error types
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Underlying stream failed on read, write or flush
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Byte that should encode a bool was neither 0 nor 1
    #[error("Invalid bool byte: {0}")]
    InvalidBool(u8),

    /// Length prefix was negative or above the sanity limit
    #[error("Invalid length prefix: {0}")]
    InvalidLength(i64),

    /// String payload was not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Enum discriminant not known for the decoded type
    #[error("Unexpected tag {tag} for {type_name}")]
    UnexpectedTag { type_name: &'static str, tag: i32 },

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Strategy callback left unimplemented
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ArenaError {
    /// Whether the error came from the transport rather than from decoding
    pub fn is_io(&self) -> bool {
        matches!(self, ArenaError::Io(_))
    }
}
