//! Error types for the reading and writing collaborators
//!
//! The tokenizer itself has no error type: every line produces fields.

use thiserror::Error;

/// Result type alias for csvline operations
pub type Result<T> = std::result::Result<T, CsvLineError>;

/// Errors raised while moving lines in or out of the tokenizer
#[derive(Debug, Error)]
pub enum CsvLineError {
    /// Reading from the source failed
    #[error("Read error: {0}")]
    ReadError(String),

    /// Writing to the sink failed, or a row cannot be written as one line
    #[error("Write error: {0}")]
    WriteError(String),

    /// Raw I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CsvLineError::ReadError("Failed to read line: boom".to_string());
        assert_eq!(err.to_string(), "Read error: Failed to read line: boom");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CsvLineError = io.into();
        assert!(matches!(err, CsvLineError::Io(_)));
        assert_eq!(err.to_string(), "missing");
    }
}
