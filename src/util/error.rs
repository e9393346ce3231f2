//! Error types for session decoding.

use thiserror::Error;

/// Failure of the opcode stream itself. Always fatal for the whole session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Byte that is not a known opcode
    #[error("Unknown opcode 0x{opcode:02x} at position {position}")]
    UnknownOpcode { opcode: u8, position: u64 },

    /// Stream ended before STOP or inside an operand
    #[error("Premature end of stream at position {position}")]
    PrematureEof { position: u64 },

    /// Operand on the stack had the wrong shape for the opcode
    #[error("Type mismatch at position {position}: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
        position: u64,
    },
}

/// Main error type for session operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Opcode stream could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Record layout version not supported
    #[error("Unsupported {what} version: {version}")]
    UnsupportedVersion { what: &'static str, version: i32 },

    /// A field the object layout requires is missing
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid data structure in the decoded tree
    #[error("Invalid session structure: {0}")]
    InvalidStructure(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid structure error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidStructure(msg.into())
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// True for failures that abort the whole session rather than one object.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::Io(_))
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::Decode(DecodeError::UnknownOpcode { opcode: 0xfe, position: 12 });
        assert!(e.to_string().contains("0xfe"));
        assert!(e.to_string().contains("12"));

        let e = Error::UnsupportedVersion { what: "atom", version: 190 };
        assert!(e.to_string().contains("atom"));
        assert!(e.to_string().contains("190"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_version_error_not_fatal() {
        let err = Error::UnsupportedVersion { what: "bond", version: 3 };
        assert!(!err.is_fatal());
        assert!(!Error::missing("atoms").is_fatal());
    }
}
