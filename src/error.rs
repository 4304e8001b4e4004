//! Error types for coursepath.

use thiserror::Error;

/// Common error type for path derivation.
#[derive(Error, Debug)]
pub enum CoursePathError {
    /// Configuration error.
    ///
    /// Raised when no download root is configured anywhere (neither a
    /// per-user root nor the system-wide one), or when a config file
    /// fails to parse or validate.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    ///
    /// Directory-creation failures are propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The assembled path cannot fit the total-length ceiling.
    ///
    /// Raised when shortening the file segment to satisfy the ceiling
    /// would leave it empty, i.e. the base plus folder segments alone
    /// already reach the ceiling.
    #[error("path too long: {0}")]
    PathTooLong(String),
}

/// Result type alias for coursepath operations.
pub type Result<T> = std::result::Result<T, CoursePathError>;
