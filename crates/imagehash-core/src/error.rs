use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the imagehash library
#[derive(Error, Debug)]
pub enum Error {
    /// Image has no pixels or cannot be turned into an intensity grid
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Two bit sequences of different length were compared
    #[error("Length mismatch: {left} bits vs {right} bits")]
    LengthMismatch { left: usize, right: usize },

    /// Fingerprint text could not be parsed
    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
