//! # Error Types
//!
//! This module defines error types used throughout the struk library.

use thiserror::Error;

/// Main error type for struk operations
#[derive(Debug, Error)]
pub enum StrukError {
    /// The byte sink cannot be obtained on this platform or is not grantable
    #[error("Unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    /// An emission was attempted on a session whose sink is closed
    #[error("Printer not connected")]
    NotConnected,

    /// Out-of-range encoder input
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sink write or close failed mid-sequence
    #[error("Transmission failure: {0}")]
    TransmissionFailure(String),

    /// Receipt document could not be parsed
    #[error("Document error: {0}")]
    Document(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StrukError>;
