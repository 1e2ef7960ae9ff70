//! Error types for the lfsr crate.
//!
//! This module provides a unified error type for every fallible operation in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for register operations.
#[derive(Error, Debug)]
pub enum LfsrError {
    /// A seed or stored bit string contained something other than '0' or '1'
    #[error("Invalid input: expected '0' or '1' at position {position}, found {found:?}")]
    InvalidInput {
        /// Character index of the offending character
        position: usize,
        /// The character that was found
        found: char,
    },

    /// Register is too short for the feedback function to be defined
    #[error("Invalid configuration: register needs at least 2 bits, got {length}")]
    InvalidConfiguration {
        /// Number of bits the register would have had
        length: usize,
    },

    /// Stored state does not match the register width
    #[error("Invalid input size: expected {expected}, got {actual}")]
    InvalidInputSize {
        /// Expected size
        expected: usize,
        /// Actual size received
        actual: usize,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// A specialized `Result` type for register operations.
pub type Result<T> = std::result::Result<T, LfsrError>;
