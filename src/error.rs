//! Error type shared by every construction in the crate.
//!
//! Failures fall into two groups:
//!
//! - **shape errors** (`InvalidLength`, `TooShort`, `InvalidHex`,
//!   `InvalidKey`), detected before any cryptographic work is done;
//! - **authentication failures** (`Unauthenticated`), which deliberately
//!   carry no detail about what did not match.

use thiserror::Error;

/// Errors returned by key constructors and by the open/verify operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raw input does not have the exact size required by the target type.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input is shorter than the fixed framing it must contain
    /// (authentication tag, signature, or prepended nonce).
    #[error("input too short: expected at least {minimum} bytes, got {actual}")]
    TooShort { minimum: usize, actual: usize },

    /// Hex-encoded key material could not be decoded.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Key material has the right size but is internally inconsistent.
    #[error("invalid key material")]
    InvalidKey,

    /// The authentication tag or signature did not verify.
    #[error("authentication failed")]
    Unauthenticated,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
