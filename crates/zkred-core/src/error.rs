//! # Core Error Types
//!
//! Structured errors for the foundational types. Uses `thiserror` for
//! ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// Errors from the foundational commitment and attribute types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A commitment or address string failed strict format validation.
    ///
    /// Raised before any ledger or registry access is attempted.
    #[error("malformed hex string: {0}")]
    InvalidFormat(String),

    /// A secret was supplied with the wrong byte length.
    ///
    /// Secrets are rejected, never silently padded or truncated.
    #[error("invalid secret length: expected 32 bytes, got {0}")]
    InvalidSecretLength(usize),

    /// An address was supplied with the wrong byte length.
    #[error("invalid address length: expected 32 bytes, got {0}")]
    InvalidAddressLength(usize),

    /// A degree level name did not match any known level.
    #[error("unknown degree level: {0}")]
    UnknownDegreeLevel(String),
}
