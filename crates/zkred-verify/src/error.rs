//! # Verification Error Types
//!
//! None of these are ever converted into a "verified" result; rejection
//! is always explicit and typed.

use thiserror::Error;

use zkred_proof::ProviderError;

/// Errors from proof verification and fallback lookup.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The presented commitment string failed strict format validation.
    /// Raised before any ledger access is attempted.
    #[error("malformed commitment string: {0}")]
    InvalidFormat(String),

    /// The commitment is known to neither the registry, the fallback
    /// ledger, nor the current session.
    #[error("commitment not registered: {commitment}")]
    UnknownCommitment {
        /// Hex form of the rejected commitment.
        commitment: String,
    },

    /// The proof artifact does not check out against the registration
    /// record and declared public parameters.
    #[error("proof rejected: {reason}")]
    ProofRejected {
        /// Why the proof failed the check.
        reason: String,
    },

    /// Same-session re-evaluation found the predicate false.
    #[error("predicate unsatisfied: {circuit}")]
    PredicateUnsatisfied {
        /// Circuit name of the failed predicate.
        circuit: String,
    },

    /// The proof infrastructure is unreachable; the caller may retry or
    /// use the fallback path, marking any decision as non-authoritative.
    #[error("proof infrastructure unavailable: {0}")]
    InfrastructureUnavailable(String),

    /// Fallback ledger persistence failed.
    #[error("fallback ledger persistence: {0}")]
    Persistence(String),
}

impl From<ProviderError> for VerifyError {
    fn from(err: ProviderError) -> Self {
        VerifyError::InfrastructureUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for VerifyError {
    fn from(err: std::io::Error) -> Self {
        VerifyError::Persistence(err.to_string())
    }
}
