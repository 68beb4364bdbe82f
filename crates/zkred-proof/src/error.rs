//! # Proof Engine Error Types
//!
//! Every failure mode of registration and proof generation is a typed
//! variant. None of these are ever converted into a "verified" result.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors from registration and predicate proof operations.
#[derive(Error, Debug)]
pub enum ProofError {
    /// The commitment is already registered. Registration is a ledger
    /// write with fee-spending side effects, so a second identical call
    /// is rejected rather than treated as an idempotent no-op.
    #[error("commitment already registered: {commitment}")]
    DuplicateRegistration {
        /// Hex form of the already-registered commitment.
        commitment: String,
    },

    /// The supplied secret does not reproduce any registered commitment.
    /// Rejected before any proof work is attempted.
    #[error("supplied secret does not reproduce a registered commitment")]
    SecretMismatch,

    /// The supplied holder address does not match the one bound at
    /// registration time.
    #[error("holder address does not match registration: registered {registered}, supplied {supplied}")]
    HolderMismatch {
        /// Holder address bound into the registration record.
        registered: String,
        /// Holder address supplied with the proof call.
        supplied: String,
    },

    /// The predicate comparison does not hold. Proof generation fails
    /// closed; no artifact is produced.
    #[error("predicate unsatisfied: {circuit}")]
    PredicateUnsatisfied {
        /// Circuit name of the failed predicate.
        circuit: String,
    },

    /// The external proof capability is unreachable. The caller may fall
    /// back to non-authoritative verification.
    #[error("proof infrastructure unavailable: {0}")]
    InfrastructureUnavailable(String),

    /// The external proof capability reached the circuit but failed to
    /// produce an artifact.
    #[error("proof generation failed: {0}")]
    GenerationFailed(String),
}

impl From<ProviderError> for ProofError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unreachable(reason) => ProofError::InfrastructureUnavailable(reason),
            ProviderError::GenerationFailed(reason) => ProofError::GenerationFailed(reason),
        }
    }
}
