//! # Proof Provider Capability
//!
//! The external proof-generation capability: accepts public predicate
//! parameters plus the private secret/attribute values and returns a
//! proof artifact or fails. The circuit arithmetic itself is an external,
//! already-compiled capability — this crate only defines the seam.
//!
//! ## Mock Backend
//!
//! [`MockProofProvider`] is a deterministic, transparent stand-in for
//! local simulation: the artifact is
//! `SHA-256(canonical_json(public_statement))`. **NOT PRIVATE** — anyone
//! can recompute it from the public statement. It exists so the rest of
//! the pipeline can run end to end without a circuit runtime, and so a
//! verifier can recompute and check artifacts deterministically.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use zkred_core::{Commitment, CredentialSecret, HolderAddress};

use crate::claim::{ClaimWitness, PredicateClaim};
use crate::proof::ProofArtifact;

/// Errors from the proof-generation capability.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The proof infrastructure cannot be reached at all.
    #[error("proof provider unreachable: {0}")]
    Unreachable(String),

    /// The circuit was reached but failed to produce an artifact.
    #[error("proof generation failed: {0}")]
    GenerationFailed(String),
}

/// The public inputs to one proof-generation call.
///
/// Everything in here may cross a trust boundary; the private witness is
/// passed separately and never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct PublicStatement {
    /// Circuit name being invoked.
    pub circuit: String,
    /// The commitment the proof anchors to.
    pub commitment: Commitment,
    /// The holder address bound into the proof.
    pub holder: HolderAddress,
    /// The public claim parameters.
    pub claim: PredicateClaim,
}

/// The external proof-generation capability.
///
/// Implementations must only be called with a predicate already known to
/// hold — the engine enforces fail-closed evaluation before invoking
/// this seam.
pub trait ProofProvider {
    /// Generate a proof artifact for the statement, using the private
    /// secret and witness as circuit inputs.
    fn prove(
        &self,
        statement: &PublicStatement,
        secret: &CredentialSecret,
        witness: &ClaimWitness,
    ) -> Result<ProofArtifact, ProviderError>;

    /// Check an artifact against a public statement.
    fn verify(
        &self,
        statement: &PublicStatement,
        artifact: &ProofArtifact,
    ) -> Result<bool, ProviderError>;
}

/// Deterministic transparent mock backend.
///
/// `artifact = SHA-256(canonical_json(statement))`. The secret and
/// witness do not enter the digest; the engine has already checked that
/// the secret reproduces the registered commitment and that the
/// predicate holds. **NOT PRIVATE** — for local simulation only.
#[derive(Debug, Clone, Default)]
pub struct MockProofProvider;

impl MockProofProvider {
    fn statement_digest(statement: &PublicStatement) -> Result<String, ProviderError> {
        let bytes = serde_json::to_vec(statement)
            .map_err(|e| ProviderError::GenerationFailed(format!("statement encoding: {e}")))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
    }
}

impl ProofProvider for MockProofProvider {
    fn prove(
        &self,
        statement: &PublicStatement,
        _secret: &CredentialSecret,
        _witness: &ClaimWitness,
    ) -> Result<ProofArtifact, ProviderError> {
        tracing::debug!(circuit = %statement.circuit, "generating mock proof artifact");
        Ok(ProofArtifact {
            artifact_hex: Self::statement_digest(statement)?,
        })
    }

    fn verify(
        &self,
        statement: &PublicStatement,
        artifact: &ProofArtifact,
    ) -> Result<bool, ProviderError> {
        if !artifact.is_well_formed() {
            return Ok(false);
        }
        Ok(Self::statement_digest(statement)? == artifact.artifact_hex)
    }
}

/// A provider that models unreachable proof infrastructure.
///
/// Every call fails with [`ProviderError::Unreachable`], which surfaces
/// to callers as `InfrastructureUnavailable` so they can choose the
/// fallback verification path.
#[derive(Debug, Clone, Default)]
pub struct UnreachableProvider;

impl ProofProvider for UnreachableProvider {
    fn prove(
        &self,
        statement: &PublicStatement,
        _secret: &CredentialSecret,
        _witness: &ClaimWitness,
    ) -> Result<ProofArtifact, ProviderError> {
        tracing::warn!(circuit = %statement.circuit, "proof infrastructure unreachable");
        Err(ProviderError::Unreachable(
            "proof server not reachable".to_string(),
        ))
    }

    fn verify(
        &self,
        _statement: &PublicStatement,
        _artifact: &ProofArtifact,
    ) -> Result<bool, ProviderError> {
        Err(ProviderError::Unreachable(
            "proof server not reachable".to_string(),
        ))
    }
}
