//! # Proof Artifacts
//!
//! A [`Proof`] is produced only when its predicate claim holds. It binds
//! the commitment, the holder address, and the public claim parameters,
//! and is independently verifiable without the attribute set or secret.
//!
//! Construction is restricted to the engine: the only way to obtain a
//! `Proof` value in this workspace is through a satisfied predicate.
//! Deserialized proofs from outside are untrusted until checked by the
//! verification lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zkred_core::{Commitment, HolderAddress};

use crate::claim::PredicateClaim;

/// The opaque artifact returned by the proof-generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofArtifact {
    /// Hex-encoded artifact bytes (64 hex characters for the mock
    /// backend's SHA-256 digests).
    pub artifact_hex: String,
}

impl ProofArtifact {
    /// Whether the artifact has the expected 64-hex-character shape.
    pub fn is_well_formed(&self) -> bool {
        self.artifact_hex.len() == 64
            && self
                .artifact_hex
                .bytes()
                .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
    }
}

/// A verifiable predicate proof.
///
/// Binds commitment, holder address, and public claim parameters. A
/// verifier checks it against the public registration record without ever
/// seeing the attribute set or secret. There is no "result" boolean
/// inside — a proof exists only for a satisfied predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    commitment: Commitment,
    holder: HolderAddress,
    claim: PredicateClaim,
    artifact: ProofArtifact,
    created: DateTime<Utc>,
}

impl Proof {
    pub(crate) fn new(
        commitment: Commitment,
        holder: HolderAddress,
        claim: PredicateClaim,
        artifact: ProofArtifact,
    ) -> Self {
        Self {
            commitment,
            holder,
            claim,
            artifact,
            created: Utc::now(),
        }
    }

    /// The commitment this proof is anchored to.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The holder address the proof is bound to.
    pub fn holder(&self) -> &HolderAddress {
        &self.holder
    }

    /// The public claim parameters the proof demonstrates.
    pub fn claim(&self) -> &PredicateClaim {
        &self.claim
    }

    /// The provider-produced artifact.
    pub fn artifact(&self) -> &ProofArtifact {
        &self.artifact
    }

    /// When the proof was generated.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
