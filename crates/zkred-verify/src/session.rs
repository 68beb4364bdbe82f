//! # Holder Session
//!
//! The holder-side working state for one verification session: the
//! credential secret, the private attribute set, and the commitment
//! derived from them once at session start. The secret and attributes
//! never leave the session; the only things handed out are the
//! commitment and per-claim witnesses.

use zkred_core::{AttributeSet, Commitment, CredentialSecret};
use zkred_proof::{ClaimWitness, PredicateClaim};

/// Holder-side session state.
///
/// Owns the secret for its lifetime; the secret zeroizes when the
/// session is dropped.
#[derive(Debug)]
pub struct HolderSession {
    secret: CredentialSecret,
    attributes: AttributeSet,
    commitment: Commitment,
}

impl HolderSession {
    /// Open a session, deriving the canonical commitment once.
    pub fn new(secret: CredentialSecret, attributes: AttributeSet) -> Self {
        let commitment = Commitment::derive(&secret);
        Self {
            secret,
            attributes,
            commitment,
        }
    }

    /// The commitment derived at session start.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The session secret, for proof-generation calls.
    pub fn secret(&self) -> &CredentialSecret {
        &self.secret
    }

    /// Draw the private witness a claim needs from the attribute set.
    pub fn witness_for(&self, claim: &PredicateClaim) -> ClaimWitness {
        match claim {
            PredicateClaim::Ownership => ClaimWitness::Ownership,
            PredicateClaim::AgeAtLeast { .. } => {
                ClaimWitness::BirthYear(self.attributes.birth_year)
            }
            PredicateClaim::ResidencyIn { .. } => {
                ClaimWitness::Country(self.attributes.country.clone())
            }
            PredicateClaim::DegreeLevelAtLeast { .. } => {
                ClaimWitness::DegreeLevel(self.attributes.degree_level)
            }
            PredicateClaim::GraduationWithin { .. } => {
                ClaimWitness::GraduationYear(self.attributes.graduation_year)
            }
        }
    }
}
