//! # Proof Engine
//!
//! The writer-side operations: register a commitment, then produce any
//! number of targeted predicate proofs against it.
//!
//! Every prove call follows the same gate sequence:
//!
//! 1. re-derive the commitment from the supplied secret (canonical mode)
//!    and require a matching registration record — a mismatched secret is
//!    rejected as [`ProofError::SecretMismatch`] before any proof work;
//! 2. require the supplied holder address to match the one bound at
//!    registration ([`ProofError::HolderMismatch`]);
//! 3. evaluate the predicate — a false comparison fails closed with
//!    [`ProofError::PredicateUnsatisfied`], never reaching the provider;
//! 4. only then invoke the external proof capability.

use std::sync::Arc;

use zkred_core::{Commitment, CredentialSecret, DegreeLevel, HolderAddress};

use crate::claim::{ClaimWitness, PredicateClaim};
use crate::error::ProofError;
use crate::proof::Proof;
use crate::provider::{ProofProvider, PublicStatement};
use crate::registry::{CredentialRegistry, RegistrationRecord};

/// The predicate proof engine: registration plus one operation per
/// predicate.
///
/// Operations run to completion before the next call on the same holder
/// session; callers serialize requests (at most one in flight per wallet
/// session).
pub struct ProofEngine<P: ProofProvider> {
    registry: Arc<CredentialRegistry>,
    provider: P,
}

impl<P: ProofProvider> ProofEngine<P> {
    /// Create an engine over a shared registry and a proof capability.
    pub fn new(registry: Arc<CredentialRegistry>, provider: P) -> Self {
        Self { registry, provider }
    }

    /// The registry this engine writes to.
    pub fn registry(&self) -> &Arc<CredentialRegistry> {
        &self.registry
    }

    /// Register a commitment for a holder.
    ///
    /// A ledger write, created exactly once per commitment; a second
    /// identical call fails with [`ProofError::DuplicateRegistration`].
    /// Not safely retryable on ambiguous failure.
    pub fn register(
        &self,
        commitment: Commitment,
        holder: HolderAddress,
    ) -> Result<RegistrationRecord, ProofError> {
        tracing::info!(commitment = %commitment, holder = %holder, "registering credential commitment");
        let record = self.registry.register(commitment, holder)?;
        tracing::info!(verifier_instance = %record.verifier_instance, "credential commitment registered");
        Ok(record)
    }

    /// Prove knowledge of the secret behind a registered commitment.
    pub fn prove_ownership(
        &self,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        self.prove_claim(PredicateClaim::Ownership, ClaimWitness::Ownership, secret, holder)
    }

    /// Prove `current_year - birth_year ≥ min_age`.
    pub fn prove_age(
        &self,
        current_year: u16,
        birth_year: u16,
        min_age: u16,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        self.prove_claim(
            PredicateClaim::AgeAtLeast {
                current_year,
                min_age,
            },
            ClaimWitness::BirthYear(birth_year),
            secret,
            holder,
        )
    }

    /// Prove `actual_country == required_country`.
    pub fn prove_residency(
        &self,
        required_country: &str,
        actual_country: &str,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        self.prove_claim(
            PredicateClaim::ResidencyIn {
                required_country: required_country.to_string(),
            },
            ClaimWitness::Country(actual_country.to_string()),
            secret,
            holder,
        )
    }

    /// Prove `actual_level ≥ required_level`.
    pub fn prove_degree_level(
        &self,
        required_level: DegreeLevel,
        actual_level: DegreeLevel,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        self.prove_claim(
            PredicateClaim::DegreeLevelAtLeast { required_level },
            ClaimWitness::DegreeLevel(actual_level),
            secret,
            holder,
        )
    }

    /// Prove `0 ≤ current_year - graduation_year ≤ max_years_ago`.
    pub fn prove_graduation_recency(
        &self,
        current_year: u16,
        graduation_year: u16,
        max_years_ago: u16,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        self.prove_claim(
            PredicateClaim::GraduationWithin {
                current_year,
                max_years_ago,
            },
            ClaimWitness::GraduationYear(graduation_year),
            secret,
            holder,
        )
    }

    fn prove_claim(
        &self,
        claim: PredicateClaim,
        witness: ClaimWitness,
        secret: &CredentialSecret,
        holder: HolderAddress,
    ) -> Result<Proof, ProofError> {
        let circuit = claim.circuit_name();
        tracing::debug!(circuit, holder = %holder, "predicate proof requested");

        let commitment = Commitment::derive(secret);
        let record = self
            .registry
            .get(&commitment)
            .ok_or(ProofError::SecretMismatch)?;
        if record.holder != holder {
            return Err(ProofError::HolderMismatch {
                registered: record.holder.to_hex(),
                supplied: holder.to_hex(),
            });
        }

        if !claim.holds(&witness) {
            tracing::debug!(circuit, "predicate does not hold, failing closed");
            return Err(ProofError::PredicateUnsatisfied {
                circuit: circuit.to_string(),
            });
        }

        let statement = PublicStatement {
            circuit: circuit.to_string(),
            commitment,
            holder,
            claim: claim.clone(),
        };
        let artifact = self.provider.prove(&statement, secret, &witness)?;
        tracing::info!(circuit, commitment = %commitment, "predicate proof generated");
        Ok(Proof::new(commitment, holder, claim, artifact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockProofProvider, UnreachableProvider};

    fn setup() -> (ProofEngine<MockProofProvider>, CredentialSecret, HolderAddress) {
        let registry = Arc::new(CredentialRegistry::new());
        let engine = ProofEngine::new(registry, MockProofProvider);
        let secret = CredentialSecret::from_bytes([0x21u8; 32]);
        let holder = HolderAddress::from_bytes([0x42u8; 32]);
        (engine, secret, holder)
    }

    fn registered() -> (ProofEngine<MockProofProvider>, CredentialSecret, HolderAddress) {
        let (engine, secret, holder) = setup();
        engine
            .register(Commitment::derive(&secret), holder)
            .unwrap();
        (engine, secret, holder)
    }

    #[test]
    fn register_twice_fails_with_duplicate() {
        let (engine, secret, holder) = setup();
        let commitment = Commitment::derive(&secret);
        engine.register(commitment, holder).unwrap();
        assert!(matches!(
            engine.register(commitment, holder),
            Err(ProofError::DuplicateRegistration { .. })
        ));
        assert_eq!(engine.registry().len(), 1);
    }

    #[test]
    fn prove_ownership_succeeds_for_registered_secret() {
        let (engine, secret, holder) = registered();
        let proof = engine.prove_ownership(&secret, holder).unwrap();
        assert_eq!(proof.commitment(), &Commitment::derive(&secret));
        assert_eq!(proof.claim(), &PredicateClaim::Ownership);
    }

    #[test]
    fn prove_with_wrong_secret_is_secret_mismatch() {
        let (engine, _secret, holder) = registered();
        let wrong = CredentialSecret::from_bytes([0x99u8; 32]);
        assert!(matches!(
            engine.prove_ownership(&wrong, holder),
            Err(ProofError::SecretMismatch)
        ));
    }

    #[test]
    fn prove_with_wrong_holder_is_holder_mismatch() {
        let (engine, secret, _holder) = registered();
        let other = HolderAddress::from_bytes([0x77u8; 32]);
        assert!(matches!(
            engine.prove_ownership(&secret, other),
            Err(ProofError::HolderMismatch { .. })
        ));
    }

    #[test]
    fn prove_age_satisfied() {
        let (engine, secret, holder) = registered();
        // age 24 >= 18
        let proof = engine.prove_age(2024, 2000, 18, &secret, holder).unwrap();
        assert_eq!(
            proof.claim(),
            &PredicateClaim::AgeAtLeast {
                current_year: 2024,
                min_age: 18
            }
        );
    }

    #[test]
    fn prove_age_unsatisfied_returns_no_proof() {
        let (engine, secret, holder) = registered();
        // age 24 < 30
        let result = engine.prove_age(2024, 2000, 30, &secret, holder);
        match result.unwrap_err() {
            ProofError::PredicateUnsatisfied { circuit } => assert_eq!(circuit, "prove_age"),
            other => panic!("expected PredicateUnsatisfied, got: {other}"),
        }
    }

    #[test]
    fn prove_residency_exact_match_only() {
        let (engine, secret, holder) = registered();
        assert!(engine.prove_residency("US", "US", &secret, holder).is_ok());
        assert!(matches!(
            engine.prove_residency("US", "CA", &secret, holder),
            Err(ProofError::PredicateUnsatisfied { .. })
        ));
    }

    #[test]
    fn prove_degree_level_inclusive() {
        let (engine, secret, holder) = registered();
        assert!(engine
            .prove_degree_level(DegreeLevel::Bachelor, DegreeLevel::Bachelor, &secret, holder)
            .is_ok());
        assert!(engine
            .prove_degree_level(DegreeLevel::Bachelor, DegreeLevel::Master, &secret, holder)
            .is_ok());
        assert!(matches!(
            engine.prove_degree_level(
                DegreeLevel::Master,
                DegreeLevel::Bachelor,
                &secret,
                holder
            ),
            Err(ProofError::PredicateUnsatisfied { .. })
        ));
    }

    #[test]
    fn prove_graduation_recency_window() {
        let (engine, secret, holder) = registered();
        assert!(engine
            .prove_graduation_recency(2024, 2020, 5, &secret, holder)
            .is_ok());
        assert!(matches!(
            engine.prove_graduation_recency(2024, 2015, 5, &secret, holder),
            Err(ProofError::PredicateUnsatisfied { .. })
        ));
    }

    #[test]
    fn unsatisfied_predicate_never_reaches_the_provider() {
        // With an unreachable provider a false predicate must still fail
        // with PredicateUnsatisfied, proving the gate ordering.
        let registry = Arc::new(CredentialRegistry::new());
        let engine = ProofEngine::new(registry, UnreachableProvider);
        let secret = CredentialSecret::from_bytes([0x21u8; 32]);
        let holder = HolderAddress::from_bytes([0x42u8; 32]);
        engine
            .register(Commitment::derive(&secret), holder)
            .unwrap();

        let result = engine.prove_age(2024, 2000, 30, &secret, holder);
        assert!(matches!(
            result,
            Err(ProofError::PredicateUnsatisfied { .. })
        ));
    }

    #[test]
    fn satisfied_predicate_with_unreachable_provider_is_infrastructure_error() {
        let registry = Arc::new(CredentialRegistry::new());
        let engine = ProofEngine::new(registry, UnreachableProvider);
        let secret = CredentialSecret::from_bytes([0x21u8; 32]);
        let holder = HolderAddress::from_bytes([0x42u8; 32]);
        engine
            .register(Commitment::derive(&secret), holder)
            .unwrap();

        let result = engine.prove_age(2024, 2000, 18, &secret, holder);
        assert!(matches!(
            result,
            Err(ProofError::InfrastructureUnavailable(_))
        ));
    }

    #[test]
    fn proofs_are_non_state_changing() {
        let (engine, secret, holder) = registered();
        for _ in 0..3 {
            engine.prove_ownership(&secret, holder).unwrap();
        }
        assert_eq!(engine.registry().len(), 1);
    }
}
