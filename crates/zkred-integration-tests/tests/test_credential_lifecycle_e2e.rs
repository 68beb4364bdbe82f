//! # Credential Lifecycle End-to-End Integration Tests
//!
//! Proves the full holder/verifier lifecycle across crates:
//!
//! 1. Holder generates a secret and derives the canonical commitment
//! 2. Commitment registers on the ledger exactly once
//! 3. Satisfied predicates yield proofs; the verifier accepts them
//!    without ever seeing the attribute set or secret
//! 4. Unsatisfied predicates fail closed and leave no proof behind
//! 5. Re-registration of the same commitment is a hard error with
//!    exactly one surviving record
//! 6. A wrong secret or wrong holder is rejected before any proof work

use std::sync::Arc;

use zkred_core::{Commitment, CredentialSecret, DegreeLevel, HolderAddress};
use zkred_proof::{
    CredentialRegistry, MockProofProvider, PredicateClaim, ProofEngine, ProofError,
};
use zkred_verify::{verify_proof, VerifyError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

fn setup() -> (ProofEngine<MockProofProvider>, CredentialSecret, HolderAddress) {
    init_tracing();
    let registry = Arc::new(CredentialRegistry::new());
    let engine = ProofEngine::new(registry, MockProofProvider);
    let secret = CredentialSecret::generate();
    let holder = HolderAddress::from_bytes([0xa1u8; 32]);
    engine
        .register(Commitment::derive(&secret), holder)
        .unwrap();
    (engine, secret, holder)
}

#[test]
fn register_prove_verify_roundtrip() {
    let (engine, secret, holder) = setup();

    // born 2000, claim age >= 18 evaluated in 2024
    let proof = engine.prove_age(2024, 2000, 18, &secret, holder).unwrap();
    assert_eq!(proof.commitment(), &Commitment::derive(&secret));

    verify_proof(&proof, engine.registry(), &MockProofProvider).unwrap();
}

#[test]
fn unsatisfied_age_claim_yields_no_proof() {
    let (engine, secret, holder) = setup();

    // born 2000, claim age >= 30 evaluated in 2024: age is 24
    let result = engine.prove_age(2024, 2000, 30, &secret, holder);
    match result.unwrap_err() {
        ProofError::PredicateUnsatisfied { circuit } => assert_eq!(circuit, "prove_age"),
        other => panic!("expected PredicateUnsatisfied, got: {other}"),
    }
}

#[test]
fn every_predicate_roundtrips_through_the_verifier() {
    let (engine, secret, holder) = setup();

    let proofs = vec![
        engine.prove_ownership(&secret, holder).unwrap(),
        engine.prove_age(2024, 1998, 21, &secret, holder).unwrap(),
        engine
            .prove_residency("DE", "DE", &secret, holder)
            .unwrap(),
        engine
            .prove_degree_level(DegreeLevel::Bachelor, DegreeLevel::Master, &secret, holder)
            .unwrap(),
        engine
            .prove_graduation_recency(2024, 2021, 5, &secret, holder)
            .unwrap(),
    ];

    for proof in &proofs {
        verify_proof(proof, engine.registry(), &MockProofProvider).unwrap();
    }

    // proving is non-state-changing
    assert_eq!(engine.registry().len(), 1);
}

#[test]
fn double_registration_is_rejected_with_one_surviving_record() {
    let (engine, secret, holder) = setup();
    let commitment = Commitment::derive(&secret);

    let second = engine.register(commitment, holder);
    match second.unwrap_err() {
        ProofError::DuplicateRegistration { commitment: hex } => {
            assert_eq!(hex, commitment.to_hex());
        }
        other => panic!("expected DuplicateRegistration, got: {other}"),
    }
    assert_eq!(engine.registry().len(), 1);

    // the original record still serves proofs
    let proof = engine.prove_ownership(&secret, holder).unwrap();
    verify_proof(&proof, engine.registry(), &MockProofProvider).unwrap();
}

#[test]
fn wrong_secret_is_rejected_before_proof_work() {
    let (engine, _secret, holder) = setup();
    let wrong = CredentialSecret::generate();
    assert!(matches!(
        engine.prove_ownership(&wrong, holder),
        Err(ProofError::SecretMismatch)
    ));
}

#[test]
fn wrong_holder_is_rejected() {
    let (engine, secret, _holder) = setup();
    let stranger = HolderAddress::from_bytes([0xb2u8; 32]);
    assert!(matches!(
        engine.prove_age(2024, 2000, 18, &secret, stranger),
        Err(ProofError::HolderMismatch { .. })
    ));
}

#[test]
fn proof_for_one_registry_fails_against_another() {
    let (engine, secret, holder) = setup();
    let proof = engine.prove_ownership(&secret, holder).unwrap();

    let other = CredentialRegistry::new();
    assert!(matches!(
        verify_proof(&proof, &other, &MockProofProvider),
        Err(VerifyError::UnknownCommitment { .. })
    ));
}

#[test]
fn serialized_proof_survives_transport_and_still_verifies() {
    let (engine, secret, holder) = setup();
    let proof = engine
        .prove_degree_level(DegreeLevel::Associate, DegreeLevel::Doctorate, &secret, holder)
        .unwrap();

    // verifier receives the proof as JSON from the holder
    let wire = serde_json::to_string(&proof).unwrap();
    let received: zkred_proof::Proof = serde_json::from_str(&wire).unwrap();
    verify_proof(&received, engine.registry(), &MockProofProvider).unwrap();
}

#[test]
fn tampered_artifact_is_rejected() {
    let (engine, secret, holder) = setup();
    let proof = engine.prove_ownership(&secret, holder).unwrap();

    let mut doctored = serde_json::to_value(&proof).unwrap();
    doctored["artifact"]["artifact_hex"] = serde_json::json!("00".repeat(32));
    let doctored: zkred_proof::Proof = serde_json::from_value(doctored).unwrap();

    assert!(matches!(
        verify_proof(&doctored, engine.registry(), &MockProofProvider),
        Err(VerifyError::ProofRejected { .. })
    ));
}

#[test]
fn claim_parameters_are_bound_into_the_artifact() {
    let (engine, secret, holder) = setup();
    let proof = engine.prove_age(2024, 2000, 18, &secret, holder).unwrap();

    // weaken the public claim while keeping the original artifact
    let mut doctored = serde_json::to_value(&proof).unwrap();
    doctored["claim"]["min_age"] = serde_json::json!(16);
    let doctored: zkred_proof::Proof = serde_json::from_value(doctored).unwrap();

    assert!(matches!(
        verify_proof(&doctored, engine.registry(), &MockProofProvider),
        Err(VerifyError::ProofRejected { .. })
    ));
}

#[test]
fn distinct_holders_register_distinct_commitments_independently() {
    init_tracing();
    let registry = Arc::new(CredentialRegistry::new());
    let engine = ProofEngine::new(Arc::clone(&registry), MockProofProvider);

    let secret_a = CredentialSecret::from_bytes([1u8; 32]);
    let secret_b = CredentialSecret::from_bytes([2u8; 32]);
    let holder_a = HolderAddress::from_bytes([0x0au8; 32]);
    let holder_b = HolderAddress::from_bytes([0x0bu8; 32]);

    let rec_a = engine
        .register(Commitment::derive(&secret_a), holder_a)
        .unwrap();
    let rec_b = engine
        .register(Commitment::derive(&secret_b), holder_b)
        .unwrap();
    assert_ne!(rec_a.verifier_instance, rec_b.verifier_instance);

    // each holder proves only against their own record
    assert!(engine.prove_ownership(&secret_a, holder_a).is_ok());
    assert!(matches!(
        engine.prove_ownership(&secret_a, holder_b),
        Err(ProofError::HolderMismatch { .. })
    ));

    let claim = PredicateClaim::Ownership;
    assert_eq!(claim.circuit_name(), "prove_credential_ownership");
}
