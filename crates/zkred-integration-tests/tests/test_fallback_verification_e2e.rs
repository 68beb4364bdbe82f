//! # Fallback Verification End-to-End Integration Tests
//!
//! Models the degraded operating mode: the proof infrastructure is down,
//! so the holder publishes their commitment to the local fallback ledger
//! and the verifier resolves presented strings against it. The tests pin
//! the safety properties of that mode:
//!
//! - strict format validation runs before any ledger access
//! - unknown commitments are never assumed valid
//! - fallback decisions are never authoritative
//! - same-session claims re-evaluate against real attributes and fail
//!   closed
//! - the ledger round-trips through its JSON persistence with duplicate
//!   collapse and entry re-validation

use std::sync::Arc;

use zkred_core::{AttributeSet, Commitment, CredentialSecret, DegreeLevel, HolderAddress};
use zkred_proof::{
    CredentialRegistry, PredicateClaim, ProofEngine, ProofError, UnreachableProvider,
};
use zkred_verify::{
    verify_fallback, FallbackDecision, FallbackLedger, HolderSession, VerifyError,
};

fn attrs() -> AttributeSet {
    AttributeSet {
        name: "Jordan Reyes".to_string(),
        birth_year: 2000,
        country: "US".to_string(),
        degree_level: DegreeLevel::Bachelor,
        field_of_study: "Physics".to_string(),
        institution: "Caltech".to_string(),
        graduation_year: 2022,
    }
}

#[test]
fn malformed_commitment_rejected_before_any_ledger_access() {
    let ledger = FallbackLedger::new();
    assert!(matches!(
        verify_fallback("0xdeadbeef", None, &ledger, None),
        Err(VerifyError::InvalidFormat(_))
    ));
    assert!(matches!(
        verify_fallback(&format!("0x{}", "A".repeat(64)), None, &ledger, None),
        Err(VerifyError::InvalidFormat(_))
    ));
    assert!(matches!(
        verify_fallback(&"a".repeat(66), None, &ledger, None),
        Err(VerifyError::InvalidFormat(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn outage_then_fallback_publication_flow() {
    // proof infrastructure down: registration still lands on the ledger
    // side, but proving fails with an infrastructure error
    let registry = Arc::new(CredentialRegistry::new());
    let engine = ProofEngine::new(registry, UnreachableProvider);
    let secret = CredentialSecret::from_bytes([0x31u8; 32]);
    let holder = HolderAddress::from_bytes([0x32u8; 32]);
    engine
        .register(Commitment::derive(&secret), holder)
        .unwrap();
    assert!(matches!(
        engine.prove_ownership(&secret, holder),
        Err(ProofError::InfrastructureUnavailable(_))
    ));

    // holder falls back to publishing the bare commitment locally
    let session = HolderSession::new(secret, attrs());
    let ledger = FallbackLedger::new();
    assert!(ledger.publish(session.commitment()));
    assert!(!ledger.publish(session.commitment()));

    // verifier resolves the presented string against the local ledger
    let decision =
        verify_fallback(&session.commitment().to_hex(), None, &ledger, None).unwrap();
    assert_eq!(decision, FallbackDecision::CommitmentKnown);
    assert!(!decision.is_authoritative());
}

#[test]
fn unknown_commitment_is_rejected_not_degraded() {
    let ledger = FallbackLedger::new();
    ledger.publish(&Commitment::derive(&CredentialSecret::from_bytes(
        [0x33u8; 32],
    )));

    let stranger = Commitment::derive(&CredentialSecret::from_bytes([0x44u8; 32]));
    assert!(matches!(
        verify_fallback(&stranger.to_hex(), None, &ledger, None),
        Err(VerifyError::UnknownCommitment { .. })
    ));
}

#[test]
fn same_session_claim_reevaluates_against_real_attributes() {
    let session = HolderSession::new(CredentialSecret::from_bytes([0x35u8; 32]), attrs());
    let ledger = FallbackLedger::new();

    // born 2000: age 24 in 2024
    let satisfied = PredicateClaim::AgeAtLeast {
        current_year: 2024,
        min_age: 18,
    };
    let decision = verify_fallback(
        &session.commitment().to_hex(),
        Some(&satisfied),
        &ledger,
        Some(&session),
    )
    .unwrap();
    assert_eq!(decision, FallbackDecision::ClaimValidated);
    assert!(!decision.is_authoritative());

    let unsatisfied = PredicateClaim::AgeAtLeast {
        current_year: 2024,
        min_age: 30,
    };
    assert!(matches!(
        verify_fallback(
            &session.commitment().to_hex(),
            Some(&unsatisfied),
            &ledger,
            Some(&session),
        ),
        Err(VerifyError::PredicateUnsatisfied { circuit }) if circuit == "prove_age"
    ));
}

#[test]
fn foreign_commitment_with_session_present_stays_membership_only() {
    // the verifier holds their own session, but the presented commitment
    // belongs to someone else on the ledger; the claim cannot be checked
    let session = HolderSession::new(CredentialSecret::from_bytes([0x36u8; 32]), attrs());
    let ledger = FallbackLedger::new();
    let foreign = Commitment::derive(&CredentialSecret::from_bytes([0x37u8; 32]));
    ledger.publish(&foreign);

    let claim = PredicateClaim::ResidencyIn {
        required_country: "US".to_string(),
    };
    let decision = verify_fallback(
        &foreign.to_hex(),
        Some(&claim),
        &ledger,
        Some(&session),
    )
    .unwrap();
    assert_eq!(decision, FallbackDecision::CommitmentKnown);
}

#[test]
fn ledger_persists_and_reloads_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fallback-ledger.json");

    let first = FallbackLedger::new();
    let a = Commitment::derive(&CredentialSecret::from_bytes([0x38u8; 32]));
    let b = Commitment::derive(&CredentialSecret::from_bytes([0x39u8; 32]));
    first.publish(&a);
    first.publish(&b);
    first.save_to(&path).unwrap();

    // a later verifier session reloads the same ledger
    let second = FallbackLedger::load_from(&path).unwrap();
    assert_eq!(second.entries(), first.entries());

    let decision = verify_fallback(&a.to_hex(), None, &second, None).unwrap();
    assert_eq!(decision, FallbackDecision::CommitmentKnown);
}

#[test]
fn reloaded_ledger_rejects_tampered_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fallback-ledger.json");
    std::fs::write(&path, r#"["0xnot-a-commitment"]"#).unwrap();

    assert!(matches!(
        FallbackLedger::load_from(&path),
        Err(VerifyError::Persistence(_))
    ));
}
