//! # Verification Lookup
//!
//! [`verify_proof`] is the authenticated path: check a proof artifact
//! against the public registration record and the statement the proof
//! declares. [`verify_fallback`] is the degraded path for when the proof
//! infrastructure is down: strict format validation, then local-ledger
//! membership and/or same-session commitment equality. Fallback
//! decisions are typed so that no caller can mistake them for an
//! authenticated result.

use zkred_core::Commitment;
use zkred_proof::{
    CredentialRegistry, PredicateClaim, Proof, ProofProvider, PublicStatement,
};

use crate::error::VerifyError;
use crate::fallback::FallbackLedger;
use crate::session::HolderSession;

/// Check a predicate proof against the registry.
///
/// The proof must anchor to a registered commitment, its holder binding
/// must match the registration record, and the artifact must check out
/// against the statement rebuilt from the record and the proof's public
/// claim parameters. The holder's attributes and secret are never
/// consulted.
pub fn verify_proof<P: ProofProvider>(
    proof: &Proof,
    registry: &CredentialRegistry,
    provider: &P,
) -> Result<(), VerifyError> {
    let record = registry
        .get(proof.commitment())
        .ok_or_else(|| VerifyError::UnknownCommitment {
            commitment: proof.commitment().to_hex(),
        })?;

    if record.holder != *proof.holder() {
        tracing::warn!(commitment = %proof.commitment(), "proof holder does not match registration");
        return Err(VerifyError::ProofRejected {
            reason: "holder binding does not match registration record".to_string(),
        });
    }

    let statement = PublicStatement {
        circuit: proof.claim().circuit_name().to_string(),
        commitment: record.commitment,
        holder: record.holder,
        claim: proof.claim().clone(),
    };

    match provider.verify(&statement, proof.artifact())? {
        true => {
            tracing::info!(
                commitment = %proof.commitment(),
                circuit = %statement.circuit,
                "proof verified"
            );
            Ok(())
        }
        false => Err(VerifyError::ProofRejected {
            reason: format!("artifact does not satisfy circuit {}", statement.circuit),
        }),
    }
}

/// Outcome of a fallback lookup. Never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackDecision {
    /// The commitment matched the verifier's own session and the
    /// requested claim re-evaluated true against the session attributes.
    ClaimValidated,
    /// The commitment is known to the local ledger, but no claim could
    /// be evaluated.
    CommitmentKnown,
}

impl FallbackDecision {
    /// Always `false`: a fallback decision never substitutes for an
    /// authenticated proof check.
    pub fn is_authoritative(&self) -> bool {
        false
    }
}

/// Resolve a presented commitment string without the proof
/// infrastructure.
///
/// The string is validated against the strict interchange grammar before
/// any ledger or session is consulted. A commitment known to neither the
/// local ledger nor the current session is rejected — an unknown
/// commitment is never assumed valid.
///
/// If the commitment matches the verifier's own session and a claim was
/// requested, the claim is re-evaluated against the session's attributes;
/// a false claim is [`VerifyError::PredicateUnsatisfied`], never a
/// degraded "valid".
pub fn verify_fallback(
    presented: &str,
    claim: Option<&PredicateClaim>,
    ledger: &FallbackLedger,
    session: Option<&HolderSession>,
) -> Result<FallbackDecision, VerifyError> {
    let commitment =
        Commitment::parse_hex(presented).map_err(|e| VerifyError::InvalidFormat(e.to_string()))?;

    let session_match = session
        .map(|s| s.commitment().ct_eq(&commitment))
        .unwrap_or(false);
    let ledger_match = ledger.contains(&commitment);

    if !session_match && !ledger_match {
        tracing::warn!(%commitment, "fallback lookup found no local record");
        return Err(VerifyError::UnknownCommitment {
            commitment: commitment.to_hex(),
        });
    }

    if session_match {
        if let (Some(claim), Some(session)) = (claim, session) {
            let witness = session.witness_for(claim);
            if !claim.holds(&witness) {
                return Err(VerifyError::PredicateUnsatisfied {
                    circuit: claim.circuit_name().to_string(),
                });
            }
            tracing::info!(%commitment, circuit = claim.circuit_name(), "fallback claim validated (non-authoritative)");
            return Ok(FallbackDecision::ClaimValidated);
        }
    }

    tracing::info!(%commitment, "fallback membership confirmed (non-authoritative)");
    Ok(FallbackDecision::CommitmentKnown)
}
