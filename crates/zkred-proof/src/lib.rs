//! # zkred-proof — Predicate Proof Engine
//!
//! Turns a holder's secret and private attributes into registered,
//! ledger-anchored commitments and targeted predicate proofs:
//!
//! - **[`PredicateClaim`]** — typed, parameterized assertions
//!   (age ≥ N, country = C, degree level ≥ L, years since graduation ≤ N,
//!   ownership) with public parameters only.
//! - **[`ClaimWitness`]** — the private comparison value drawn from the
//!   attribute set; never serialized.
//! - **[`CredentialRegistry`]** — append-only map from commitment to
//!   [`RegistrationRecord`]; a commitment registers exactly once.
//! - **[`ProofProvider`]** — the external circuit-runtime capability,
//!   with a deterministic [`MockProofProvider`] for local simulation.
//! - **[`ProofEngine`]** — the operations: `register` plus one
//!   `prove_*` per predicate.
//!
//! ## Fail-Closed Invariant
//!
//! A false predicate never yields a returned [`Proof`]. The result type
//! has exactly two useful outcomes — a proof, or
//! [`ProofError::PredicateUnsatisfied`] — so no code path can construct a
//! "proof of a false claim". A verifier never inspects a boolean inside
//! an artifact; non-existence of a proof is the only failure signal.
//!
//! ## Credential Lifecycle
//!
//! `UNREGISTERED → REGISTERED` (via [`ProofEngine::register`], one-way,
//! no deregistration) followed by any number of independent,
//! non-state-changing proof calls.

pub mod claim;
pub mod engine;
pub mod error;
pub mod proof;
pub mod provider;
pub mod registry;

// Re-export primary types.
pub use claim::{ClaimWitness, PredicateClaim};
pub use engine::ProofEngine;
pub use error::ProofError;
pub use proof::{Proof, ProofArtifact};
pub use provider::{
    MockProofProvider, ProofProvider, ProviderError, PublicStatement, UnreachableProvider,
};
pub use registry::{CredentialRegistry, RegistrationRecord};
