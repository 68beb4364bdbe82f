//! # zkred-verify — Verification Lookup
//!
//! Resolves a presented credential through two paths, tried in priority
//! order:
//!
//! 1. **Authenticated** ([`verify_proof`]): the verifier holds a proof
//!    artifact and checks it against the public registration record and
//!    declared public parameters — no attributes, no secret, no contact
//!    with the holder. Authoritative.
//! 2. **Fallback** ([`verify_fallback`]): used only when the proof
//!    infrastructure is unreachable. The verifier holds a bare commitment
//!    string, which must pass strict format validation before any ledger
//!    is touched, then membership in the local [`FallbackLedger`] and/or
//!    equality with the verifier's own same-session commitment. Every
//!    fallback decision is explicitly non-authoritative, and an unknown
//!    commitment is never assumed valid.

pub mod error;
pub mod fallback;
pub mod lookup;
pub mod session;

// Re-export primary types.
pub use error::VerifyError;
pub use fallback::FallbackLedger;
pub use lookup::{verify_fallback, verify_proof, FallbackDecision};
pub use session::HolderSession;
