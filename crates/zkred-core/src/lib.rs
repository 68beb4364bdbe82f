//! # zkred-core — Foundational Types for Private Credential Commitments
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace:
//!
//! - **[`CredentialSecret`]** — a 32-byte holder-only secret, zeroized on
//!   drop, never serialized.
//! - **[`Commitment`]** — the one-way SHA-256 binding digest published in
//!   place of the attributes themselves, with the strict
//!   `0x` + 64-lowercase-hex interchange format used at every process
//!   boundary.
//! - **[`AttributeSet`]** and **[`DegreeLevel`]** — the holder's private
//!   attribute data. Deliberately not `Serialize`: attributes must never
//!   leave the holder's process in clear.
//! - **[`HolderAddress`]** — the public identifier bound into every
//!   registration and proof.
//!
//! ## Security Invariant
//!
//! Canonical commitment derivation hashes **only** the secret
//! ([`Commitment::derive`]), so no attribute can leak even by accident of
//! implementation. The attribute-folding form
//! ([`Commitment::derive_with_attributes`]) exists solely for local
//! simulation and is never used on the authenticated path.

pub mod address;
pub mod attributes;
pub mod commitment;
pub mod error;
pub mod secret;

pub(crate) mod hexfmt;

// Re-export primary types.
pub use address::HolderAddress;
pub use attributes::{AttributeSet, DegreeLevel};
pub use commitment::{Commitment, COMMITMENT_HEX_LEN, COMMITMENT_LEN};
pub use error::CoreError;
pub use secret::{CredentialSecret, SECRET_LEN};
