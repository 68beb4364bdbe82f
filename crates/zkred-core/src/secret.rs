//! # Credential Secret
//!
//! The holder's 32-byte random secret. It is the sole input the canonical
//! commitment binds to, which makes deterministic recomputation possible
//! from the secret alone.
//!
//! ## Security Invariant
//!
//! The secret is never transmitted in clear and never serialized — this
//! type deliberately implements neither `Serialize` nor `Display`, and its
//! `Debug` output is redacted. Memory is zeroized on drop.

use rand_core::{OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CoreError;

/// Length of a credential secret in bytes.
pub const SECRET_LEN: usize = 32;

/// A fixed-length random value known only to the holder.
///
/// Created or loaded once per holder session and held only in memory.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CredentialSecret([u8; SECRET_LEN]);

impl CredentialSecret {
    /// Generate a fresh secret from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Construct a secret from exactly 32 bytes.
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct a secret from a byte slice, rejecting any length other
    /// than 32 bytes. Malformed lengths are errors, never padded or
    /// truncated.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != SECRET_LEN {
            return Err(CoreError::InvalidSecretLength(bytes.len()));
        }
        let mut out = [0u8; SECRET_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// The raw secret bytes. Only commitment derivation and circuit
    /// witness construction should touch these.
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for CredentialSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialSecret(<redacted>)")
    }
}
