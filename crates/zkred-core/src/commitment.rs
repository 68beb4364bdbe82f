//! # Commitment Derivation
//!
//! Derives the binding, one-way commitment that a holder publishes in
//! place of their attributes.
//!
//! Two derivation modes exist:
//!
//! - **Canonical** ([`Commitment::derive`]): `SHA-256(secret)`. Binds only
//!   the secret, so no attribute can ever leak through the digest. This is
//!   the formula used on the authenticated registration path.
//! - **Legacy/simulation** ([`Commitment::derive_with_attributes`]):
//!   `SHA-256(attribute_string ‖ secret)`. Folds in the textual attribute
//!   encoding for local-only matching. Never used where the commitment
//!   crosses a trust boundary.
//!
//! ## Interchange Format
//!
//! Wherever a commitment crosses a process or network edge it is the
//! strict string `0x` + 64 lowercase hex characters (66 characters
//! total). [`Commitment::parse_hex`] accepts exactly that grammar.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::attributes::AttributeSet;
use crate::error::CoreError;
use crate::hexfmt;
use crate::secret::CredentialSecret;

/// Length of a commitment in bytes.
pub const COMMITMENT_LEN: usize = 32;

/// Length of the hex interchange form, including the `0x` prefix.
pub const COMMITMENT_HEX_LEN: usize = 66;

/// A 32-byte one-way binding digest of a credential secret.
///
/// Identical inputs always yield the identical commitment; recovering the
/// secret or attributes from the commitment alone is computationally
/// infeasible (SHA-256 preimage resistance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    /// Canonical derivation: `SHA-256(secret)`.
    ///
    /// Hashes only the secret so that no attribute can leak even by
    /// accident of implementation.
    pub fn derive(secret: &CredentialSecret) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Legacy/simulation derivation: `SHA-256(attribute_string ‖ secret)`.
    ///
    /// Matches the local simulation flow where the commitment also folds
    /// in the canonical textual encoding of the attribute set. Not used
    /// on the authenticated path.
    pub fn derive_with_attributes(secret: &CredentialSecret, attrs: &AttributeSet) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(attrs.canonical_string().as_bytes());
        hasher.update(secret.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Construct a commitment from raw digest bytes.
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// The interchange form: `0x` + 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hexfmt::encode_prefixed(&self.0)
    }

    /// Parse the strict interchange form.
    ///
    /// Accepts exactly `0x` + 64 lowercase hex characters. Anything
    /// shorter, longer, unprefixed, uppercase, or non-hex is rejected
    /// with [`CoreError::InvalidFormat`] before any lookup is attempted.
    pub fn parse_hex(s: &str) -> Result<Self, CoreError> {
        hexfmt::decode_prefixed(s).map(Self)
    }

    /// Constant-time equality, for comparing a freshly re-derived
    /// commitment against a registered one.
    pub fn ct_eq(&self, other: &Commitment) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Commitment::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
