//! # Intent Signing Capability
//!
//! The consumed signing capability: a holder-controlled key producing one
//! signature over a byte payload, with no side effects beyond the
//! signature itself. [`SoftwareSigner`] is the in-process Ed25519
//! implementation; hardware or wallet-backed signers implement the same
//! trait.

use ed25519_dalek::{Signer as _, SigningKey, VerifyingKey};
use rand_core::OsRng;
use thiserror::Error;

use crate::intent::SignatureBytes;

/// Errors from the signing capability.
#[derive(Error, Debug)]
pub enum SignError {
    /// The signing backend refused or failed to sign.
    #[error("signing capability failed: {0}")]
    Failed(String),
}

/// A holder-controlled signing function over a byte payload.
pub trait IntentSigner {
    /// Produce one signature for the payload.
    fn sign(&self, payload: &[u8]) -> Result<SignatureBytes, SignError>;
}

/// In-process Ed25519 signer.
pub struct SoftwareSigner {
    key: SigningKey,
}

impl SoftwareSigner {
    /// Generate a fresh signing key from the operating system RNG.
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Construct a signer from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    /// The public verification key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }
}

impl IntentSigner for SoftwareSigner {
    fn sign(&self, payload: &[u8]) -> Result<SignatureBytes, SignError> {
        let signature = self.key.sign(payload);
        Ok(SignatureBytes::from_bytes(signature.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};

    #[test]
    fn software_signer_is_deterministic_per_key() {
        let signer = SoftwareSigner::from_seed([0x31u8; 32]);
        let a = signer.sign(b"payload").unwrap();
        let b = signer.sign(b"payload").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_payloads_produce_different_signatures() {
        let signer = SoftwareSigner::from_seed([0x31u8; 32]);
        let a = signer.sign(b"payload-a").unwrap();
        let b = signer.sign(b"payload-b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn signatures_verify_against_the_public_key() {
        let signer = SoftwareSigner::from_seed([0x31u8; 32]);
        let sig = signer.sign(b"verify me").unwrap();
        let signature = Signature::from_bytes(sig.as_bytes());
        signer
            .verifying_key()
            .verify(b"verify me", &signature)
            .unwrap();
    }

    #[test]
    fn generated_keys_differ() {
        let a = SoftwareSigner::generate();
        let b = SoftwareSigner::generate();
        assert_ne!(
            a.verifying_key().to_bytes(),
            b.verifying_key().to_bytes()
        );
    }
}
