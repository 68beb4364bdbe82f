//! # Credential Registry
//!
//! The ledger-resident registration records: an append-only map from
//! commitment to [`RegistrationRecord`]. A record is created exactly once
//! per commitment and never deleted or mutated.
//!
//! Registration is **not** idempotent by retry: the write also binds
//! fee-spending side effects, so a second identical call is rejected with
//! [`ProofError::DuplicateRegistration`] rather than silently accepted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zkred_core::{Commitment, HolderAddress};

use crate::error::ProofError;

/// One immutable ledger-resident registration.
///
/// Maps a commitment to the holder address and the verifier instance that
/// will serve proofs for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// The registered commitment.
    pub commitment: Commitment,
    /// The holder address bound at registration time.
    pub holder: HolderAddress,
    /// Reference to the verifier instance serving this credential.
    pub verifier_instance: Uuid,
    /// When the registration was finalized.
    pub registered_at: DateTime<Utc>,
}

/// Append-only store of registration records, keyed by commitment.
///
/// Writes are check-then-insert under a single write lock; reads never
/// block other readers.
#[derive(Debug, Default)]
pub struct CredentialRegistry {
    records: RwLock<HashMap<Commitment, RegistrationRecord>>,
}

impl CredentialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commitment for a holder.
    ///
    /// Fails with [`ProofError::DuplicateRegistration`] if the commitment
    /// is already present; the stored record is left unchanged.
    pub fn register(
        &self,
        commitment: Commitment,
        holder: HolderAddress,
    ) -> Result<RegistrationRecord, ProofError> {
        let mut records = self.records.write();
        if records.contains_key(&commitment) {
            return Err(ProofError::DuplicateRegistration {
                commitment: commitment.to_hex(),
            });
        }
        let record = RegistrationRecord {
            commitment,
            holder,
            verifier_instance: Uuid::new_v4(),
            registered_at: Utc::now(),
        };
        records.insert(commitment, record.clone());
        Ok(record)
    }

    /// Look up the record for a commitment.
    pub fn get(&self, commitment: &Commitment) -> Option<RegistrationRecord> {
        self.records.read().get(commitment).cloned()
    }

    /// Whether a commitment is registered.
    pub fn contains(&self, commitment: &Commitment) -> bool {
        self.records.read().contains_key(commitment)
    }

    /// Number of registered commitments.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
