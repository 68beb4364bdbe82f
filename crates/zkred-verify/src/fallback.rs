//! # Fallback Ledger
//!
//! A local, duplicate-suppressing list of commitment hex strings, used
//! only when the authenticated verification path is unreachable.
//! Membership here proves nothing about attributes; it only records that
//! a commitment was published locally at some point.
//!
//! Persistence is a plain JSON array of interchange-form strings. Loading
//! re-validates every entry through the strict commitment grammar, so a
//! tampered or hand-edited file cannot smuggle in malformed entries.

use std::path::Path;

use parking_lot::RwLock;

use zkred_core::Commitment;

use crate::error::VerifyError;

/// Local append-only list of published commitments.
///
/// Entries are stored in interchange form and duplicates are suppressed
/// at publish time.
#[derive(Debug, Default)]
pub struct FallbackLedger {
    entries: RwLock<Vec<String>>,
}

impl FallbackLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commitment locally.
    ///
    /// Returns `true` if the commitment was appended, `false` if it was
    /// already present. Publishing is check-then-append under a single
    /// write lock.
    pub fn publish(&self, commitment: &Commitment) -> bool {
        let hex = commitment.to_hex();
        let mut entries = self.entries.write();
        if entries.contains(&hex) {
            tracing::debug!(%commitment, "commitment already in fallback ledger");
            return false;
        }
        entries.push(hex);
        tracing::info!(%commitment, "commitment published to fallback ledger");
        true
    }

    /// Whether the commitment has been published locally.
    pub fn contains(&self, commitment: &Commitment) -> bool {
        self.entries.read().contains(&commitment.to_hex())
    }

    /// The recorded entries, in publish order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    /// Number of recorded commitments.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Write the ledger to disk as a JSON string array.
    pub fn save_to(&self, path: &Path) -> Result<(), VerifyError> {
        let entries = self.entries.read();
        let json = serde_json::to_string_pretty(&*entries)
            .map_err(|e| VerifyError::Persistence(e.to_string()))?;
        std::fs::write(path, json)?;
        tracing::debug!(entries = entries.len(), path = %path.display(), "fallback ledger saved");
        Ok(())
    }

    /// Load a ledger from a JSON string array on disk.
    ///
    /// Every entry must parse under the strict commitment grammar;
    /// duplicates in the file are collapsed.
    pub fn load_from(path: &Path) -> Result<Self, VerifyError> {
        let json = std::fs::read_to_string(path)?;
        let raw: Vec<String> =
            serde_json::from_str(&json).map_err(|e| VerifyError::Persistence(e.to_string()))?;

        let ledger = Self::new();
        for entry in &raw {
            let commitment = Commitment::parse_hex(entry)
                .map_err(|e| VerifyError::Persistence(format!("bad ledger entry: {e}")))?;
            ledger.publish(&commitment);
        }
        tracing::debug!(entries = ledger.len(), path = %path.display(), "fallback ledger loaded");
        Ok(ledger)
    }
}
