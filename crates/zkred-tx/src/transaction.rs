//! # Transactions and the Segment-Indexed Signing Routine
//!
//! A transaction is an explicit, insertion-ordered list of
//! `(segment index, intent)` pairs. Processing order is the insertion
//! order of the segments — an explicit contract, never a numeric re-sort
//! of the indices.
//!
//! [`sign_all_intents`] owns its transaction for the duration of one call
//! and returns a new transaction value, eliminating aliasing concerns
//! with shared segment maps.

use serde::{Deserialize, Serialize};

use crate::error::TxError;
use crate::intent::{Intent, ProofMarker};
use crate::signer::IntentSigner;

/// A container of intent segments for one registration or
/// proof-submission call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    segments: Vec<(u16, Intent)>,
}

impl Transaction {
    /// Create an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a segment under an explicit index.
    ///
    /// The index is assigned at construction time and duplicate indices
    /// are rejected. Insertion order is the processing order.
    pub fn insert_segment(&mut self, index: u16, intent: Intent) -> Result<(), TxError> {
        if self.segments.iter().any(|(i, _)| *i == index) {
            return Err(TxError::DuplicateSegment(index));
        }
        self.segments.push((index, intent));
        Ok(())
    }

    /// Append a segment under the next unused index, returning it.
    pub fn push_segment(&mut self, intent: Intent) -> u16 {
        let index = self
            .segments
            .iter()
            .map(|(i, _)| *i + 1)
            .max()
            .unwrap_or(0);
        self.segments.push((index, intent));
        index
    }

    /// The segments in insertion order.
    pub fn segments(&self) -> &[(u16, Intent)] {
        &self.segments
    }

    /// Look up a segment by index.
    pub fn get(&self, index: u16) -> Option<&Intent> {
        self.segments
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, intent)| intent)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the transaction carries no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Sign every intent segment of a transaction.
///
/// For each segment in insertion order:
///
/// 1. re-tag the intent from its serialized bytes as
///    *signature pending / {marker} / pre-binding* — malformed bytes are
///    fatal for the whole pass;
/// 2. compute the segment-specific signable payload and obtain one
///    signature from the signing capability — a signer failure aborts
///    immediately;
/// 3. for the guaranteed and fallible offers independently, fill every
///    empty signature position with that signature, leaving pre-existing
///    signatures untouched;
/// 4. replace the segment's intent with the signed version.
///
/// A transaction with no segments is returned unchanged — that is not an
/// error. On any failure no partially signed transaction is returned.
pub fn sign_all_intents<S: IntentSigner>(
    tx: Transaction,
    signer: &S,
    marker: ProofMarker,
) -> Result<Transaction, TxError> {
    tracing::debug!(%marker, segments = tx.len(), "signing transaction intents");
    if tx.is_empty() {
        tracing::warn!("no intents to sign");
        return Ok(tx);
    }

    let mut signed = Vec::with_capacity(tx.segments.len());
    for (segment, intent) in tx.segments {
        tracing::debug!(segment, "processing intent segment");

        let bytes = intent
            .serialize_bytes()
            .map_err(|e| TxError::DeserializationFailure {
                segment,
                reason: e.to_string(),
            })?;
        let mut retagged =
            Intent::retag(&bytes, marker).map_err(|e| TxError::DeserializationFailure {
                segment,
                reason: e.to_string(),
            })?;

        let payload = retagged
            .signature_data(segment)
            .map_err(|e| TxError::DeserializationFailure {
                segment,
                reason: e.to_string(),
            })?;
        let signature = signer
            .sign(&payload)
            .map_err(|e| TxError::SigningFailure {
                segment,
                reason: e.to_string(),
            })?;

        if let Some(offer) = retagged.fallible_offer.as_mut() {
            offer.fill_missing(&signature);
        }
        if let Some(offer) = retagged.guaranteed_offer.as_mut() {
            offer.fill_missing(&signature);
        }

        signed.push((segment, retagged));
    }

    tracing::info!(%marker, "transaction intents signed");
    Ok(Transaction { segments: signed })
}
