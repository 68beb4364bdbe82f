//! # Transaction Pipeline Error Types
//!
//! A failing segment aborts the whole signing pass — no partial
//! submission is ever attempted past the failing segment.

use thiserror::Error;

/// Errors from transaction assembly, signing, and submission.
#[derive(Error, Debug)]
pub enum TxError {
    /// The signing capability errored. Aborts the whole submission.
    #[error("signing failed on segment {segment}: {reason}")]
    SigningFailure {
        /// Segment index being signed when the failure occurred.
        segment: u16,
        /// Reason reported by the signing capability.
        reason: String,
    },

    /// A segment's serialized intent could not be deserialized during
    /// the re-tagging step. Fatal for the whole pass.
    #[error("malformed intent bytes on segment {segment}: {reason}")]
    DeserializationFailure {
        /// Segment index whose intent bytes were malformed.
        segment: u16,
        /// Decoder diagnostic.
        reason: String,
    },

    /// A segment index was inserted twice into one transaction.
    #[error("duplicate segment index: {0}")]
    DuplicateSegment(u16),

    /// A signature had the wrong byte length.
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// An offer's signature list did not match its input list.
    #[error("offer signature list length {signatures} does not match {inputs} inputs")]
    OfferShapeMismatch {
        /// Number of value-transfer inputs.
        inputs: usize,
        /// Number of signature slots.
        signatures: usize,
    },

    /// The submit/balance capability rejected the transaction.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_failure_names_segment() {
        let err = TxError::SigningFailure {
            segment: 3,
            reason: "key locked".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains("key locked"));
    }

    #[test]
    fn deserialization_failure_display() {
        let err = TxError::DeserializationFailure {
            segment: 0,
            reason: "unexpected end of input".to_string(),
        };
        assert!(format!("{err}").contains("unexpected end of input"));
    }

    #[test]
    fn offer_shape_mismatch_display() {
        let err = TxError::OfferShapeMismatch {
            inputs: 3,
            signatures: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }
}
