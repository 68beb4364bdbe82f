//! # Intent Segments and Offers
//!
//! An intent is one addressable unit of a transaction: the registration
//! or proof-submission call, plus optional value-transfer offers. The
//! **guaranteed** offer always applies; the **fallible** offer applies
//! only if the whole transaction commits.
//!
//! Intents are constructed in a provisional proof-state that cannot
//! accept signatures. Before signing, each intent is re-tagged from its
//! serialized bytes as *signature pending / {marker} / pre-binding*
//! ([`Intent::retag`]) — the promotion step the signing routine requires.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use zkred_core::HolderAddress;
use zkred_proof::Proof;

use crate::error::TxError;

/// Length of a signature in bytes (Ed25519).
pub const SIGNATURE_LEN: usize = 64;

/// A detached 64-byte signature over a segment's signable payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureBytes([u8; SIGNATURE_LEN]);

impl SignatureBytes {
    /// Construct from exactly 64 bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct from a slice, rejecting any length other than 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TxError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(TxError::InvalidSignatureLength(bytes.len()));
        }
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Lowercase hex form (128 characters, no prefix).
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl Serialize for SignatureBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SignatureBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.len() != SIGNATURE_LEN * 2 {
            return Err(serde::de::Error::custom(format!(
                "expected {} hex characters, got {}",
                SIGNATURE_LEN * 2,
                s.len()
            )));
        }
        let mut out = [0u8; SIGNATURE_LEN];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hex = std::str::from_utf8(chunk).map_err(serde::de::Error::custom)?;
            out[i] = u8::from_str_radix(hex, 16).map_err(serde::de::Error::custom)?;
        }
        Ok(Self(out))
    }
}

/// One value-transfer input of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoSpend {
    /// Transfer value in the smallest unit.
    pub value: u64,
    /// Owner of the spent output.
    pub owner: HolderAddress,
}

/// An unshielded value-transfer offer: an ordered input list and a
/// parallel, possibly partially populated signature list.
///
/// Partially populated signatures support multi-party pre-signed offers:
/// signing fills only the empty positions and never overwrites an
/// existing signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnshieldedOffer {
    /// Ordered value-transfer inputs.
    pub inputs: Vec<UtxoSpend>,
    /// Parallel signature slots, one per input.
    pub signatures: Vec<Option<SignatureBytes>>,
}

impl UnshieldedOffer {
    /// Create an offer with all signature slots empty.
    pub fn new(inputs: Vec<UtxoSpend>) -> Self {
        let signatures = vec![None; inputs.len()];
        Self { inputs, signatures }
    }

    /// Pre-populate one signature slot (multi-party flows).
    pub fn with_signature(mut self, position: usize, signature: SignatureBytes) -> Self {
        if position < self.signatures.len() {
            self.signatures[position] = Some(signature);
        }
        self
    }

    /// Check the parallel-list invariant.
    pub fn check_shape(&self) -> Result<(), TxError> {
        if self.inputs.len() != self.signatures.len() {
            return Err(TxError::OfferShapeMismatch {
                inputs: self.inputs.len(),
                signatures: self.signatures.len(),
            });
        }
        Ok(())
    }

    /// Fill every empty signature slot with `signature`, leaving existing
    /// signatures untouched.
    pub(crate) fn fill_missing(&mut self, signature: &SignatureBytes) {
        for slot in &mut self.signatures {
            if slot.is_none() {
                *slot = Some(*signature);
            }
        }
    }

    /// Whether every input position carries a signature.
    pub fn is_fully_signed(&self) -> bool {
        !self.signatures.is_empty() && self.signatures.iter().all(Option::is_some)
    }
}

/// The proof-attachment marker a transaction is signed under.
///
/// The base transaction of a recipe signs under `proof`; a balancing
/// transaction has not yet acquired its own proof attachment and signs
/// under `pre-proof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofMarker {
    /// Proof attachment present.
    #[serde(rename = "proof")]
    Proof,
    /// Proof attachment not yet acquired.
    #[serde(rename = "pre-proof")]
    PreProof,
}

impl std::fmt::Display for ProofMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofMarker::Proof => write!(f, "proof"),
            ProofMarker::PreProof => write!(f, "pre-proof"),
        }
    }
}

/// Proof-state of an intent.
///
/// Intents arrive `Provisional` and cannot accept signatures until
/// promoted to `SignaturePending` by [`Intent::retag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofSlot {
    /// Initial state at construction; signatures are not accepted.
    Provisional,
    /// Promoted for signing under the given marker.
    SignaturePending(ProofMarker),
}

/// Binding state of an intent. Only `PreBinding` intents are signable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingState {
    /// Not yet bound to a finalized transaction.
    PreBinding,
}

/// The contract call an intent carries: a registration or a
/// proof-submission operation with its public arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallPayload {
    /// Operation name (circuit entry point).
    pub operation: String,
    /// Public arguments as canonical JSON.
    pub args: serde_json::Value,
}

impl CallPayload {
    /// A `register_credential(commitment, holder)` call.
    pub fn register(commitment: &zkred_core::Commitment, holder: &HolderAddress) -> Self {
        Self {
            operation: "register_credential".to_string(),
            args: serde_json::json!({
                "commitment": commitment.to_hex(),
                "holder": holder.to_hex(),
            }),
        }
    }

    /// A proof-submission call carrying a generated predicate proof.
    pub fn submit_proof(proof: &Proof) -> Self {
        Self {
            operation: proof.claim().circuit_name().to_string(),
            args: serde_json::json!({
                "commitment": proof.commitment().to_hex(),
                "holder": proof.holder().to_hex(),
                "claim": proof.claim(),
                "artifact": proof.artifact(),
            }),
        }
    }
}

/// One intent segment of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// The registration or proof-submission call.
    pub call: CallPayload,
    /// Offer applied unconditionally.
    pub guaranteed_offer: Option<UnshieldedOffer>,
    /// Offer applied only if the whole transaction commits.
    pub fallible_offer: Option<UnshieldedOffer>,
    /// Proof-state marker.
    pub proof_slot: ProofSlot,
    /// Binding-state marker.
    pub binding: BindingState,
}

impl Intent {
    /// Construct a provisional intent around a call. Offers are optional
    /// per segment and attached afterwards.
    pub fn new(call: CallPayload) -> Self {
        Self {
            call,
            guaranteed_offer: None,
            fallible_offer: None,
            proof_slot: ProofSlot::Provisional,
            binding: BindingState::PreBinding,
        }
    }

    /// Attach a guaranteed offer.
    pub fn with_guaranteed_offer(mut self, offer: UnshieldedOffer) -> Self {
        self.guaranteed_offer = Some(offer);
        self
    }

    /// Attach a fallible offer.
    pub fn with_fallible_offer(mut self, offer: UnshieldedOffer) -> Self {
        self.fallible_offer = Some(offer);
        self
    }

    /// Canonical serialized form of the intent.
    pub fn serialize_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Re-tag an intent from its serialized bytes as
    /// *signature pending / {marker} / pre-binding*.
    ///
    /// This promotion is required before signatures can be attached; the
    /// provisional proof-state cannot accept them directly. Malformed
    /// bytes are a fatal [`serde_json::Error`] for the signing pass.
    pub fn retag(bytes: &[u8], marker: ProofMarker) -> Result<Self, serde_json::Error> {
        let mut intent: Intent = serde_json::from_slice(bytes)?;
        intent.proof_slot = ProofSlot::SignaturePending(marker);
        intent.binding = BindingState::PreBinding;
        Ok(intent)
    }

    /// Whether this intent can accept signatures.
    pub fn accepts_signatures(&self) -> bool {
        matches!(self.proof_slot, ProofSlot::SignaturePending(_))
    }

    /// The segment-specific signable payload: a domain tag, the segment
    /// index (big-endian), and the full serialized intent content.
    pub fn signature_data(&self, segment: u16) -> Result<Vec<u8>, serde_json::Error> {
        let body = self.serialize_bytes()?;
        let mut payload = Vec::with_capacity(body.len() + 18);
        payload.extend_from_slice(b"zkred/intent-sig/v1:");
        payload.extend_from_slice(&segment.to_be_bytes());
        payload.extend_from_slice(&body);
        Ok(payload)
    }
}
