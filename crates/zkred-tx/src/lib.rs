//! # zkred-tx — Transaction Assembly & Signing Pipeline
//!
//! Carries a registration or proof-submission call from the proof engine
//! to the ledger:
//!
//! - **[`Intent`]** — one addressable unit of a transaction, holding the
//!   call payload plus optional guaranteed and fallible unshielded
//!   offers, each an ordered list of value-transfer inputs with a
//!   parallel, possibly partially populated signature list.
//! - **[`Transaction`]** — an explicit insertion-ordered list of
//!   `(segment index, intent)` pairs. Iteration order is the insertion
//!   order of the segments, an explicit and tested contract — never a
//!   re-sorted map order.
//! - **[`sign_all_intents`]** — the segment-indexed signing routine, run
//!   once over the base transaction with the `proof` marker and once
//!   over the balancing transaction (if any) with `pre-proof`.
//! - **[`IntentSigner`]** / **[`SubmitCapability`]** — the consumed
//!   capabilities: a holder-controlled signing function over a byte
//!   payload, and the external balance/submit service that returns a
//!   finalized handle.
//!
//! ## Concurrency
//!
//! Signing consumes its transaction and returns a new value; there is no
//! shared-state mutation. Callers keep at most one in-flight
//! registration/proof/signing request per wallet session.

pub mod error;
pub mod intent;
pub mod pipeline;
pub mod signer;
pub mod transaction;

// Re-export primary types.
pub use error::TxError;
pub use intent::{
    BindingState, CallPayload, Intent, ProofMarker, ProofSlot, SignatureBytes, UnshieldedOffer,
    UtxoSpend,
};
pub use pipeline::{sign_recipe, submit_transaction, FinalizedTx, LocalLedgerSimulator, Recipe, SubmitCapability};
pub use signer::{IntentSigner, SignError, SoftwareSigner};
pub use transaction::{sign_all_intents, Transaction};
