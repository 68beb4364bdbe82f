//! # Balance / Sign / Submit Pipeline
//!
//! A full submission is two instances of the same signing routine: the
//! base transaction signs under the `proof` marker, and the balancing
//! transaction — produced only when fees are covered from a different or
//! supplementary source — signs under `pre-proof`, since it has not yet
//! acquired its own proof attachment. Both passes use the same holder
//! signing capability. The signed recipe is then handed to the external
//! submit/balance capability for finalization.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::TxError;
use crate::intent::{CallPayload, Intent, ProofMarker, UnshieldedOffer, UtxoSpend};
use crate::signer::IntentSigner;
use crate::transaction::{sign_all_intents, Transaction};

/// A possibly two-part transaction: the base call plus an optional
/// balancing transaction covering fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// The transaction carrying the registration or proof call.
    pub base: Transaction,
    /// Fee-covering transaction, present only when fees come from a
    /// different or supplementary source.
    pub balancing: Option<Transaction>,
}

/// The finalized handle returned by the submit capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedTx {
    /// Submission identifier.
    pub tx_id: Uuid,
    /// Hash of the finalized transaction.
    pub tx_hash: String,
    /// For registrations, the address of the new registration record's
    /// verifier instance.
    pub contract_address: Option<String>,
}

/// The external submit/balance capability.
pub trait SubmitCapability {
    /// Pair the base transaction with a balancing transaction if fee
    /// coverage requires one.
    fn balance(&self, base: Transaction) -> Result<Recipe, TxError>;

    /// Finalize a fully signed recipe, returning the transaction handle.
    fn submit(&self, recipe: &Recipe) -> Result<FinalizedTx, TxError>;
}

/// Run both signing passes over a recipe.
///
/// Base transaction first, under [`ProofMarker::Proof`]; then the
/// balancing transaction, if present, under [`ProofMarker::PreProof`].
pub fn sign_recipe<S: IntentSigner>(recipe: Recipe, signer: &S) -> Result<Recipe, TxError> {
    tracing::debug!("signing base transaction");
    let base = sign_all_intents(recipe.base, signer, ProofMarker::Proof)?;

    let balancing = match recipe.balancing {
        Some(tx) => {
            tracing::debug!("signing balancing transaction");
            Some(sign_all_intents(tx, signer, ProofMarker::PreProof)?)
        }
        None => None,
    };

    Ok(Recipe { base, balancing })
}

/// Balance, sign, and submit a base transaction in one call.
pub fn submit_transaction<S: IntentSigner, C: SubmitCapability>(
    base: Transaction,
    signer: &S,
    capability: &C,
) -> Result<FinalizedTx, TxError> {
    let recipe = capability.balance(base)?;
    let signed = sign_recipe(recipe, signer)?;
    let finalized = capability.submit(&signed)?;
    tracing::info!(tx_hash = %finalized.tx_hash, "transaction submitted");
    Ok(finalized)
}

/// A local-ledger stand-in for the network submit capability.
///
/// Balances against an optional in-memory fee source and finalizes by
/// hashing the signed recipe. Used by the simulation flows and the
/// integration tests; the real capability is the wallet/network stack.
#[derive(Debug, Default)]
pub struct LocalLedgerSimulator {
    fee_inputs: Vec<UtxoSpend>,
    submitted: RwLock<Vec<String>>,
}

impl LocalLedgerSimulator {
    /// A simulator whose transactions need no separate fee coverage.
    pub fn new() -> Self {
        Self::default()
    }

    /// A simulator that covers fees from the given inputs, producing a
    /// balancing transaction on every `balance` call.
    pub fn with_fee_source(fee_inputs: Vec<UtxoSpend>) -> Self {
        Self {
            fee_inputs,
            submitted: RwLock::new(Vec::new()),
        }
    }

    /// Hashes of every finalized submission, in order.
    pub fn submitted_hashes(&self) -> Vec<String> {
        self.submitted.read().clone()
    }

    fn require_fully_signed(recipe: &Recipe) -> Result<(), TxError> {
        let transactions = std::iter::once(&recipe.base).chain(recipe.balancing.iter());
        for tx in transactions {
            for (segment, intent) in tx.segments() {
                let offers = [&intent.guaranteed_offer, &intent.fallible_offer];
                for offer in offers.into_iter().flatten() {
                    offer.check_shape()?;
                    if !offer.inputs.is_empty() && !offer.is_fully_signed() {
                        return Err(TxError::SubmissionFailed(format!(
                            "segment {segment} carries an unsigned offer input"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl SubmitCapability for LocalLedgerSimulator {
    fn balance(&self, base: Transaction) -> Result<Recipe, TxError> {
        let balancing = if self.fee_inputs.is_empty() {
            None
        } else {
            let call = CallPayload {
                operation: "balance_fees".to_string(),
                args: serde_json::json!({ "inputs": self.fee_inputs.len() }),
            };
            let intent = Intent::new(call)
                .with_guaranteed_offer(UnshieldedOffer::new(self.fee_inputs.clone()));
            let mut tx = Transaction::new();
            tx.push_segment(intent);
            Some(tx)
        };
        Ok(Recipe { base, balancing })
    }

    fn submit(&self, recipe: &Recipe) -> Result<FinalizedTx, TxError> {
        Self::require_fully_signed(recipe)?;

        let bytes = serde_json::to_vec(recipe)
            .map_err(|e| TxError::SubmissionFailed(format!("recipe encoding: {e}")))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        let tx_hash = format!(
            "0x{}",
            digest.iter().map(|b| format!("{b:02x}")).collect::<String>()
        );

        let is_registration = recipe
            .base
            .segments()
            .first()
            .map(|(_, intent)| intent.call.operation == "register_credential")
            .unwrap_or(false);
        let contract_address = if is_registration {
            let mut hasher = Sha256::new();
            hasher.update(&digest);
            hasher.update(b"contract");
            let addr = hasher.finalize();
            Some(format!(
                "0x{}",
                addr.iter().map(|b| format!("{b:02x}")).collect::<String>()
            ))
        } else {
            None
        };

        self.submitted.write().push(tx_hash.clone());
        Ok(FinalizedTx {
            tx_id: Uuid::new_v4(),
            tx_hash,
            contract_address,
        })
    }
}
