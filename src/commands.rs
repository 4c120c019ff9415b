//! Frontend-facing transaction commands
//!
//! Two-step flow so the signer can live elsewhere (threshold signing
//! service, hardware device):
//!
//! 1. `prepare_kaspa_tx`: UTXOs + destination + change → unsigned tx and
//!    one ECDSA sighash per input.
//! 2. `finalize_kaspa_tx`: unsigned tx + signatures (hex, input order) →
//!    { txid, submission payload, spent outpoints }.
//!
//! Errors are flattened to strings for the frontend.

use serde::{Deserialize, Serialize};

use crate::codec::{bytes_to_hex, hex_to_bytes};
use crate::sighash::{calculate_all_sighashes, SigHashType};
use crate::signing::apply_verified_signatures;
use crate::submission::{to_submission, SubmitTransactionRequest};
use crate::transaction::{BuildTransactionParams, Transaction, TransactionBuilder, TxBuildConfig, UtxoRef};
use crate::txid::calculate_transaction_id;

// ---------------------------------------------------------------------------
// Serde types matching the TypeScript interfaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareKaspaTxRequest {
    #[serde(flatten)]
    pub params: BuildTransactionParams,
    #[serde(default)]
    pub config: TxBuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedKaspaTransaction {
    pub transaction: Transaction,
    /// Hex ECDSA sighash per input, in input order
    pub sighashes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeKaspaTxRequest {
    pub transaction: Transaction,
    /// Hex 64-byte compact signatures, in input order
    pub signatures: Vec<String>,
    /// Hex 33-byte compressed key the signatures must verify against
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedKaspaTransaction {
    pub txid: String,
    pub submission: SubmitTransactionRequest,
    pub spent_outpoints: Vec<UtxoRef>,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Build an unsigned transaction and the sighashes the signer must sign.
pub fn prepare_kaspa_tx(request: PrepareKaspaTxRequest) -> Result<PreparedKaspaTransaction, String> {
    let builder = TransactionBuilder::new(request.config);
    let transaction = builder
        .build_unsigned_transaction(&request.params)
        .map_err(|e| e.to_string())?;

    let sighashes = calculate_all_sighashes(&transaction, SigHashType::ALL)
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| bytes_to_hex(h))
        .collect();

    Ok(PreparedKaspaTransaction {
        transaction,
        sighashes,
    })
}

/// Attach verified signatures, compute the txid and the broadcast payload.
pub fn finalize_kaspa_tx(request: FinalizeKaspaTxRequest) -> Result<FinalizedKaspaTransaction, String> {
    let signatures = request
        .signatures
        .iter()
        .map(|s| hex_to_bytes(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid signature: {}", e))?;
    let public_key = hex_to_bytes(&request.public_key)
        .map_err(|e| format!("Invalid public key: {}", e))?;

    let signed = apply_verified_signatures(&request.transaction, &signatures, &public_key)
        .map_err(|e| e.to_string())?;
    let txid = calculate_transaction_id(&signed).map_err(|e| e.to_string())?;

    log::info!(
        "Finalized Kaspa transaction {} ({} inputs, {} outputs)",
        txid,
        signed.inputs.len(),
        signed.outputs.len()
    );

    Ok(FinalizedKaspaTransaction {
        txid,
        submission: to_submission(&signed),
        spent_outpoints: signed.spent_outpoints(),
    })
}
