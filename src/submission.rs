//! Broadcast payload for the Kaspa `submitTransaction` RPC / REST endpoint.
//!
//! 64-bit integers are rendered as decimal strings so JavaScript callers
//! never round them through a double.

use serde::{Deserialize, Serialize};

use crate::error::{KaspaTxError, Result};
use crate::sighash::SCRIPT_PUBLIC_KEY_VERSION;
use crate::transaction::{Transaction, UtxoRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTransactionRequest {
    pub transaction: RpcTransaction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub version: u16,
    pub inputs: Vec<RpcTransactionInput>,
    pub outputs: Vec<RpcTransactionOutput>,
    pub lock_time: String,
    pub subnetwork_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionInput {
    pub previous_outpoint: UtxoRef,
    pub signature_script: String,
    pub sequence: String,
    pub sig_op_count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransactionOutput {
    pub amount: String,
    pub script_public_key: RpcScriptPublicKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcScriptPublicKey {
    pub script_public_key: String,
    pub version: u16,
}

/// Map a signed transaction to the submission payload. UTXO material
/// stays behind; it is not part of the wire form.
pub fn to_submission(tx: &Transaction) -> SubmitTransactionRequest {
    let inputs = tx
        .inputs
        .iter()
        .map(|input| RpcTransactionInput {
            previous_outpoint: input.previous_outpoint.clone(),
            signature_script: input.signature_script.clone(),
            sequence: input.sequence.to_string(),
            sig_op_count: input.sig_op_count,
        })
        .collect();

    let outputs = tx
        .outputs
        .iter()
        .map(|output| RpcTransactionOutput {
            amount: output.amount.to_string(),
            script_public_key: RpcScriptPublicKey {
                script_public_key: output.script_public_key.clone(),
                version: SCRIPT_PUBLIC_KEY_VERSION,
            },
        })
        .collect();

    SubmitTransactionRequest {
        transaction: RpcTransaction {
            version: tx.version,
            inputs,
            outputs,
            lock_time: tx.lock_time.to_string(),
            subnetwork_id: tx.subnetwork_id.clone(),
        },
    }
}

/// Submission payload as a JSON string, ready for the broadcaster.
pub fn to_submission_json(tx: &Transaction) -> Result<String> {
    serde_json::to_string(&to_submission(tx))
        .map_err(|e| KaspaTxError::Serialization(e.to_string()))
}
