//! Kaspa Transaction Builder
//!
//! Assembles unsigned native transfers from caller-selected UTXOs: one
//! destination output plus an optional change output. Inputs keep the UTXO
//! amount and locking script alongside them because the sighash commits to
//! both, even though neither is part of the input's wire form.

use serde::{Deserialize, Serialize};

use crate::address::{AddressDecoder, AddressPrefix, KaspaAddressDecoder};
use crate::codec::{bytes_to_hex, hex_to_hash};
use crate::error::{KaspaTxError, Result};
use crate::script::address_to_script_public_key;

// ---------------------------------------------------------------------------
// Consensus constants
// ---------------------------------------------------------------------------

pub const TX_VERSION: u16 = 0;
/// Disables relative time locks / replacement for the input.
pub const MAX_SEQUENCE: u64 = u64::MAX;
/// One signature check per P2PK input.
pub const DEFAULT_SIG_OP_COUNT: u8 = 1;
pub const SUBNETWORK_ID_SIZE: usize = 20;
/// Native (ordinary transfer) subnetwork: all zeroes.
pub const NATIVE_SUBNETWORK_ID: [u8; SUBNETWORK_ID_SIZE] = [0u8; SUBNETWORK_ID_SIZE];

// ---------------------------------------------------------------------------
// Serde types matching the TypeScript interfaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoRef {
    /// 32-byte transaction id, hex
    pub transaction_id: String,
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    pub outpoint: UtxoRef,
    pub amount: u64,
    /// Locking script of the output being spent, hex
    pub script_public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInput {
    pub previous_outpoint: UtxoRef,
    /// Hex, empty until signed
    pub signature_script: String,
    pub sequence: u64,
    pub sig_op_count: u8,
    /// Sighash material only
    pub utxo_amount: u64,
    /// Sighash material only, hex
    pub utxo_script_public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    pub amount: u64,
    /// Hex
    pub script_public_key: String,
}

/// An unsigned or signed transaction. Signing only fills
/// `signature_script` on each input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: u16,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u64,
    /// 20 bytes, hex
    pub subnetwork_id: String,
}

impl Transaction {
    pub fn is_fully_signed(&self) -> bool {
        self.inputs.iter().all(|i| !i.signature_script.is_empty())
    }

    pub fn spent_outpoints(&self) -> Vec<UtxoRef> {
        self.inputs
            .iter()
            .map(|i| i.previous_outpoint.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Builder configuration
// ---------------------------------------------------------------------------

/// Caller-tunable knobs for transaction construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxBuildConfig {
    pub sequence: u64,
    pub sig_op_count: u8,
    /// Restrict destination/change addresses to one network.
    pub network: Option<AddressPrefix>,
}

impl Default for TxBuildConfig {
    fn default() -> Self {
        Self {
            sequence: MAX_SEQUENCE,
            sig_op_count: DEFAULT_SIG_OP_COUNT,
            network: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTransactionParams {
    pub utxos: Vec<UnspentOutput>,
    pub destination_address: String,
    pub destination_amount: u64,
    pub change_address: String,
    /// 0 means no change output
    pub change_amount: u64,
    /// When present, inputs must equal destination + change + fee exactly.
    #[serde(default)]
    pub fee: Option<u64>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct TransactionBuilder<D = KaspaAddressDecoder> {
    config: TxBuildConfig,
    decoder: D,
}

impl TransactionBuilder<KaspaAddressDecoder> {
    pub fn new(config: TxBuildConfig) -> Self {
        let decoder = match config.network {
            Some(network) => KaspaAddressDecoder::for_network(network),
            None => KaspaAddressDecoder::new(),
        };
        Self { config, decoder }
    }
}

impl<D: AddressDecoder> TransactionBuilder<D> {
    /// Use an external address decoder instead of the built-in one.
    pub fn with_decoder(config: TxBuildConfig, decoder: D) -> Self {
        Self { config, decoder }
    }

    pub fn config(&self) -> &TxBuildConfig {
        &self.config
    }

    /// Build the unsigned transaction. Input order follows `params.utxos`
    /// and is preserved through hashing and signing.
    pub fn build_unsigned_transaction(&self, params: &BuildTransactionParams) -> Result<Transaction> {
        if params.utxos.is_empty() {
            return Err(KaspaTxError::NoInputs);
        }

        if let Some(fee) = params.fee {
            check_balance(params, fee)?;
        }

        let inputs = params
            .utxos
            .iter()
            .map(|utxo| {
                // Reject malformed outpoints here rather than at signing time.
                hex_to_hash(&utxo.outpoint.transaction_id)?;
                Ok(TxInput {
                    previous_outpoint: utxo.outpoint.clone(),
                    signature_script: String::new(),
                    sequence: self.config.sequence,
                    sig_op_count: self.config.sig_op_count,
                    utxo_amount: utxo.amount,
                    utxo_script_public_key: utxo.script_public_key.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let destination_script =
            address_to_script_public_key(&params.destination_address, &self.decoder)?;
        let mut outputs = vec![TxOutput {
            amount: params.destination_amount,
            script_public_key: bytes_to_hex(&destination_script),
        }];
        if params.change_amount > 0 {
            let change_script = address_to_script_public_key(&params.change_address, &self.decoder)?;
            outputs.push(TxOutput {
                amount: params.change_amount,
                script_public_key: bytes_to_hex(&change_script),
            });
        }

        log::debug!(
            "Built unsigned transaction: {} inputs, {} outputs, change {}",
            inputs.len(),
            outputs.len(),
            params.change_amount
        );

        Ok(Transaction {
            version: TX_VERSION,
            inputs,
            outputs,
            lock_time: 0,
            subnetwork_id: bytes_to_hex(&NATIVE_SUBNETWORK_ID),
        })
    }
}

/// Build with the default configuration and built-in address decoder.
pub fn build_unsigned_transaction(params: &BuildTransactionParams) -> Result<Transaction> {
    TransactionBuilder::new(TxBuildConfig::default()).build_unsigned_transaction(params)
}

fn check_balance(params: &BuildTransactionParams, fee: u64) -> Result<()> {
    let inputs = params
        .utxos
        .iter()
        .try_fold(0u64, |acc, u| acc.checked_add(u.amount))
        .ok_or(KaspaTxError::AmountOverflow)?;
    let outputs = params
        .destination_amount
        .checked_add(params.change_amount)
        .ok_or(KaspaTxError::AmountOverflow)?;
    let spent = outputs.checked_add(fee).ok_or(KaspaTxError::AmountOverflow)?;

    if inputs != spent {
        return Err(KaspaTxError::AmountMismatch {
            inputs,
            outputs,
            fee,
        });
    }
    Ok(())
}
