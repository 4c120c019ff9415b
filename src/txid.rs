//! Transaction id
//!
//! The id is computed over the signed transaction with its own layout,
//! separate from the sighash preimage: signature scripts are included,
//! UTXO amounts and scripts are not, and nothing is keyed.

use crate::codec::{bytes_to_hex, hex_to_bytes, hex_to_hash, write_u16_le, write_u32_le, write_u64_le, write_var_bytes};
use crate::error::{KaspaTxError, Result};
use crate::hashing::transaction_id_hash;
use crate::sighash::SCRIPT_PUBLIC_KEY_VERSION;
use crate::transaction::{Transaction, SUBNETWORK_ID_SIZE};

/// Serialize `tx` in the id layout:
/// `version | #inputs | (outpoint, sigScript, sequence)* | #outputs |
/// (amount, scriptVersion, script)* | lockTime | subnetworkId | gas | payload`.
pub fn serialize_for_id(tx: &Transaction) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    buf.extend_from_slice(&write_u16_le(tx.version));

    buf.extend_from_slice(&write_u64_le(tx.inputs.len() as u64));
    for input in &tx.inputs {
        buf.extend_from_slice(&hex_to_hash(&input.previous_outpoint.transaction_id)?);
        buf.extend_from_slice(&write_u32_le(input.previous_outpoint.index));
        write_var_bytes(&mut buf, &hex_to_bytes(&input.signature_script)?);
        buf.extend_from_slice(&write_u64_le(input.sequence));
    }

    buf.extend_from_slice(&write_u64_le(tx.outputs.len() as u64));
    for output in &tx.outputs {
        buf.extend_from_slice(&write_u64_le(output.amount));
        buf.extend_from_slice(&write_u16_le(SCRIPT_PUBLIC_KEY_VERSION));
        write_var_bytes(&mut buf, &hex_to_bytes(&output.script_public_key)?);
    }

    buf.extend_from_slice(&write_u64_le(tx.lock_time));

    let subnetwork_id = hex_to_bytes(&tx.subnetwork_id)?;
    if subnetwork_id.len() != SUBNETWORK_ID_SIZE {
        return Err(KaspaTxError::InvalidEncoding(format!(
            "subnetwork id must be {} bytes, got {}",
            SUBNETWORK_ID_SIZE,
            subnetwork_id.len()
        )));
    }
    buf.extend_from_slice(&subnetwork_id);

    // gas
    buf.extend_from_slice(&write_u64_le(0));
    // empty payload
    write_var_bytes(&mut buf, &[]);

    Ok(buf)
}

/// Transaction id of a (normally fully signed) transaction, lowercase hex.
pub fn calculate_transaction_id(tx: &Transaction) -> Result<String> {
    let id = bytes_to_hex(&transaction_id_hash(&serialize_for_id(tx)?));
    log::debug!("Computed transaction id {}", id);
    Ok(id)
}
