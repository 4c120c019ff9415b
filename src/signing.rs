//! Signature application
//!
//! Signatures are produced outside this crate (threshold signer, hardware
//! device, ...) over the ECDSA sighash of each input. This module turns
//! them into signature scripts and attaches them to the transaction by
//! position: `signatures[i]` always belongs to `inputs[i]`.

use secp256k1::{ecdsa::Signature, Message, PublicKey, SECP256K1};

use crate::codec::bytes_to_hex;
use crate::error::{KaspaTxError, Result};
use crate::script::PUBLIC_KEY_LENGTH;
use crate::sighash::{SigHashType, SighashContext, SIGHASH_ALL};
use crate::transaction::Transaction;

/// Compact `r || s` ECDSA signature width.
pub const SIGNATURE_LENGTH: usize = 64;

/// Build a signature script: `<push 65> <signature> <SIGHASH_ALL>`.
pub fn build_signature_script(signature: &[u8]) -> Result<Vec<u8>> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(KaspaTxError::InvalidSignatureLength(signature.len()));
    }
    let mut script = Vec::with_capacity(SIGNATURE_LENGTH + 2);
    script.push((SIGNATURE_LENGTH + 1) as u8); // push signature + type byte
    script.extend_from_slice(signature);
    script.push(SIGHASH_ALL);
    Ok(script)
}

/// Attach one signature per input, by position. Returns a new transaction.
pub fn apply_signatures<S: AsRef<[u8]>>(tx: &Transaction, signatures: &[S]) -> Result<Transaction> {
    if signatures.len() != tx.inputs.len() {
        return Err(KaspaTxError::SignatureCountMismatch {
            signatures: signatures.len(),
            inputs: tx.inputs.len(),
        });
    }

    let mut signed = tx.clone();
    for (input, signature) in signed.inputs.iter_mut().zip(signatures) {
        input.signature_script = bytes_to_hex(&build_signature_script(signature.as_ref())?);
    }

    log::debug!("Applied {} signatures", signatures.len());
    Ok(signed)
}

/// Like [`apply_signatures`], but first checks every signature against its
/// input's sighash and `public_key`. A batch returned out of order by a
/// concurrent signer fails here instead of at broadcast.
pub fn apply_verified_signatures<S: AsRef<[u8]>>(
    tx: &Transaction,
    signatures: &[S],
    public_key: &[u8],
) -> Result<Transaction> {
    if public_key.len() != PUBLIC_KEY_LENGTH {
        return Err(KaspaTxError::InvalidPublicKeyLength(public_key.len()));
    }
    if signatures.len() != tx.inputs.len() {
        return Err(KaspaTxError::SignatureCountMismatch {
            signatures: signatures.len(),
            inputs: tx.inputs.len(),
        });
    }

    let pk = PublicKey::from_slice(public_key).map_err(|e| {
        KaspaTxError::InvalidPublicKey(format!("not a valid secp256k1 point: {}", e))
    })?;
    let context = SighashContext::new(tx)?;

    for (index, signature) in signatures.iter().enumerate() {
        let signature = signature.as_ref();
        if signature.len() != SIGNATURE_LENGTH {
            return Err(KaspaTxError::InvalidSignatureLength(signature.len()));
        }
        let sighash = context.ecdsa_sighash(index, SigHashType::ALL)?;
        let msg = Message::from_digest(sighash);
        let valid = Signature::from_compact(signature)
            .map(|sig| SECP256K1.verify_ecdsa(&msg, &sig, &pk).is_ok())
            .unwrap_or(false);
        if !valid {
            log::warn!("Rejected signature batch: input {} does not verify", index);
            return Err(KaspaTxError::SignatureVerificationFailed { index });
        }
    }

    apply_signatures(tx, signatures)
}
