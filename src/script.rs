//! ECDSA pay-to-pubkey scripts
//!
//! Kaspa's ECDSA P2PK locking script is
//! `OP_DATA_33 <33-byte compressed pubkey> OP_CHECKSIGECDSA`.

use crate::address::{words_to_bytes, AddressDecoder};
use crate::error::{KaspaTxError, Result};

/// Push the next 33 bytes.
pub const OP_DATA_33: u8 = 0x21;
pub const OP_CHECKSIG_ECDSA: u8 = 0xab;

/// Address version byte for ECDSA pay-to-pubkey payloads.
pub const ECDSA_PUBKEY_ADDRESS_VERSION: u8 = 0x01;

pub const PUBLIC_KEY_LENGTH: usize = 33;
pub const P2PK_ECDSA_SCRIPT_LENGTH: usize = PUBLIC_KEY_LENGTH + 2;

/// Build the P2PK ECDSA locking script for a compressed public key.
pub fn build_script_public_key(pubkey: &[u8]) -> Result<Vec<u8>> {
    if pubkey.len() != PUBLIC_KEY_LENGTH {
        return Err(KaspaTxError::InvalidPublicKeyLength(pubkey.len()));
    }
    let mut script = Vec::with_capacity(P2PK_ECDSA_SCRIPT_LENGTH);
    script.push(OP_DATA_33);
    script.extend_from_slice(pubkey);
    script.push(OP_CHECKSIG_ECDSA);
    Ok(script)
}

/// Pull the compressed public key out of an ECDSA address.
///
/// Returns `None` unless the payload is exactly `0x01 || 33-byte key`.
pub fn extract_public_key_from_address<D: AddressDecoder + ?Sized>(
    address: &str,
    decoder: &D,
) -> Option<[u8; PUBLIC_KEY_LENGTH]> {
    let words = decoder.decode(address)?;
    let payload = words_to_bytes(&words)?;
    match payload.split_first() {
        Some((&ECDSA_PUBKEY_ADDRESS_VERSION, key)) => key.try_into().ok(),
        _ => None,
    }
}

pub fn address_to_script_public_key<D: AddressDecoder + ?Sized>(
    address: &str,
    decoder: &D,
) -> Result<Vec<u8>> {
    let pubkey = extract_public_key_from_address(address, decoder).ok_or_else(|| {
        KaspaTxError::InvalidAddress(format!(
            "'{}' is not an ECDSA pay-to-pubkey address",
            address
        ))
    })?;
    build_script_public_key(&pubkey)
}
