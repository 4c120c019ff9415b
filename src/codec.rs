//! Byte-level helpers shared by the sighash and transaction id serializers.
//!
//! Kaspa writes every integer little-endian and every variable-length byte
//! string as a u64 length followed by the bytes. There is no compact-size
//! varint like in Bitcoin.

use crate::error::{KaspaTxError, Result};

/// Decode a hex string to bytes. Upper-case digits are accepted.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(KaspaTxError::InvalidEncoding(format!(
            "hex string has odd length {}",
            hex.len()
        )));
    }
    hex::decode(hex).map_err(|e| KaspaTxError::InvalidEncoding(format!("invalid hex: {}", e)))
}

/// Encode bytes as lowercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a 32-byte hash (transaction ids). Kaspa displays hashes in
/// natural byte order, so no reversal is applied.
pub fn hex_to_hash(hex: &str) -> Result<[u8; 32]> {
    let bytes = hex_to_bytes(hex)?;
    bytes.as_slice().try_into().map_err(|_| {
        KaspaTxError::InvalidEncoding(format!("expected 32-byte hash, got {} bytes", bytes.len()))
    })
}

pub fn write_u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

pub fn write_u32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

pub fn write_u64_le(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Append `len_LE64 || bytes`.
pub fn write_var_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&write_u64_le(bytes.len() as u64));
    buf.extend_from_slice(bytes);
}
