//! Hash domains used by Kaspa transaction hashing.
//!
//! - Signing aggregates and the Schnorr sighash: Blake2b-256 keyed with
//!   `TransactionSigningHash`.
//! - Transaction id: Blake2b-256 with a 16-byte personalization.
//! - ECDSA sighash: SHA-256 over `SHA256(domain) || schnorr_sighash`.

use sha2::{Digest, Sha256};

pub const TRANSACTION_SIGNING_HASH_KEY: &[u8] = b"TransactionSigningHash";
pub const TRANSACTION_SIGNING_HASH_ECDSA_DOMAIN: &[u8] = b"TransactionSigningHashECDSA";
/// `"TransactionId"` zero-padded to the 16-byte Blake2b personalization width.
pub const TRANSACTION_ID_PERSONALIZATION: &[u8; 16] = b"TransactionId\0\0\0";

pub const HASH_SIZE: usize = 32;
pub const ZERO_HASH: [u8; HASH_SIZE] = [0u8; HASH_SIZE];

/// Blake2b-256 keyed with the transaction signing domain.
pub fn signing_hash(data: &[u8]) -> [u8; HASH_SIZE] {
    let hash = blake2b_simd::Params::new()
        .hash_length(HASH_SIZE)
        .key(TRANSACTION_SIGNING_HASH_KEY)
        .hash(data);

    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(hash.as_bytes());
    out
}

/// Blake2b-256 personalized with the transaction id domain.
pub fn transaction_id_hash(data: &[u8]) -> [u8; HASH_SIZE] {
    let hash = blake2b_simd::Params::new()
        .hash_length(HASH_SIZE)
        .personal(TRANSACTION_ID_PERSONALIZATION)
        .hash(data);

    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(hash.as_bytes());
    out
}

/// SHA-256 of the ECDSA signing domain string.
pub fn ecdsa_domain_hash() -> [u8; HASH_SIZE] {
    Sha256::digest(TRANSACTION_SIGNING_HASH_ECDSA_DOMAIN).into()
}

/// Re-hash a Schnorr sighash into the value an ECDSA signer signs.
pub fn ecdsa_signing_hash(schnorr_sighash: &[u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(ecdsa_domain_hash());
    hasher.update(schnorr_sighash);
    hasher.finalize().into()
}
