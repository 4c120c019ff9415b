//! Native Kaspa transaction construction and signing support.
//!
//! Builds unsigned native transfers, computes the consensus sighash for
//! each input, applies externally produced ECDSA signatures, and derives
//! the transaction id and broadcast payload. No key material is handled
//! here; signing happens outside the crate.

pub mod address;
pub mod codec;
pub mod commands;
pub mod hashing;
pub mod script;
pub mod sighash;
pub mod signing;
pub mod submission;
pub mod transaction;
pub mod txid;

mod error;
pub use error::{KaspaTxError, Result};

pub use address::{AddressDecoder, AddressPrefix, KaspaAddressDecoder};
pub use script::{address_to_script_public_key, build_script_public_key, extract_public_key_from_address};
pub use sighash::{calculate_all_sighashes, calculate_sighash, SigHashType, SighashContext};
pub use signing::{apply_signatures, apply_verified_signatures, build_signature_script};
pub use submission::{to_submission, SubmitTransactionRequest};
pub use transaction::{
    build_unsigned_transaction, BuildTransactionParams, Transaction, TransactionBuilder, TxBuildConfig,
    TxInput, TxOutput, UnspentOutput, UtxoRef,
};
pub use txid::calculate_transaction_id;
