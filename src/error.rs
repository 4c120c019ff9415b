/// Error types for transaction construction, hashing and signing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KaspaTxError {
    /// Hex input was malformed (odd length, bad characters or wrong decoded width).
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    /// The address did not decode to a 34-byte ECDSA pay-to-pubkey payload.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// A public key was not a 33-byte compressed secp256k1 point.
    #[error("invalid public key length: expected 33 bytes, got {0}")]
    InvalidPublicKeyLength(usize),
    /// A public key had the right length but is not a valid curve point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    /// The number of signatures does not match the number of inputs.
    #[error("signature count mismatch: got {signatures} signatures for {inputs} inputs")]
    SignatureCountMismatch { signatures: usize, inputs: usize },
    /// A signature was not a 64-byte compact `r || s` encoding.
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),
    /// A sighash was requested for an input the transaction does not have.
    #[error("input index {index} out of range (transaction has {count} inputs)")]
    InputIndexOutOfRange { index: usize, count: usize },
    /// The sighash type byte is not one of the recognised flag combinations.
    #[error("invalid sighash type: {0:#04x}")]
    InvalidSighashType(u8),
    /// Inputs do not balance against outputs plus the declared fee.
    #[error("amount mismatch: inputs total {inputs}, outputs total {outputs} plus fee {fee}")]
    AmountMismatch { inputs: u64, outputs: u64, fee: u64 },
    /// Summing amounts overflowed u64.
    #[error("amount overflow")]
    AmountOverflow,
    /// A transaction needs at least one input.
    #[error("transaction has no inputs")]
    NoInputs,
    /// A signature does not verify against its input's sighash and the given key.
    #[error("signature for input {index} does not verify")]
    SignatureVerificationFailed { index: usize },
    /// JSON rendering of a submission payload failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, KaspaTxError>;
