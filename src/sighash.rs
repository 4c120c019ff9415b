//! Signature hash computation for transaction signing.
//!
//! Kaspa commits to aggregate hashes of all outpoints, sequences, sig-op
//! counts and outputs, then to the input being signed (including the amount
//! and locking script of the UTXO it spends). The result is the Schnorr
//! sighash; ECDSA signers sign a SHA-256 re-hash of it under a separate
//! domain.
//!
//! Preimage for input `i`:
//! 1. version (2 bytes LE)
//! 2. previousOutpointsHash, sequencesHash, sigOpCountsHash (32 bytes each)
//! 3. outpoint `i`: txid (32) + index (4 LE)
//! 4. UTXO script: version (2 LE) + length (8 LE) + script
//! 5. UTXO amount (8 LE), sequence (8 LE), sig-op count (1)
//! 6. outputsHash (32)
//! 7. lockTime (8 LE), subnetworkId (20), gas (8 LE, zero)
//! 8. payloadHash (32 zero bytes for native transactions) and the type byte

use serde::{Deserialize, Serialize};

use crate::codec::{hex_to_bytes, hex_to_hash, write_u16_le, write_u32_le, write_u64_le, write_var_bytes};
use crate::error::{KaspaTxError, Result};
use crate::hashing::{ecdsa_signing_hash, signing_hash, HASH_SIZE, ZERO_HASH};
use crate::transaction::{Transaction, SUBNETWORK_ID_SIZE};

// -----------------------------------------------------------------------
// Sighash flag constants
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u8 = 0x01;
/// Sign all inputs but no outputs.
pub const SIGHASH_NONE: u8 = 0x02;
/// Sign all inputs and only the output at the same index as the input.
pub const SIGHASH_SINGLE: u8 = 0x04;
/// Combined with another flag: commit only to the input being signed.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;

const SIGHASH_BASE_MASK: u8 = 0b0000_0111;

/// Script version committed for every locking script.
pub const SCRIPT_PUBLIC_KEY_VERSION: u16 = 0;

/// A validated sighash type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SigHashType(u8);

impl SigHashType {
    pub const ALL: SigHashType = SigHashType(SIGHASH_ALL);

    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            SIGHASH_ALL | SIGHASH_NONE | SIGHASH_SINGLE => Ok(SigHashType(value)),
            v if v & SIGHASH_ANYONECANPAY != 0
                && matches!(v & !SIGHASH_ANYONECANPAY, SIGHASH_ALL | SIGHASH_NONE | SIGHASH_SINGLE) =>
            {
                Ok(SigHashType(v))
            }
            other => Err(KaspaTxError::InvalidSighashType(other)),
        }
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 & SIGHASH_BASE_MASK == SIGHASH_NONE
    }

    pub fn is_single(self) -> bool {
        self.0 & SIGHASH_BASE_MASK == SIGHASH_SINGLE
    }

    pub fn is_anyone_can_pay(self) -> bool {
        self.0 & SIGHASH_ANYONECANPAY != 0
    }
}

impl Default for SigHashType {
    fn default() -> Self {
        SigHashType::ALL
    }
}

impl TryFrom<u8> for SigHashType {
    type Error = KaspaTxError;

    fn try_from(value: u8) -> Result<Self> {
        SigHashType::from_u8(value)
    }
}

impl From<SigHashType> for u8 {
    fn from(value: SigHashType) -> Self {
        value.0
    }
}

// -----------------------------------------------------------------------
// Reusable per-transaction context
// -----------------------------------------------------------------------

struct SighashInput {
    txid: [u8; HASH_SIZE],
    index: u32,
    sequence: u64,
    sig_op_count: u8,
    utxo_amount: u64,
    utxo_script: Vec<u8>,
}

/// Decoded transaction plus the aggregate hashes shared by every input.
///
/// Built once per transaction; each input is then hashed from read-only
/// state, so inputs may be hashed concurrently.
pub struct SighashContext {
    version: u16,
    lock_time: u64,
    subnetwork_id: [u8; SUBNETWORK_ID_SIZE],
    inputs: Vec<SighashInput>,
    outputs: Vec<Vec<u8>>,
    previous_outpoints_hash: [u8; HASH_SIZE],
    sequences_hash: [u8; HASH_SIZE],
    sig_op_counts_hash: [u8; HASH_SIZE],
    outputs_hash: [u8; HASH_SIZE],
}

impl SighashContext {
    pub fn new(tx: &Transaction) -> Result<Self> {
        let subnetwork_id: [u8; SUBNETWORK_ID_SIZE] = hex_to_bytes(&tx.subnetwork_id)?
            .as_slice()
            .try_into()
            .map_err(|_| {
                KaspaTxError::InvalidEncoding(format!(
                    "subnetwork id must be {} bytes",
                    SUBNETWORK_ID_SIZE
                ))
            })?;

        let inputs = tx
            .inputs
            .iter()
            .map(|input| {
                Ok(SighashInput {
                    txid: hex_to_hash(&input.previous_outpoint.transaction_id)?,
                    index: input.previous_outpoint.index,
                    sequence: input.sequence,
                    sig_op_count: input.sig_op_count,
                    utxo_amount: input.utxo_amount,
                    utxo_script: hex_to_bytes(&input.utxo_script_public_key)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let outputs = tx
            .outputs
            .iter()
            .map(|output| {
                let script = hex_to_bytes(&output.script_public_key)?;
                let mut buf = Vec::with_capacity(8 + 2 + 8 + script.len());
                buf.extend_from_slice(&write_u64_le(output.amount));
                buf.extend_from_slice(&write_u16_le(SCRIPT_PUBLIC_KEY_VERSION));
                write_var_bytes(&mut buf, &script);
                Ok(buf)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut prev_buf = Vec::with_capacity(inputs.len() * (HASH_SIZE + 4));
        let mut seq_buf = Vec::with_capacity(inputs.len() * 8);
        let mut sig_op_buf = Vec::with_capacity(inputs.len());
        for input in &inputs {
            prev_buf.extend_from_slice(&input.txid);
            prev_buf.extend_from_slice(&write_u32_le(input.index));
            seq_buf.extend_from_slice(&write_u64_le(input.sequence));
            sig_op_buf.push(input.sig_op_count);
        }

        Ok(SighashContext {
            version: tx.version,
            lock_time: tx.lock_time,
            subnetwork_id,
            previous_outpoints_hash: signing_hash(&prev_buf),
            sequences_hash: signing_hash(&seq_buf),
            sig_op_counts_hash: signing_hash(&sig_op_buf),
            outputs_hash: signing_hash(&outputs.concat()),
            inputs,
            outputs,
        })
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Raw preimage bytes for input `index`, before hashing.
    pub fn preimage(&self, index: usize, sighash_type: SigHashType) -> Result<Vec<u8>> {
        let input = self
            .inputs
            .get(index)
            .ok_or(KaspaTxError::InputIndexOutOfRange {
                index,
                count: self.inputs.len(),
            })?;

        let previous_outpoints_hash = if sighash_type.is_anyone_can_pay() {
            ZERO_HASH
        } else {
            self.previous_outpoints_hash
        };
        let sequences_hash = if sighash_type.is_anyone_can_pay()
            || sighash_type.is_single()
            || sighash_type.is_none()
        {
            ZERO_HASH
        } else {
            self.sequences_hash
        };
        let sig_op_counts_hash = if sighash_type.is_anyone_can_pay() {
            ZERO_HASH
        } else {
            self.sig_op_counts_hash
        };

        let mut preimage = Vec::with_capacity(256 + input.utxo_script.len());
        preimage.extend_from_slice(&write_u16_le(self.version));
        preimage.extend_from_slice(&previous_outpoints_hash);
        preimage.extend_from_slice(&sequences_hash);
        preimage.extend_from_slice(&sig_op_counts_hash);

        // outpoint being signed
        preimage.extend_from_slice(&input.txid);
        preimage.extend_from_slice(&write_u32_le(input.index));

        // locking script of the UTXO being spent
        preimage.extend_from_slice(&write_u16_le(SCRIPT_PUBLIC_KEY_VERSION));
        write_var_bytes(&mut preimage, &input.utxo_script);

        preimage.extend_from_slice(&write_u64_le(input.utxo_amount));
        preimage.extend_from_slice(&write_u64_le(input.sequence));
        preimage.push(input.sig_op_count);

        preimage.extend_from_slice(&self.outputs_hash_for(index, sighash_type));

        preimage.extend_from_slice(&write_u64_le(self.lock_time));
        preimage.extend_from_slice(&self.subnetwork_id);
        // gas
        preimage.extend_from_slice(&write_u64_le(0));
        // Native transactions carry no payload; the sentinel is all zeroes,
        // not the hash of empty data.
        preimage.extend_from_slice(&ZERO_HASH);
        preimage.push(sighash_type.to_u8());

        Ok(preimage)
    }

    pub fn schnorr_sighash(&self, index: usize, sighash_type: SigHashType) -> Result<[u8; HASH_SIZE]> {
        Ok(signing_hash(&self.preimage(index, sighash_type)?))
    }

    /// The hash an ECDSA signer must sign for input `index`.
    pub fn ecdsa_sighash(&self, index: usize, sighash_type: SigHashType) -> Result<[u8; HASH_SIZE]> {
        Ok(ecdsa_signing_hash(&self.schnorr_sighash(index, sighash_type)?))
    }

    fn outputs_hash_for(&self, index: usize, sighash_type: SigHashType) -> [u8; HASH_SIZE] {
        if sighash_type.is_none() {
            return ZERO_HASH;
        }
        if sighash_type.is_single() {
            return match self.outputs.get(index) {
                Some(output) => signing_hash(output),
                None => ZERO_HASH,
            };
        }
        self.outputs_hash
    }
}

// -----------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------

/// ECDSA sighash for one input.
pub fn calculate_sighash(
    tx: &Transaction,
    input_index: usize,
    sighash_type: SigHashType,
) -> Result<[u8; HASH_SIZE]> {
    SighashContext::new(tx)?.ecdsa_sighash(input_index, sighash_type)
}

/// ECDSA sighashes for every input, in input order.
pub fn calculate_all_sighashes(tx: &Transaction, sighash_type: SigHashType) -> Result<Vec<[u8; HASH_SIZE]>> {
    let context = SighashContext::new(tx)?;

    #[cfg(feature = "parallel")]
    let hashes = {
        use rayon::prelude::*;
        (0..context.input_count())
            .into_par_iter()
            .map(|i| context.ecdsa_sighash(i, sighash_type))
            .collect::<Result<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let hashes = (0..context.input_count())
        .map(|i| context.ecdsa_sighash(i, sighash_type))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Computed {} input sighashes", hashes.len());
    Ok(hashes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::build_unsigned_transaction;
    use crate::transaction::tests::{single_input_params, two_input_params};
    use crate::transaction::{TxInput, TxOutput, UtxoRef};

    /// Native three-input transaction from the rusty-kaspa consensus test
    /// suite (`consensus/core/src/hashing/sighash.rs`, `test_signature_hash`).
    fn consensus_suite_tx() -> Transaction {
        const PREV_TXID: &str = "880eb9819a31821d9d2399e2f35e2433b72637e393d71ecc9b8d0250f49153c3";
        const SCRIPT_1: &str = "208325613d2eeaf7176ac6c670b13c0043156c427438ed72d74b7800862ad884e8ac";
        const SCRIPT_2: &str = "20fcef4c106cf11135bbd70f02a726a92162d2fb8b22f0469126f800862ad884e8ac";

        let spent = [(100u64, SCRIPT_1), (200, SCRIPT_2), (300, SCRIPT_2)];
        Transaction {
            version: 0,
            inputs: spent
                .iter()
                .enumerate()
                .map(|(i, (amount, script))| TxInput {
                    previous_outpoint: UtxoRef {
                        transaction_id: PREV_TXID.to_string(),
                        index: i as u32,
                    },
                    signature_script: String::new(),
                    sequence: i as u64,
                    sig_op_count: 0,
                    utxo_amount: *amount,
                    utxo_script_public_key: script.to_string(),
                })
                .collect(),
            outputs: vec![
                TxOutput {
                    amount: 300,
                    script_public_key: SCRIPT_2.to_string(),
                },
                TxOutput {
                    amount: 300,
                    script_public_key: SCRIPT_1.to_string(),
                },
            ],
            lock_time: 1_615_462_089_000,
            subnetwork_id: "00".repeat(20),
        }
    }

    fn schnorr_hex(tx: &Transaction, index: usize, ty: u8) -> String {
        let ty = SigHashType::from_u8(ty).unwrap();
        let context = SighashContext::new(tx).unwrap();
        hex::encode(context.schnorr_sighash(index, ty).unwrap())
    }

    #[test]
    fn matches_consensus_suite_vectors() {
        let tx = consensus_suite_tx();
        let cases = [
            (SIGHASH_ALL, 0, "03b7ac6927b2b67100734c3cc313ff8c2e8b3ce3e746d46dd660b706a916b1f5"),
            (0x81, 0, "24821e466e53ff8e5fa93257cb17bb06131a48be4ef282e87f59d2bdc9afebc2"),
            (SIGHASH_NONE, 0, "38ce4bc93cf9116d2e377b33ff8449c665b7b5e2f2e65303c543b9afdaa4bbba"),
            (0x82, 0, "06aa9f4239491e07bb2b6bda6b0657b921aeae51e193d2c5bf9e81439cfeafa0"),
            (SIGHASH_SINGLE, 0, "44a0b407ff7b239d447743dd503f7ad23db5b2ee4d25279bd3dffaf6b474e005"),
            (SIGHASH_SINGLE, 2, "022ad967192f39d8d5895d243e025ec14cc7a79708c5e364894d4eff3cecb1b0"),
            (0x84, 0, "43b20aba775050cf9ba8d5e48fc7ed2dc6c071d23f30382aea58b7c59cfb8ed7"),
            (0x84, 2, "846689131fb08b77f83af1d3901076732ef09d3f8fdff945be89aa4300562e5f"),
        ];
        for (ty, index, expected) in cases {
            assert_eq!(schnorr_hex(&tx, index, ty), expected, "type {:#04x} input {}", ty, index);
        }
    }

    #[test]
    fn matches_consensus_suite_mutations() {
        let base = consensus_suite_tx();

        let mut outpoint = base.clone();
        outpoint.inputs[1].previous_outpoint.index = 2;
        assert_eq!(
            schnorr_hex(&outpoint, 0, SIGHASH_ALL),
            "a9f563d86c0ef19ec2e4f483901d202e90150580b6123c3d492e26e7965f488c"
        );

        let mut output = base.clone();
        output.outputs[1].amount = 100;
        assert_eq!(
            schnorr_hex(&output, 0, SIGHASH_ALL),
            "aad2b61bd2405dfcf7294fc2be85f325694f02dda22d0af30381cb50d8295e0a"
        );

        let mut sequence = base.clone();
        sequence.inputs[1].sequence = 12345;
        assert_eq!(
            schnorr_hex(&sequence, 0, SIGHASH_ALL),
            "0818bd0a3703638d4f01014c92cf866a8903cab36df2fa2506dc0d06b94295e8"
        );

        let mut own_sequence = base.clone();
        own_sequence.inputs[0].sequence = 12345;
        assert_eq!(
            schnorr_hex(&own_sequence, 0, SIGHASH_SINGLE),
            "83796d22879718eee1165d4aace667bb6778075dab579c32c57be945f466a451"
        );

        let mut spent_amount = base.clone();
        spent_amount.inputs[0].utxo_amount = 666;
        assert_eq!(
            schnorr_hex(&spent_amount, 0, 0x82),
            "f07f45f3634d3ea8c0f2cb676f56e20993edf9be07a83bf0dfdb3debcf1441bf"
        );
    }

    fn sighash_hex(tx: &Transaction, index: usize, ty: u8) -> String {
        let ty = SigHashType::from_u8(ty).unwrap();
        hex::encode(calculate_sighash(tx, index, ty).unwrap())
    }

    #[test]
    fn single_input_vector() {
        let tx = build_unsigned_transaction(&single_input_params()).unwrap();
        let context = SighashContext::new(&tx).unwrap();
        assert_eq!(
            hex::encode(context.schnorr_sighash(0, SigHashType::ALL).unwrap()),
            "a4a69a5f4cc4a3fff8b446a0d061887ab1bc2cc28c1adef3d5b4ed8bd5d51608"
        );
        assert_eq!(
            sighash_hex(&tx, 0, SIGHASH_ALL),
            "fcb74df1805d9d34dfcbca69b769d66f02890c78efb3bfcc7370160373d798bb"
        );
    }

    #[test]
    fn two_input_vectors() {
        let tx = build_unsigned_transaction(&two_input_params()).unwrap();
        let context = SighashContext::new(&tx).unwrap();
        assert_eq!(
            hex::encode(context.schnorr_sighash(0, SigHashType::ALL).unwrap()),
            "1411834d50b142db8f8aa4aec85e1551d6fd00b251dbcdfeda9d6c05c82ec26c"
        );
        assert_eq!(
            hex::encode(context.schnorr_sighash(1, SigHashType::ALL).unwrap()),
            "f11cf2deb60f26ec0280ac51572ea012be45f52a9e163a7b78722a58de8a940c"
        );

        let all = calculate_all_sighashes(&tx, SigHashType::ALL).unwrap();
        assert_eq!(
            hex::encode(all[0]),
            "0162ae7c8a7ed9d04ebd8187f0cc2c89545115d36da56ba9d54a95679a2ead22"
        );
        assert_eq!(
            hex::encode(all[1]),
            "2f1afa882ebb3af2ad3ab7fabb61b07df26213d6d480f5eab60147218a6e930a"
        );
    }

    #[test]
    fn flag_variant_vectors() {
        let tx = build_unsigned_transaction(&two_input_params()).unwrap();
        let cases = [
            (SIGHASH_NONE, "afbb0723da21c8c624758827ae1197b9bc88a493e323a01573819ecb87a67839"),
            (SIGHASH_SINGLE, "23fd99a57810eee1cef3d5b6622bf584ac30426947389d01085aafc9a16a8ef3"),
            (0x81, "5caa387a2355e7d5d4c6b9babfa90abd7372000e50d37bb5ffe103db673eaa9e"),
            (0x82, "cc800e775c18954428c17fc35967a336db91478cf09fe4f1b4e6726c4aa12291"),
            (0x84, "d7ab9a965d8318e211f48eba026b6b80d61454ae9533e421d7a18e71c7ba8e0e"),
        ];
        for (ty, expected) in cases {
            assert_eq!(sighash_hex(&tx, 0, ty), expected, "type {:#04x}", ty);
        }
        assert_eq!(
            sighash_hex(&tx, 1, SIGHASH_SINGLE),
            "143c4827f9be5a576c94394f9a075e202029317a8a455531c1515e3543324c31"
        );
    }

    #[test]
    fn preimage_layout() {
        let tx = build_unsigned_transaction(&single_input_params()).unwrap();
        let preimage = SighashContext::new(&tx)
            .unwrap()
            .preimage(0, SigHashType::ALL)
            .unwrap();

        // 2 + 3*32 + 36 + 2 + 8 + 35 + 8 + 8 + 1 + 32 + 8 + 20 + 8 + 32 + 1
        assert_eq!(preimage.len(), 297);
        assert_eq!(&preimage[..2], &[0, 0]);
        assert_eq!(&preimage[98..130], hex::decode(crate::transaction::tests::UTXO_TXID_0).unwrap().as_slice());
        assert_eq!(&preimage[130..134], &[1, 0, 0, 0]);
        // payload hash sentinel then type byte
        assert_eq!(&preimage[264..296], &[0u8; 32]);
        assert_eq!(preimage[296], SIGHASH_ALL);
    }

    #[test]
    fn sighash_is_deterministic() {
        let tx = build_unsigned_transaction(&two_input_params()).unwrap();
        let a = calculate_sighash(&tx, 1, SigHashType::ALL).unwrap();
        let b = calculate_sighash(&tx, 1, SigHashType::ALL).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, [0u8; 32]);
    }

    #[test]
    fn all_sighashes_match_individual_calls() {
        let tx = build_unsigned_transaction(&two_input_params()).unwrap();
        let all = calculate_all_sighashes(&tx, SigHashType::ALL).unwrap();
        assert_eq!(all.len(), 2);
        for (i, hash) in all.iter().enumerate() {
            assert_eq!(*hash, calculate_sighash(&tx, i, SigHashType::ALL).unwrap());
        }
    }

    #[test]
    fn every_sighash_covers_every_output_and_input() {
        let base = build_unsigned_transaction(&two_input_params()).unwrap();
        let before = calculate_all_sighashes(&base, SigHashType::ALL).unwrap();

        let mut amount = base.clone();
        amount.outputs[1].amount += 1;
        let mut sequence = base.clone();
        sequence.inputs[0].sequence = 0;
        let mut outpoint = base.clone();
        outpoint.inputs[1].previous_outpoint.index = 7;

        for mutated in [amount, sequence, outpoint] {
            let after = calculate_all_sighashes(&mutated, SigHashType::ALL).unwrap();
            for i in 0..before.len() {
                assert_ne!(before[i], after[i], "input {} unchanged", i);
            }
        }
    }

    #[test]
    fn signature_scripts_are_not_committed() {
        let base = build_unsigned_transaction(&two_input_params()).unwrap();
        let mut signed = base.clone();
        signed.inputs[0].signature_script = format!("41{}01", "aa".repeat(64));

        assert_eq!(
            calculate_all_sighashes(&base, SigHashType::ALL).unwrap(),
            calculate_all_sighashes(&signed, SigHashType::ALL).unwrap()
        );
    }

    #[test]
    fn utxo_material_is_committed_per_input() {
        let base = build_unsigned_transaction(&two_input_params()).unwrap();
        let mut mutated = base.clone();
        mutated.inputs[1].utxo_amount += 1;

        let before = calculate_all_sighashes(&base, SigHashType::ALL).unwrap();
        let after = calculate_all_sighashes(&mutated, SigHashType::ALL).unwrap();
        // Only the spending input commits to its own UTXO amount.
        assert_eq!(before[0], after[0]);
        assert_ne!(before[1], after[1]);
    }

    #[test]
    fn single_without_matching_output_uses_zero_hash() {
        let mut tx = build_unsigned_transaction(&two_input_params()).unwrap();
        tx.outputs.truncate(1);
        let context = SighashContext::new(&tx).unwrap();
        let single = SigHashType::from_u8(SIGHASH_SINGLE).unwrap();
        let none = SigHashType::from_u8(SIGHASH_NONE).unwrap();

        // Input 1 has no output 1, so its outputs hash is zero just like NONE;
        // the preimages differ only in the trailing type byte.
        let a = context.preimage(1, single).unwrap();
        let b = context.preimage(1, none).unwrap();
        assert_eq!(a[..a.len() - 1], b[..b.len() - 1]);
    }

    #[test]
    fn out_of_range_index_fails() {
        let tx = build_unsigned_transaction(&single_input_params()).unwrap();
        assert_eq!(
            calculate_sighash(&tx, 1, SigHashType::ALL),
            Err(KaspaTxError::InputIndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn malformed_fields_fail() {
        let mut tx = build_unsigned_transaction(&single_input_params()).unwrap();
        tx.subnetwork_id = "00".repeat(19);
        assert!(matches!(
            calculate_sighash(&tx, 0, SigHashType::ALL),
            Err(KaspaTxError::InvalidEncoding(_))
        ));

        let mut tx = build_unsigned_transaction(&single_input_params()).unwrap();
        tx.inputs[0].utxo_script_public_key = "abc".to_string();
        assert!(matches!(
            calculate_sighash(&tx, 0, SigHashType::ALL),
            Err(KaspaTxError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn sighash_type_validation() {
        for ok in [0x01, 0x02, 0x04, 0x81, 0x82, 0x84] {
            assert_eq!(SigHashType::from_u8(ok).unwrap().to_u8(), ok);
        }
        for bad in [0x00, 0x03, 0x05, 0x41, 0x80, 0xff] {
            assert_eq!(SigHashType::from_u8(bad), Err(KaspaTxError::InvalidSighashType(bad)));
        }
        assert_eq!(SigHashType::default(), SigHashType::ALL);
    }

    #[test]
    fn sighash_type_serde_validates() {
        let ty: SigHashType = serde_json::from_str("132").unwrap();
        assert_eq!(ty.to_u8(), 0x84);
        assert!(serde_json::from_str::<SigHashType>("3").is_err());
        assert_eq!(serde_json::to_string(&SigHashType::ALL).unwrap(), "1");
    }
}
