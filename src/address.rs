//! Kaspa address decoding
//!
//! Parsing and checksum validation are done by `kaspa_addresses`. Script
//! building only needs the decoded 5-bit words, so decoding is exposed
//! through the [`AddressDecoder`] trait and callers may plug in their own
//! implementation.

use kaspa_addresses::{Address, Version};

pub use kaspa_addresses::Prefix as AddressPrefix;

// ---------------------------------------------------------------------------
// Decoder seam
// ---------------------------------------------------------------------------

/// Decodes an address string into its payload as 5-bit words
/// (`version || data`, checksum stripped). `None` means the address is not
/// well formed.
pub trait AddressDecoder {
    fn decode(&self, address: &str) -> Option<Vec<u8>>;
}

/// Built-in decoder for `kaspa:`-style addresses.
///
/// With `network` set, addresses for any other network are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KaspaAddressDecoder {
    pub network: Option<AddressPrefix>,
}

impl KaspaAddressDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_network(network: AddressPrefix) -> Self {
        Self {
            network: Some(network),
        }
    }

    /// Parse and checksum-validate `address`, applying the network pin.
    pub fn parse(&self, address: &str) -> Option<Address> {
        // Mixed case is never valid; a fully upper-case address is.
        let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            return None;
        }
        let address = address.to_ascii_lowercase();

        let (_, payload) = address.split_once(':')?;
        if !payload_matches_version(payload) {
            return None;
        }

        let parsed = Address::try_from(address.as_str())
            .map_err(|e| log::debug!("Rejected address: {}", e))
            .ok()?;
        if self.network.is_some_and(|n| n != parsed.prefix) {
            return None;
        }
        Some(parsed)
    }
}

impl AddressDecoder for KaspaAddressDecoder {
    fn decode(&self, address: &str) -> Option<Vec<u8>> {
        let parsed = self.parse(address)?;
        let mut data = Vec::with_capacity(parsed.payload.len() + 1);
        data.push(parsed.version as u8);
        data.extend_from_slice(&parsed.payload);
        Some(bytes_to_words(&data))
    }
}

/// `Address::try_from` asserts that the payload length fits the version, so
/// only strings whose leading version bits agree with their length reach it.
fn payload_matches_version(payload: &str) -> bool {
    let mut chars = payload.chars();
    let version = match (chars.next(), chars.next()) {
        (Some('q'), Some('q' | 'p' | 'z' | 'r')) => Version::PubKey,
        (Some('q'), Some('y' | '9' | 'x' | '8')) => Version::PubKeyECDSA,
        (Some('p'), Some('q' | 'p' | 'z' | 'r')) => Version::ScriptHash,
        _ => return false,
    };
    // version byte + key, as 5-bit characters, plus the 8-character checksum
    let data_chars = ((1 + version.public_key_len()) * 8).div_ceil(5);
    payload.len() == data_chars + 8
}

// ---------------------------------------------------------------------------
// Bit regrouping between the decoder's words and payload bytes
// ---------------------------------------------------------------------------

/// Regroup 8-bit bytes into 5-bit words, zero-padding the tail.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits = 0;
    for &b in bytes {
        acc = (acc << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Regroup 5-bit words into bytes. Fails on out-of-range words, on more
/// than 4 bits of padding, or on non-zero padding.
pub fn words_to_bytes(words: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(words.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits = 0;
    for &w in words {
        if w > 0x1f {
            return None;
        }
        acc = (acc << 5) | u32::from(w);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return None;
    }
    Some(out)
}
