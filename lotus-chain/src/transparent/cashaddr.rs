//! The CashAddr address encoding.
//!
//! A CashAddr is a human-readable prefix, a `:` separator, and a base32
//! payload ending in a 40-bit BCH checksum. The checksum covers the prefix, so
//! the same hash encodes differently on each network. The prefix may be
//! omitted, in which case the decoder checks the checksum against a default
//! prefix.
//!
//! The payload starts with a version byte: bit 7 is reserved and must be zero,
//! bits 3-6 are the address type, and bits 0-2 are the hash size.

use thiserror::Error;

use crate::{parameters::Network, transparent::Address};

#[cfg(test)]
mod tests;

/// The base32 alphabet.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// The number of 5-bit groups in the checksum.
const CHECKSUM_LENGTH: usize = 8;

/// The kind of destination a CashAddr pays to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CashAddrType {
    /// Pay to public key hash
    PubKey = 0,
    /// Pay to script hash
    Script = 1,
}

/// The decoded content of a CashAddr.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CashAddrContent {
    /// The destination kind.
    pub kind: CashAddrType,

    /// The destination hash, 20 to 64 bytes long.
    pub hash: Vec<u8>,
}

/// Errors that can be returned when decoding or encoding a CashAddr.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("CashAddr mixes upper and lower case characters")]
    MixedCase,

    #[error("invalid CashAddr character {0:?}")]
    InvalidCharacter(char),

    #[error("invalid CashAddr prefix separator")]
    InvalidSeparator,

    #[error("CashAddr payload is too short")]
    TooShort,

    #[error("invalid CashAddr checksum")]
    InvalidChecksum,

    #[error("CashAddr prefix {actual:?} does not match the expected prefix {expected:?}")]
    PrefixMismatch { expected: String, actual: String },

    #[error("CashAddr payload has invalid padding")]
    InvalidPadding,

    #[error("CashAddr version byte {0:#04x} sets the reserved bit")]
    ReservedVersionBit(u8),

    #[error("unknown CashAddr type {0}")]
    UnknownType(u8),

    #[error("CashAddr hash is {actual} bytes, but its version byte says {expected} bytes")]
    HashSizeMismatch { expected: usize, actual: usize },

    #[error("{0}-byte hashes can't be used as transparent addresses")]
    UnsupportedHashSize(usize),
}

impl CashAddrType {
    fn from_version(version: u8) -> Result<Self, Error> {
        match (version >> 3) & 0x1f {
            0 => Ok(CashAddrType::PubKey),
            1 => Ok(CashAddrType::Script),
            other => Err(Error::UnknownType(other)),
        }
    }
}

impl CashAddrContent {
    /// Converts this content to a transparent address on `network`.
    ///
    /// Only 20-byte hashes can be converted.
    pub fn to_address(&self, network: Network) -> Result<Address, Error> {
        let hash: [u8; 20] = self
            .hash
            .as_slice()
            .try_into()
            .map_err(|_| Error::UnsupportedHashSize(self.hash.len()))?;

        Ok(match self.kind {
            CashAddrType::PubKey => Address::from_pub_key_hash(network.kind(), hash),
            CashAddrType::Script => Address::from_script_hash(network.kind(), hash),
        })
    }
}

impl From<&Address> for CashAddrContent {
    fn from(address: &Address) -> Self {
        let kind = if address.is_script_hash() {
            CashAddrType::Script
        } else {
            CashAddrType::PubKey
        };

        Self {
            kind,
            hash: address.hash_bytes().to_vec(),
        }
    }
}

/// Decodes a CashAddr, using `expected_prefix` when the address has no prefix.
///
/// Addresses with an explicit prefix other than `expected_prefix` are rejected.
pub fn decode(s: &str, expected_prefix: &str) -> Result<CashAddrContent, Error> {
    let (prefix, values) = decode_base32(s, expected_prefix)?;

    if prefix != expected_prefix {
        return Err(Error::PrefixMismatch {
            expected: expected_prefix.to_string(),
            actual: prefix,
        });
    }

    let payload = convert_bits::<5, 8>(&values, false)?;
    let (&version, hash) = payload.split_first().ok_or(Error::TooShort)?;

    if version & 0x80 != 0 {
        return Err(Error::ReservedVersionBit(version));
    }

    let kind = CashAddrType::from_version(version)?;

    let expected_size = hash_size(version);
    if hash.len() != expected_size {
        return Err(Error::HashSizeMismatch {
            expected: expected_size,
            actual: hash.len(),
        });
    }

    Ok(CashAddrContent {
        kind,
        hash: hash.to_vec(),
    })
}

/// Encodes `content` as a lowercase CashAddr with `prefix`.
pub fn encode(prefix: &str, content: &CashAddrContent) -> Result<String, Error> {
    let size_bits = size_bits(content.hash.len())?;
    let version = ((content.kind as u8) << 3) | size_bits;

    let mut payload = Vec::with_capacity(content.hash.len() + 1);
    payload.push(version);
    payload.extend_from_slice(&content.hash);

    let mut values = convert_bits::<8, 5>(&payload, true)?;
    let checksum = create_checksum(prefix, &values);
    values.extend(checksum);

    let mut encoded = String::with_capacity(prefix.len() + 1 + values.len());
    encoded.push_str(prefix);
    encoded.push(':');
    encoded.extend(
        values
            .iter()
            .map(|&value| CHARSET[usize::from(value)] as char),
    );

    Ok(encoded)
}

/// Returns the hash size in bytes encoded in the low bits of `version`.
fn hash_size(version: u8) -> usize {
    let size = 20 + 4 * usize::from(version & 0x03);

    if version & 0x04 != 0 {
        size * 2
    } else {
        size
    }
}

/// Returns the version byte size bits for a hash of `len` bytes.
fn size_bits(len: usize) -> Result<u8, Error> {
    (0..8)
        .find(|&bits| hash_size(bits) == len)
        .ok_or(Error::UnsupportedHashSize(len))
}

/// Splits `s` into its lowercase prefix and its base32 values, and verifies the checksum.
fn decode_base32(s: &str, default_prefix: &str) -> Result<(String, Vec<u8>), Error> {
    let mut lower = false;
    let mut upper = false;
    let mut has_number = false;
    let mut separator = None;

    for (i, c) in s.char_indices() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => has_number = true,
            ':' => {
                // The prefix is alphabetic, non-empty, and there is only one separator.
                if has_number || i == 0 || separator.is_some() {
                    return Err(Error::InvalidSeparator);
                }
                separator = Some(i);
            }
            other => return Err(Error::InvalidCharacter(other)),
        }
    }

    if upper && lower {
        return Err(Error::MixedCase);
    }

    let (prefix, payload) = match separator {
        Some(i) => (s[..i].to_ascii_lowercase(), &s[i + 1..]),
        None => (default_prefix.to_string(), s),
    };

    let values = payload
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&symbol| symbol as char == c.to_ascii_lowercase())
                .map(|value| value as u8)
                .ok_or(Error::InvalidCharacter(c))
        })
        .collect::<Result<Vec<u8>, Error>>()?;

    if values.len() < CHECKSUM_LENGTH {
        return Err(Error::TooShort);
    }

    if polymod(expand_prefix(&prefix).chain(values.iter().copied())) != 0 {
        return Err(Error::InvalidChecksum);
    }

    let data_len = values.len() - CHECKSUM_LENGTH;
    let mut values = values;
    values.truncate(data_len);

    Ok((prefix, values))
}

/// Returns the checksum values for `prefix` and `values`.
fn create_checksum(prefix: &str, values: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let modulus = polymod(
        expand_prefix(prefix)
            .chain(values.iter().copied())
            .chain([0; CHECKSUM_LENGTH]),
    );

    let mut checksum = [0; CHECKSUM_LENGTH];
    for (i, value) in checksum.iter_mut().enumerate() {
        *value = ((modulus >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }

    checksum
}

/// Expands the prefix into 5-bit values for checksum computation: the low five
/// bits of each character, followed by a zero separator.
fn expand_prefix(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|c| c & 0x1f).chain(std::iter::once(0))
}

/// Computes the 40-bit BCH code of the 5-bit `values`.
///
/// The checksum is valid when the result over the expanded prefix, the
/// payload and the checksum is zero.
fn polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    const GENERATORS: [u64; 5] = [
        0x98_f2bc_8e61,
        0x79_b76d_99e2,
        0xf3_3e5f_b3c4,
        0xae_2eab_e2a8,
        0x1e_4f43_e470,
    ];

    let mut c: u64 = 1;

    for value in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(value);

        for (bit, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << bit) != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

/// Regroups `data` from `FROM`-bit values into `TO`-bit values.
///
/// Without padding, leftover bits must be fewer than `FROM` and all zero.
fn convert_bits<const FROM: u32, const TO: u32>(data: &[u8], pad: bool) -> Result<Vec<u8>, Error> {
    let max_value: u32 = (1 << TO) - 1;
    let max_acc: u32 = (1 << (FROM + TO - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * FROM as usize / TO as usize + 1);

    for &value in data {
        acc = ((acc << FROM) | u32::from(value)) & max_acc;
        bits += FROM;

        while bits >= TO {
            bits -= TO;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (TO - bits)) & max_value) as u8);
        }
    } else if bits >= FROM || ((acc << (TO - bits)) & max_value) != 0 {
        return Err(Error::InvalidPadding);
    }

    Ok(out)
}
