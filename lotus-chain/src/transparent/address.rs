//! Transparent Address types.

use std::fmt;

use thiserror::Error;

use crate::{
    parameters::{Network, NetworkKind},
    transparent::{opcodes::OpCode, Script},
};

/// Transparent Lotus Addresses
///
/// A single byte is used for the version field identifying the address type
/// and network kind, followed by a 20-byte hash.
///
/// Regtest addresses use the Testnet version bytes, so a decoded address keeps
/// the network kind it was decoded for.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Address {
    /// P2SH (Pay to Script Hash) addresses
    PayToScriptHash {
        /// Production, test, or other network
        network_kind: NetworkKind,
        /// 20 bytes specifying a script hash.
        script_hash: [u8; 20],
    },

    /// P2PKH (Pay to Public Key Hash) addresses
    PayToPublicKeyHash {
        /// Production, test, or other network
        network_kind: NetworkKind,
        /// 20 bytes specifying a public key hash, which is a RIPEMD-160
        /// hash of a SHA-256 hash of a compressed ECDSA key encoding.
        pub_key_hash: [u8; 20],
    },
}

/// Errors that can be returned when decoding a Base58Check [`Address`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AddressError {
    #[error("invalid Base58Check encoding: {0}")]
    Base58(String),

    #[error("expected a version byte and a 20-byte hash, got {0} bytes")]
    InvalidLength(usize),

    #[error("version byte {version:#04x} is not a {network} transparent address")]
    UnknownVersion { version: u8, network: Network },
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = if self.is_script_hash() { "P2SH" } else { "P2PKH" };

        f.debug_struct("Address")
            .field("kind", &kind)
            .field("network_kind", &self.network_kind())
            .field("hash", &hex::encode(self.hash_bytes()))
            .finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut bytes = Vec::with_capacity(21);
        bytes.push(self.version_byte());
        bytes.extend(self.hash_bytes());

        f.write_str(&bs58::encode(bytes).with_check().into_string())
    }
}

impl Address {
    /// Create an address for the given public key hash and network.
    pub fn from_pub_key_hash(network_kind: NetworkKind, pub_key_hash: [u8; 20]) -> Self {
        Self::PayToPublicKeyHash {
            network_kind,
            pub_key_hash,
        }
    }

    /// Create an address for the given script hash and network.
    pub fn from_script_hash(network_kind: NetworkKind, script_hash: [u8; 20]) -> Self {
        Self::PayToScriptHash {
            network_kind,
            script_hash,
        }
    }

    /// Decodes a Base58Check address, which must use the version bytes of `network`.
    pub fn decode_base58(s: &str, network: Network) -> Result<Self, AddressError> {
        let data = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|error| AddressError::Base58(error.to_string()))?;

        let (&version, hash) = data
            .split_first()
            .ok_or(AddressError::InvalidLength(data.len()))?;

        let hash: [u8; 20] = hash
            .try_into()
            .map_err(|_| AddressError::InvalidLength(data.len()))?;

        let network_kind = network.kind();

        if version == network_kind.b58_pubkey_address_prefix() {
            Ok(Self::from_pub_key_hash(network_kind, hash))
        } else if version == network_kind.b58_script_address_prefix() {
            Ok(Self::from_script_hash(network_kind, hash))
        } else {
            Err(AddressError::UnknownVersion { version, network })
        }
    }

    /// Returns the network kind for this address.
    pub fn network_kind(&self) -> NetworkKind {
        match self {
            Address::PayToScriptHash { network_kind, .. } => *network_kind,
            Address::PayToPublicKeyHash { network_kind, .. } => *network_kind,
        }
    }

    /// Returns `true` if the address is `PayToScriptHash`, and `false` if it is `PayToPublicKeyHash`.
    pub fn is_script_hash(&self) -> bool {
        matches!(self, Address::PayToScriptHash { .. })
    }

    /// Returns the hash bytes for this address, regardless of the address type.
    pub fn hash_bytes(&self) -> [u8; 20] {
        match *self {
            Address::PayToScriptHash { script_hash, .. } => script_hash,
            Address::PayToPublicKeyHash { pub_key_hash, .. } => pub_key_hash,
        }
    }

    fn version_byte(&self) -> u8 {
        match self {
            Address::PayToScriptHash { network_kind, .. } => {
                network_kind.b58_script_address_prefix()
            }
            Address::PayToPublicKeyHash { network_kind, .. } => {
                network_kind.b58_pubkey_address_prefix()
            }
        }
    }

    /// Returns the standard locking script that pays to this address.
    pub fn script(&self) -> Script {
        let hash = self.hash_bytes();

        let script = match self {
            // OP_HASH160 <hash> OP_EQUAL
            Address::PayToScriptHash { .. } => [
                &[OpCode::Hash160 as u8, OpCode::Push20Bytes as u8][..],
                &hash[..],
                &[OpCode::Equal as u8][..],
            ]
            .concat(),

            // OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG
            Address::PayToPublicKeyHash { .. } => [
                &[
                    OpCode::Dup as u8,
                    OpCode::Hash160 as u8,
                    OpCode::Push20Bytes as u8,
                ][..],
                &hash[..],
                &[OpCode::EqualVerify as u8, OpCode::CheckSig as u8][..],
            ]
            .concat(),
        };

        Script::new(&script)
    }
}
