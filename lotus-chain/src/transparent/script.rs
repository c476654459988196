//! Bitcoin script for Lotus

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::{
    serialization::{LotusSerialize, WriteLotusExt},
    transparent::opcodes::OpCode,
};

/// Scripts longer than this are rejected by script evaluation, so outputs
/// locked by them can never be spent.
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// An encoding of a Bitcoin script.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(
    any(test, feature = "proptest-impl"),
    derive(proptest_derive::Arbitrary)
)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new Bitcoin script from its raw bytes.
    /// The raw bytes must not contain the length prefix.
    pub fn new(raw_bytes: &[u8]) -> Self {
        Script(raw_bytes.to_vec())
    }

    /// Returns the script of a burn output: a bare `OP_RETURN`.
    ///
    /// Value locked by this script is removed from the spendable supply.
    pub fn new_burn() -> Self {
        Script(vec![OpCode::Return as u8])
    }

    /// Returns `true` if no transaction can ever spend an output locked by this script.
    pub fn is_provably_unspendable(&self) -> bool {
        self.0.first() == Some(&(OpCode::Return as u8)) || self.0.len() > MAX_SCRIPT_SIZE
    }

    /// Return the raw bytes of the script without the length prefix.
    ///
    /// # Correctness
    ///
    /// These raw bytes do not have a length prefix.
    /// The transaction format requires a length prefix; use `lotus_serialize`
    /// to create byte data with a length prefix.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Script")
            .field(&hex::encode(&self.0))
            .finish()
    }
}

impl LotusSerialize for Script {
    fn lotus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_compactsize(self.0.len() as u64)?;
        writer.write_all(&self.0[..])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burn_script_is_unspendable() {
        lotus_test::init();

        let burn = Script::new_burn();

        assert_eq!(burn.as_raw_bytes(), [0x6a]);
        assert!(burn.is_provably_unspendable());
        assert!(!Script::new(&[]).is_provably_unspendable());
        assert!(!Script::new(&[0x76, 0xa9]).is_provably_unspendable());
        assert!(Script::new(&vec![0x00; MAX_SCRIPT_SIZE + 1]).is_provably_unspendable());
    }

    #[test]
    fn script_serializes_with_length_prefix() -> color_eyre::Result<()> {
        lotus_test::init();

        let script = Script::new(&[0x6a, 0x01, 0x02]);

        assert_eq!(script.lotus_serialize_to_vec()?, [0x03, 0x6a, 0x01, 0x02]);

        Ok(())
    }
}
