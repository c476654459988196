//! Transparent-related (Bitcoin-inherited) functionality.

mod address;
mod opcodes;
mod script;

pub mod cashaddr;

pub use address::{Address, AddressError};
pub use script::{Script, MAX_SCRIPT_SIZE};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;
#[cfg(test)]
mod prop;
#[cfg(test)]
mod tests;

use std::io;

use serde::{Deserialize, Serialize};

use crate::{
    amount::{Amount, NonNegative},
    serialization::LotusSerialize,
};

/// A transparent output from a transaction.
///
/// Coinbase transactions must include the miner fund outputs required by
/// consensus, next to the outputs the miner pays to themselves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Output {
    /// Transaction value.
    // At https://en.bitcoin.it/wiki/Protocol_documentation#tx, this is an i64.
    pub value: Amount<NonNegative>,

    /// The lock script defines the conditions under which this output can be spent.
    pub lock_script: Script,
}

impl Output {
    /// Returns a new [`Output`].
    pub fn new(value: Amount<NonNegative>, lock_script: Script) -> Self {
        Self { value, lock_script }
    }

    /// Returns `true` if this output removes its value from circulation.
    pub fn is_burn(&self) -> bool {
        self.lock_script.is_provably_unspendable()
    }

    /// Get the value contained in this output.
    /// This amount is subtracted from the transaction value pool by this output.
    pub fn value(&self) -> Amount<NonNegative> {
        self.value
    }
}

impl LotusSerialize for Output {
    fn lotus_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.value.to_bytes())?;
        self.lock_script.lotus_serialize(&mut writer)?;
        Ok(())
    }
}
