//! Network upgrade consensus parameters for Lotus.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{block, chain_tip::ChainTip, parameters::ConsensusParams};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// A Lotus network upgrade that changed the coinbase payout rules.
///
/// Network upgrades are listed in activation order. Upgrades after
/// [`NetworkUpgrade::Ruth`] are configured as miner fund epochs instead of
/// named upgrades, see [`ConsensusParams::epochs`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum NetworkUpgrade {
    /// The protocol rules of the genesis block, which apply until the first upgrade.
    Genesis,
    /// The first miner fund upgrade.
    Exodus,
    /// The upgrade after Exodus.
    Leviticus,
    /// The first upgrade that pays a single rotating beneficiary.
    Numbers,
    /// The upgrade after Numbers.
    Deuteronomy,
    /// The upgrade after Deuteronomy.
    Joshua,
    /// The upgrade after Joshua.
    Judges,
    /// The upgrade that burns the miner fund, activated at 2024-12-21T09:20:00Z on Mainnet.
    Ruth,
}

impl fmt::Display for NetworkUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Same as the debug representation for now
        fmt::Debug::fmt(self, f)
    }
}

/// The predicate that activates a network upgrade.
///
/// Each upgrade keeps the predicate it was originally defined with: already
/// settled chain history depends on the exact predicate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Active once the previous block is at or above this height.
    Height(block::Height),

    /// Active once the previous block's median time past is at or after this time.
    MedianTime(DateTime<Utc>),
}

impl Activation {
    /// Returns `true` if a block built on `previous` follows the activated rules.
    pub fn is_active(&self, previous: &impl ChainTip) -> bool {
        match self {
            Activation::Height(height) => previous.height() >= *height,
            Activation::MedianTime(time) => previous.median_time_past() >= *time,
        }
    }
}

impl NetworkUpgrade {
    /// All the network upgrades, newest first.
    pub const NEWEST_FIRST: [NetworkUpgrade; 8] = [
        NetworkUpgrade::Ruth,
        NetworkUpgrade::Judges,
        NetworkUpgrade::Joshua,
        NetworkUpgrade::Deuteronomy,
        NetworkUpgrade::Numbers,
        NetworkUpgrade::Leviticus,
        NetworkUpgrade::Exodus,
        NetworkUpgrade::Genesis,
    ];

    /// Returns the activation predicate of this upgrade in `params`.
    ///
    /// Returns `None` for [`NetworkUpgrade::Genesis`], which is always active,
    /// and for upgrades that are not scheduled in `params`.
    pub fn activation(&self, params: &ConsensusParams) -> Option<Activation> {
        let upgrades = &params.upgrades;

        match self {
            NetworkUpgrade::Genesis => None,
            NetworkUpgrade::Exodus => upgrades.exodus,
            NetworkUpgrade::Leviticus => upgrades.leviticus,
            NetworkUpgrade::Numbers => upgrades.numbers,
            NetworkUpgrade::Deuteronomy => upgrades.deuteronomy,
            NetworkUpgrade::Joshua => upgrades.joshua,
            NetworkUpgrade::Judges => upgrades.judges,
            NetworkUpgrade::Ruth => upgrades.ruth,
        }
    }

    /// Returns `true` if a block built on `previous` follows the rules of this upgrade.
    pub fn is_active(&self, params: &ConsensusParams, previous: &impl ChainTip) -> bool {
        match self.activation(params) {
            Some(activation) => activation.is_active(previous),
            None => *self == NetworkUpgrade::Genesis,
        }
    }
}
