//! Consensus parameters for each Lotus network.
//!
//! This module contains the consensus parameters which are required for
//! building and verifying coinbase transactions.
//!
//! Some consensus parameters change based on network upgrades. Each legacy
//! network upgrade activates at a block height or at a median time past,
//! depending on how it was originally defined. Miner fund epochs always
//! activate at a median time past.
//!
//! Typically, consensus parameters are accessed via a [`ConsensusParams`]
//! reference that is loaded once at startup and never mutated.

mod consensus;
mod network;
mod network_upgrade;

pub use consensus::{
    BucketedMinerFund, CoinbasePayoutAddresses, ConsensusParams, Epoch, MinerFundSplit,
    ParameterError, UpgradeActivations,
};
pub use network::{Network, NetworkKind};
pub use network_upgrade::{Activation, NetworkUpgrade};
