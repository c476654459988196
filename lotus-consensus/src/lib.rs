//! Coinbase miner fund consensus rules for Lotus.
//!
//! Every Lotus coinbase transaction must contain the miner fund outputs
//! required by the consensus rules in force at its height. This crate computes
//! those outputs from the previous block, the consensus parameters and the
//! block reward, and checks that a coinbase contains them.
//!
//! The rules are pure functions of their inputs: they don't read clocks, do
//! any I/O, or keep state between calls. Block template construction and
//! block validation can call them concurrently.

#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

mod config;

pub mod block;
pub mod error;

pub use block::{
    check::{check_miner_fund_outputs, miner_fund_is_valid},
    subsidy::miner_fund::{
        burn_output, check_payout_addresses, payout_output, required_outputs,
        resolve_destination, select_distribution, Distribution, LegacyPayout, MinerFundOutputs,
        PayoutRule, LEGACY_ERAS,
    },
};
pub use config::Config;
pub use error::SubsidyError;
