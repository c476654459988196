//! Errors that can occur when building or checking the coinbase miner fund.
//!
//! Every error here comes from the consensus parameter table or the coinbase
//! being checked, so it recurs identically if the same call is repeated.

use thiserror::Error;

use lotus_chain::{
    amount, block,
    transparent::{cashaddr, AddressError, Output},
};

/// An error in the miner fund outputs of a coinbase transaction.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SubsidyError {
    #[error("payout address {address:?} is neither a mainnet Base58Check address ({base58}) nor a CashAddr ({cashaddr})")]
    InvalidDestination {
        address: String,
        base58: AddressError,
        cashaddr: cashaddr::Error,
    },

    #[error("invalid {label} payout address")]
    InvalidPayoutAddress {
        label: &'static str,
        #[source]
        source: Box<SubsidyError>,
    },

    #[error("the active miner fund rule has no beneficiaries")]
    NoBeneficiaries,

    #[error("{feature} is paid but has no payout address")]
    MissingPayoutAddress { feature: &'static str },

    #[error("the block after height {0} is above the maximum block height")]
    MaxHeight(block::Height),

    #[error("invalid miner fund amount")]
    Amount(#[from] amount::Error),

    #[error("required miner fund output not found in coinbase: {0:?}")]
    MinerFundOutputNotFound(Output),
}
