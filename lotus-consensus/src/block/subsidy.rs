//! Coinbase rewards that must be paid to parties other than the miner.

pub mod miner_fund;
