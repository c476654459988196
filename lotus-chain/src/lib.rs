//! Core Lotus data structures.
//!
//! This crate provides the chain data types used by the coinbase miner fund
//! rules: satoshi amounts, block heights, transparent addresses and outputs,
//! the two address encodings, networks and network upgrades, and the
//! consensus parameter table.

#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

pub mod amount;
pub mod block;
pub mod chain_tip;
pub mod parameters;
pub mod serialization;
pub mod transparent;
