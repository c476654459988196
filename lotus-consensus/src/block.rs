//! Consensus checks for the coinbase transaction of a block.

pub mod check;
pub mod subsidy;
