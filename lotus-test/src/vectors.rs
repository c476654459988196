//! Fixed test vectors for the Lotus miner fund engine.

mod addresses;

pub use addresses::*;
