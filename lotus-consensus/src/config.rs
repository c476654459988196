//! Configuration for the coinbase miner fund rules.

use serde::{Deserialize, Serialize};

/// Configuration for the coinbase miner fund rules.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Should block templates and block validation require the miner fund outputs?
    ///
    /// # Security
    ///
    /// Disabling this option makes the node build and accept coinbase
    /// transactions that the rest of the network rejects.
    /// This is a developer-only option, for local test networks.
    pub enable_miner_fund: bool,
}

// we like our default configs to be explicit
#[allow(unknown_lints)]
#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            enable_miner_fund: true,
        }
    }
}
