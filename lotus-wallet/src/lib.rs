//! Wallet entry points for Lotus nodes built without wallet support.
//!
//! The node calls into the wallet through [`WalletInit`] and the functions in
//! this crate. In a build without a wallet, [`DummyWalletInit`] accepts and
//! ignores the wallet options, and every other wallet function returns
//! [`WalletError::NotSupported`].

#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::info;

use lotus_chain::parameters::Network;


/// Wallet options accepted and ignored by builds without a wallet, so that
/// config files written for wallet builds still load.
pub const HIDDEN_WALLET_OPTIONS: &[&str] = &[
    "-avoidpartialspends",
    "-disablewallet",
    "-fallbackfee=<amt>",
    "-keypool=<n>",
    "-maxtxfee=<amt>",
    "-mintxfee=<amt>",
    "-paytxfee=<amt>",
    "-rescan",
    "-salvagewallet",
    "-spendzeroconfchange",
    "-upgradewallet",
    "-wallet=<path>",
    "-walletbroadcast",
    "-walletdir=<dir>",
    "-walletnotify=<cmd>",
    "-zapwallettxes=<mode>",
    // Debug options
    "-dblogsize=<n>",
    "-flushwallet",
    "-privdb",
    "-walletrejectlongchains",
];

/// An error from a wallet entry point.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalletError {
    /// The node was built without wallet support.
    #[error("Wallet function called in non-wallet build: {function}")]
    NotSupported {
        /// The wallet function that was called.
        function: &'static str,
    },
}

/// A loaded wallet.
///
/// Wallets can't be loaded or created without wallet support, so this type
/// has no values.
#[derive(Debug)]
pub enum Wallet {}

/// The node's interface to a [`Wallet`].
#[derive(Debug)]
pub enum WalletInterface {}

/// Wallet setup hooks, called by the node during startup.
pub trait WalletInit {
    /// Returns `true` if the node was built with wallet support.
    fn has_wallet_support(&self) -> bool;

    /// Returns the wallet options the node accepts.
    fn wallet_options(&self) -> &'static [&'static str];

    /// Checks the wallet options against the other node options.
    ///
    /// Returns `false` if the node should not start.
    fn parameter_interaction(&self) -> bool;

    /// Adds the wallets to a node running on `network`.
    fn construct(&self, network: Network);
}

/// The [`WalletInit`] of builds without wallet support.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DummyWalletInit;

/// The wallet setup hooks of this build.
pub static WALLET_INIT: DummyWalletInit = DummyWalletInit;

impl WalletInit for DummyWalletInit {
    fn has_wallet_support(&self) -> bool {
        false
    }

    /// Returns [`HIDDEN_WALLET_OPTIONS`].
    fn wallet_options(&self) -> &'static [&'static str] {
        HIDDEN_WALLET_OPTIONS
    }

    fn parameter_interaction(&self) -> bool {
        true
    }

    fn construct(&self, network: Network) {
        info!(%network, "No wallet support compiled in!");
    }
}

/// Returns the directory that holds the wallets.
pub fn wallet_dir() -> Result<PathBuf, WalletError> {
    Err(WalletError::NotSupported {
        function: "wallet_dir",
    })
}

/// Returns the paths of the wallets in the wallet directory.
pub fn list_wallet_dir() -> Result<Vec<PathBuf>, WalletError> {
    Err(WalletError::NotSupported {
        function: "list_wallet_dir",
    })
}

/// Returns the loaded wallets.
pub fn wallets() -> Result<Vec<Arc<Wallet>>, WalletError> {
    Err(WalletError::NotSupported {
        function: "wallets",
    })
}

/// Loads the wallet called `name` for `network`.
pub fn load_wallet(_network: Network, _name: &str) -> Result<Arc<Wallet>, WalletError> {
    Err(WalletError::NotSupported {
        function: "load_wallet",
    })
}

/// Creates a wallet called `name` for `network`, encrypted with `passphrase`
/// if it isn't empty.
pub fn create_wallet(
    _network: Network,
    _passphrase: &str,
    _creation_flags: u64,
    _name: &str,
) -> Result<Arc<Wallet>, WalletError> {
    Err(WalletError::NotSupported {
        function: "create_wallet",
    })
}

/// Wraps `wallet` in the node's wallet interface.
pub fn make_wallet(_wallet: Arc<Wallet>) -> Result<WalletInterface, WalletError> {
    Err(WalletError::NotSupported {
        function: "make_wallet",
    })
}
