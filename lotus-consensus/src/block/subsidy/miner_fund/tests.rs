//! Tests for the coinbase miner fund.

use chrono::{DateTime, Utc};

use lotus_chain::{
    amount::{Amount, NonNegative},
    block,
    chain_tip::ChainTipInfo,
    parameters::{CoinbasePayoutAddresses, ConsensusParams, NetworkKind},
    transparent::{Address, Output},
};
use lotus_test::vectors::{BASE58_BENEFICIARIES, BASE58_P2PKH};

use super::*;


/// The capped miner fund used by the test parameters.
const CAPPED_MINER_FUND: i64 = 200;

fn sats(satoshis: i64) -> Amount<NonNegative> {
    Amount::try_from(satoshis).expect("test amounts are valid")
}

fn time(s: &str) -> DateTime<Utc> {
    s.parse().expect("test times are valid RFC 3339")
}

fn tip(height: u32, median_time_past: DateTime<Utc>) -> ChainTipInfo {
    ChainTipInfo::new(block::Height(height), median_time_past)
}

/// Returns the first `n` Base58Check beneficiaries, which pay to the hashes `[1; 20]`, `[2; 20]`, ...
fn beneficiaries(n: usize) -> Vec<String> {
    BASE58_BENEFICIARIES[..n]
        .iter()
        .map(|address| address.to_string())
        .collect()
}

/// Returns the output paying `satoshis` to the beneficiary with the hash `[n; 20]`.
fn beneficiary_output(n: u8, satoshis: i64) -> Output {
    let address = Address::from_pub_key_hash(NetworkKind::Mainnet, [n; 20]);

    Output::new(sats(satoshis), address.script())
}

/// Returns parameters without epochs or scheduled upgrades.
fn genesis_params(genesis: Vec<String>) -> ConsensusParams {
    ConsensusParams::new(
        sats(CAPPED_MINER_FUND),
        CoinbasePayoutAddresses {
            genesis,
            burn_address: Some(BASE58_P2PKH.to_string()),
            ..Default::default()
        },
    )
}
