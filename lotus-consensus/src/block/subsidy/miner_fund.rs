//! The coinbase miner fund.
//!
//! Every coinbase transaction must pay part of the block reward to the miner
//! fund. The payout rule in force depends on the previous block:
//!
//! 1. Miner fund epochs, which activate at a median time past. The newest
//!    active epoch with beneficiaries pays a capped miner fund.
//! 2. Otherwise, the newest active legacy network upgrade. Each upgrade keeps
//!    the height or time predicate it was originally activated with.
//!
//! Blocks without a previous block, and nodes with the miner fund disabled,
//! have no miner fund outputs.

use std::fmt;

use tracing::{debug, trace};

use lotus_chain::{
    amount::{Amount, NonNegative},
    chain_tip::ChainTip,
    parameters::{ConsensusParams, NetworkUpgrade},
};

use crate::error::SubsidyError;

mod distribution;
mod outputs;

pub use distribution::{
    capped_funding, rotating_beneficiary, Distribution, MinerFundOutputs, MINER_FUND_BUCKETS,
};
pub use outputs::{
    burn_output, check_payout_addresses, payout_output, resolve_destination,
    PAYOUT_ADDRESS_NETWORK, PAYOUT_CASHADDR_PREFIX,
};

#[cfg(test)]
mod tests;

/// The payout topology of a legacy network upgrade.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LegacyPayout {
    /// [`Distribution::Cycling`] over the upgrade's beneficiaries.
    Cycling,
    /// [`Distribution::FanOut`] over the upgrade's beneficiaries.
    FanOut,
    /// [`Distribution::FullBurn`].
    FullBurn,
}

/// The legacy network upgrades and their payouts, newest first.
///
/// The first active upgrade sets the payout rule. [`NetworkUpgrade::Genesis`]
/// is always active, so there is always a match.
pub const LEGACY_ERAS: [(NetworkUpgrade, LegacyPayout); 8] = [
    (NetworkUpgrade::Ruth, LegacyPayout::FullBurn),
    (NetworkUpgrade::Judges, LegacyPayout::Cycling),
    (NetworkUpgrade::Joshua, LegacyPayout::Cycling),
    (NetworkUpgrade::Deuteronomy, LegacyPayout::Cycling),
    (NetworkUpgrade::Numbers, LegacyPayout::Cycling),
    (NetworkUpgrade::Leviticus, LegacyPayout::FanOut),
    (NetworkUpgrade::Exodus, LegacyPayout::FanOut),
    (NetworkUpgrade::Genesis, LegacyPayout::FanOut),
];

/// The rule that selected a miner fund [`Distribution`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PayoutRule {
    /// The miner fund epoch at this index in [`ConsensusParams::epochs`].
    Epoch(usize),

    /// A legacy network upgrade.
    Upgrade(NetworkUpgrade),
}

impl fmt::Display for PayoutRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutRule::Epoch(index) => write!(f, "epoch {index}"),
            PayoutRule::Upgrade(upgrade) => write!(f, "{upgrade} upgrade"),
        }
    }
}

/// Returns the miner fund outputs required in the coinbase of the block after `previous`.
///
/// Returns no outputs if the miner fund is not `enabled`, or if there is no
/// previous block. `reward` is the block reward of the new block.
///
/// # Correctness
///
/// Every node must compute the same outputs for the same chain, so `params`
/// must not change while the node is running.
pub fn required_outputs<T: ChainTip>(
    params: &ConsensusParams,
    enabled: bool,
    previous: Option<&T>,
    reward: Amount<NonNegative>,
) -> Result<MinerFundOutputs, SubsidyError> {
    if !enabled {
        trace!("miner fund is disabled");
        return Ok(MinerFundOutputs::none(reward));
    }

    let Some(previous) = previous else {
        trace!("no previous block, so no miner fund");
        return Ok(MinerFundOutputs::none(reward));
    };

    let height = previous
        .next_block_height()
        .ok_or(SubsidyError::MaxHeight(previous.height()))?;

    let (rule, distribution) = select_distribution(params, previous);

    debug!(?height, %rule, %reward, "selected miner fund payout rule");

    distribution.outputs(params, height, reward)
}

/// Returns the payout rule and distribution for the block after `previous`.
pub fn select_distribution<'p>(
    params: &'p ConsensusParams,
    previous: &impl ChainTip,
) -> (PayoutRule, Distribution<'p>) {
    if let Some((epoch, beneficiaries)) = active_epoch(params, previous) {
        return (
            PayoutRule::Epoch(epoch),
            Distribution::CyclingCapped {
                beneficiaries,
                epoch,
            },
        );
    }

    let (upgrade, payout) = LEGACY_ERAS
        .into_iter()
        .find(|(upgrade, _)| upgrade.is_active(params, previous))
        .unwrap_or((NetworkUpgrade::Genesis, LegacyPayout::FanOut));

    let beneficiaries = params.payout_addresses.upgrade_beneficiaries(upgrade);

    let distribution = match payout {
        LegacyPayout::Cycling => Distribution::Cycling(beneficiaries),
        LegacyPayout::FanOut => Distribution::FanOut(beneficiaries),
        LegacyPayout::FullBurn => Distribution::FullBurn,
    };

    (PayoutRule::Upgrade(upgrade), distribution)
}

/// Returns the index and beneficiaries of the newest active epoch with
/// beneficiaries, or `None` if there isn't one.
///
/// Active epochs without beneficiaries are skipped, so an epoch can be
/// scheduled before its beneficiaries are known.
fn active_epoch<'p>(
    params: &'p ConsensusParams,
    previous: &impl ChainTip,
) -> Option<(usize, &'p [String])> {
    let median_time_past = previous.median_time_past();

    // Epochs are ordered, so if the oldest epoch isn't active, none are.
    if median_time_past < params.epochs.first()?.activation_time {
        return None;
    }

    params
        .epochs
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, epoch)| epoch.activation_time <= median_time_past)
        .find(|(index, epoch)| {
            if !epoch.is_configured() {
                trace!(epoch = *index, "skipping active epoch without beneficiaries");
            }

            epoch.is_configured()
        })
        .map(|(index, epoch)| (index, epoch.beneficiaries.as_slice()))
}
