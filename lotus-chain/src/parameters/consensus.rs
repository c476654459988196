//! The consensus parameter table used to build coinbase miner fund outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    amount::{Amount, NonNegative},
    parameters::{Activation, NetworkUpgrade},
};

/// Chain-wide consensus parameters for the coinbase miner fund.
///
/// These parameters are loaded once at startup, checked with
/// [`ConsensusParams::validate`], and never mutated afterwards. Share them
/// by reference or in an `Arc`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsensusParams {
    /// Miner fund epochs, oldest first.
    ///
    /// Activation times must be strictly increasing. New epochs are appended.
    #[serde(default)]
    pub epochs: Vec<Epoch>,

    /// The funding cap of the first epoch generation, which pays one
    /// rotating beneficiary and burns the rest of the block reward.
    pub capped_miner_fund: Amount<NonNegative>,

    /// The second epoch generation, which splits the funding into buckets.
    #[serde(default)]
    pub bucketed_miner_fund: Option<BucketedMinerFund>,

    /// Activation predicates of the legacy network upgrades.
    #[serde(default)]
    pub upgrades: UpgradeActivations,

    /// Payout addresses of the legacy network upgrades and the miner fund buckets.
    pub payout_addresses: CoinbasePayoutAddresses,
}

/// A miner fund epoch: an activation time and the beneficiaries paid from then on.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Epoch {
    /// The median time past at which this epoch activates.
    pub activation_time: DateTime<Utc>,

    /// The rotating beneficiaries of this epoch.
    ///
    /// An empty list means the epoch is not configured yet, and blocks keep
    /// following the rules of the previous configured epoch.
    #[serde(default)]
    pub beneficiaries: Vec<String>,
}

impl Epoch {
    /// Creates a new [`Epoch`].
    pub fn new<I, T>(activation_time: DateTime<Utc>, beneficiaries: I) -> Self
    where
        T: ToString,
        I: IntoIterator<Item = T>,
    {
        Self {
            activation_time,
            beneficiaries: beneficiaries
                .into_iter()
                .map(|address| address.to_string())
                .collect(),
        }
    }

    /// Returns `true` if this epoch has beneficiaries.
    pub fn is_configured(&self) -> bool {
        !self.beneficiaries.is_empty()
    }
}

/// The bucketed miner fund generation.
///
/// From `from_epoch` onwards, the miner fund is capped at `cap` and split
/// into three equal buckets: the rotating beneficiary, staking rewards, and
/// the community fund. The last two are burned until their epochs activate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketedMinerFund {
    /// The index of the first epoch that uses bucketed funding.
    pub from_epoch: usize,

    /// The funding cap of bucketed epochs.
    pub cap: Amount<NonNegative>,

    /// The index of the first epoch that pays staking rewards.
    #[serde(default)]
    pub staking_rewards_epoch: Option<usize>,

    /// The index of the first epoch that pays the community fund.
    #[serde(default)]
    pub community_fund_epoch: Option<usize>,
}

/// Activation predicates of the legacy network upgrades.
///
/// Unscheduled upgrades are never active. [`NetworkUpgrade::Genesis`] is
/// always active, so it has no entry here.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UpgradeActivations {
    /// [`NetworkUpgrade::Exodus`]
    pub exodus: Option<Activation>,
    /// [`NetworkUpgrade::Leviticus`]
    pub leviticus: Option<Activation>,
    /// [`NetworkUpgrade::Numbers`]
    pub numbers: Option<Activation>,
    /// [`NetworkUpgrade::Deuteronomy`]
    pub deuteronomy: Option<Activation>,
    /// [`NetworkUpgrade::Joshua`]
    pub joshua: Option<Activation>,
    /// [`NetworkUpgrade::Judges`]
    pub judges: Option<Activation>,
    /// [`NetworkUpgrade::Ruth`]
    pub ruth: Option<Activation>,
}

/// Coinbase payout addresses, as human-readable address strings.
///
/// Addresses may use either the Base58Check or the CashAddr encoding.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CoinbasePayoutAddresses {
    /// Beneficiaries before the first upgrade.
    pub genesis: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Exodus`].
    pub exodus: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Leviticus`].
    pub leviticus: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Numbers`].
    pub numbers: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Deuteronomy`].
    pub deuteronomy: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Joshua`].
    pub joshua: Vec<String>,
    /// Beneficiaries from [`NetworkUpgrade::Judges`].
    pub judges: Vec<String>,

    /// The published burn address.
    ///
    /// Burned miner fund outputs use a provably unspendable script instead of
    /// paying this address, so it is only checked when parameters are loaded.
    pub burn_address: Option<String>,

    /// The staking rewards bucket address.
    pub staking_rewards: Option<String>,

    /// The community fund bucket address.
    pub community_fund: Option<String>,
}

impl CoinbasePayoutAddresses {
    /// Returns the beneficiaries of a legacy network upgrade.
    ///
    /// [`NetworkUpgrade::Ruth`] burns the miner fund, so it has no beneficiaries.
    pub fn upgrade_beneficiaries(&self, upgrade: NetworkUpgrade) -> &[String] {
        match upgrade {
            NetworkUpgrade::Genesis => &self.genesis,
            NetworkUpgrade::Exodus => &self.exodus,
            NetworkUpgrade::Leviticus => &self.leviticus,
            NetworkUpgrade::Numbers => &self.numbers,
            NetworkUpgrade::Deuteronomy => &self.deuteronomy,
            NetworkUpgrade::Joshua => &self.joshua,
            NetworkUpgrade::Judges => &self.judges,
            NetworkUpgrade::Ruth => &[],
        }
    }

    /// Returns every configured address string, with a label for error reports.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let lists = [
            ("genesis", &self.genesis),
            ("exodus", &self.exodus),
            ("leviticus", &self.leviticus),
            ("numbers", &self.numbers),
            ("deuteronomy", &self.deuteronomy),
            ("joshua", &self.joshua),
            ("judges", &self.judges),
        ];

        let singles = [
            ("burn_address", &self.burn_address),
            ("staking_rewards", &self.staking_rewards),
            ("community_fund", &self.community_fund),
        ];

        lists
            .into_iter()
            .flat_map(|(label, addresses)| {
                addresses.iter().map(move |address| (label, address.as_str()))
            })
            .chain(
                singles
                    .into_iter()
                    .filter_map(|(label, address)| Some((label, address.as_deref()?))),
            )
    }
}

/// How the miner fund of an epoch is split.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MinerFundSplit {
    /// One rotating beneficiary is paid up to `cap`, and the rest of the
    /// block reward is burned.
    Capped {
        /// The funding cap.
        cap: Amount<NonNegative>,
    },

    /// The funding is capped at `cap` and split into three equal buckets.
    Bucketed {
        /// The funding cap.
        cap: Amount<NonNegative>,
        /// Pay the staking rewards bucket instead of burning it.
        staking_rewards: bool,
        /// Pay the community fund bucket instead of burning it.
        community_fund: bool,
    },
}

/// Errors in a consensus parameter table.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParameterError {
    #[error("epoch {index} activates at {time}, which is not after the previous epoch")]
    UnorderedEpochs { index: usize, time: DateTime<Utc> },

    #[error("{feature} activates at epoch {epoch}, before bucketed funding starts at epoch {from_epoch}")]
    FeatureBeforeBucketedFunding {
        feature: &'static str,
        epoch: usize,
        from_epoch: usize,
    },

    #[error("{feature} is scheduled but has no payout address")]
    MissingPayoutAddress { feature: &'static str },

    #[error("{upgrade} is scheduled but has no beneficiaries")]
    MissingBeneficiaries { upgrade: NetworkUpgrade },
}

impl ConsensusParams {
    /// Creates parameters without epochs or scheduled upgrades, paying the
    /// genesis beneficiaries in `payout_addresses`.
    pub fn new(
        capped_miner_fund: Amount<NonNegative>,
        payout_addresses: CoinbasePayoutAddresses,
    ) -> Self {
        Self {
            epochs: Vec::new(),
            capped_miner_fund,
            bucketed_miner_fund: None,
            upgrades: UpgradeActivations::default(),
            payout_addresses,
        }
    }

    /// Returns how the miner fund of the epoch at `epoch_index` is split.
    pub fn miner_fund_split(&self, epoch_index: usize) -> MinerFundSplit {
        match &self.bucketed_miner_fund {
            Some(bucketed) if epoch_index >= bucketed.from_epoch => MinerFundSplit::Bucketed {
                cap: bucketed.cap,
                staking_rewards: bucketed
                    .staking_rewards_epoch
                    .is_some_and(|epoch| epoch_index >= epoch),
                community_fund: bucketed
                    .community_fund_epoch
                    .is_some_and(|epoch| epoch_index >= epoch),
            },
            _ => MinerFundSplit::Capped {
                cap: self.capped_miner_fund,
            },
        }
    }

    /// Checks the structure of these parameters.
    ///
    /// This doesn't decode addresses: address encodings are checked by the
    /// consensus crate, which owns the address resolution rules.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (index, pair) in self.epochs.windows(2).enumerate() {
            if pair[1].activation_time <= pair[0].activation_time {
                return Err(ParameterError::UnorderedEpochs {
                    index: index + 1,
                    time: pair[1].activation_time,
                });
            }
        }

        if let Some(bucketed) = &self.bucketed_miner_fund {
            let features = [
                (
                    "staking rewards",
                    bucketed.staking_rewards_epoch,
                    &self.payout_addresses.staking_rewards,
                ),
                (
                    "community fund",
                    bucketed.community_fund_epoch,
                    &self.payout_addresses.community_fund,
                ),
            ];

            for (feature, epoch, address) in features {
                let Some(epoch) = epoch else {
                    continue;
                };

                if epoch < bucketed.from_epoch {
                    return Err(ParameterError::FeatureBeforeBucketedFunding {
                        feature,
                        epoch,
                        from_epoch: bucketed.from_epoch,
                    });
                }

                if address.is_none() {
                    return Err(ParameterError::MissingPayoutAddress { feature });
                }
            }
        }

        for upgrade in NetworkUpgrade::NEWEST_FIRST {
            let scheduled =
                upgrade == NetworkUpgrade::Genesis || upgrade.activation(self).is_some();

            if scheduled
                && upgrade != NetworkUpgrade::Ruth
                && self.payout_addresses.upgrade_beneficiaries(upgrade).is_empty()
            {
                return Err(ParameterError::MissingBeneficiaries { upgrade });
            }
        }

        debug!(
            epochs = self.epochs.len(),
            bucketed = self.bucketed_miner_fund.is_some(),
            "validated consensus parameters"
        );

        Ok(())
    }
}
