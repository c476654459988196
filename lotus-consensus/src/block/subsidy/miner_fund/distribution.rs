//! Miner fund distribution strategies.
//!
//! Each strategy turns a beneficiary list, the candidate block height, and
//! the block reward into an ordered list of outputs. All divisions are floor
//! divisions, and zero-value outputs are omitted.

use std::cmp::min;

use lotus_chain::{
    amount::{self, Amount, NonNegative},
    block,
    parameters::{ConsensusParams, MinerFundSplit},
    transparent::Output,
};

use crate::{
    block::subsidy::miner_fund::{burn_output, payout_output},
    error::SubsidyError,
};

/// The number of equal buckets the bucketed miner fund is split into.
pub const MINER_FUND_BUCKETS: u64 = 3;

/// How the miner fund of a block is distributed.
///
/// Beneficiary lists are borrowed from the [`ConsensusParams`] that selected them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Distribution<'p> {
    /// Half the block reward pays the beneficiary at `height % beneficiaries.len()`.
    Cycling(&'p [String]),

    /// The capped miner fund of the epoch at index `epoch`, paying the
    /// beneficiary at `height % beneficiaries.len()`.
    ///
    /// The epoch index selects the split, see [`ConsensusParams::miner_fund_split`].
    CyclingCapped {
        /// The epoch beneficiaries.
        beneficiaries: &'p [String],
        /// The index of the epoch in [`ConsensusParams::epochs`].
        epoch: usize,
    },

    /// Each beneficiary is paid `reward / (2 * beneficiaries.len())`, in list order.
    FanOut(&'p [String]),

    /// Half the block reward is burned.
    FullBurn,
}

/// The miner fund outputs required in a coinbase transaction, in coinbase order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinerFundOutputs {
    /// The required outputs.
    outputs: Vec<Output>,

    /// The block reward the outputs were computed from.
    reward: Amount<NonNegative>,
}

impl MinerFundOutputs {
    /// Returns an empty output list for `reward`: the miner keeps the whole reward.
    pub fn none(reward: Amount<NonNegative>) -> Self {
        Self {
            outputs: Vec::new(),
            reward,
        }
    }

    /// Returns the required outputs.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Returns the required outputs, consuming `self`.
    pub fn into_outputs(self) -> Vec<Output> {
        self.outputs
    }

    /// Returns the number of required outputs.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Returns `true` if there are no required outputs.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Returns the block reward the outputs were computed from.
    pub fn reward(&self) -> Amount<NonNegative> {
        self.reward
    }

    /// Returns the total value of the required outputs.
    pub fn total(&self) -> Result<Amount<NonNegative>, amount::Error> {
        self.outputs.iter().map(Output::value).sum()
    }

    /// Returns the total value of the required burn outputs.
    pub fn burned(&self) -> Result<Amount<NonNegative>, amount::Error> {
        self.outputs
            .iter()
            .filter(|output| output.is_burn())
            .map(Output::value)
            .sum()
    }

    /// Returns the part of the block reward left for the miner.
    ///
    /// The miner's own outputs are not part of the required outputs.
    pub fn miner_remainder(&self) -> Result<Amount<NonNegative>, amount::Error> {
        self.reward - self.total()?
    }

    /// Adds an output paying `amount` to `address`, unless `amount` is zero.
    ///
    /// The address is always resolved, so a bad address is reported even for
    /// zero amounts.
    fn pay(&mut self, address: &str, amount: Amount<NonNegative>) -> Result<(), SubsidyError> {
        let output = payout_output(address, amount)?;

        if amount.is_positive() {
            self.outputs.push(output);
        }

        Ok(())
    }

    /// Adds an output burning `amount`, unless `amount` is zero.
    fn burn(&mut self, amount: Amount<NonNegative>) {
        if amount.is_positive() {
            self.outputs.push(burn_output(amount));
        }
    }

    /// Pays `amount` to `address` if there is one, and burns it otherwise.
    fn pay_or_burn(
        &mut self,
        address: Option<&str>,
        amount: Amount<NonNegative>,
    ) -> Result<(), SubsidyError> {
        match address {
            Some(address) => self.pay(address, amount),
            None => {
                self.burn(amount);
                Ok(())
            }
        }
    }
}

impl IntoIterator for MinerFundOutputs {
    type Item = Output;
    type IntoIter = std::vec::IntoIter<Output>;

    fn into_iter(self) -> Self::IntoIter {
        self.outputs.into_iter()
    }
}

impl<'p> Distribution<'p> {
    /// Returns the outputs of this distribution for the block at `height` with `reward`.
    pub fn outputs(
        &self,
        params: &ConsensusParams,
        height: block::Height,
        reward: Amount<NonNegative>,
    ) -> Result<MinerFundOutputs, SubsidyError> {
        let mut outputs = MinerFundOutputs::none(reward);

        match *self {
            Distribution::Cycling(beneficiaries) => {
                let beneficiary = rotating_beneficiary(beneficiaries, height)?;
                outputs.pay(beneficiary, (reward / 2)?)?;
            }

            Distribution::CyclingCapped {
                beneficiaries,
                epoch,
            } => {
                let beneficiary = rotating_beneficiary(beneficiaries, height)?;

                match params.miner_fund_split(epoch) {
                    MinerFundSplit::Capped { cap } => {
                        capped_split(&mut outputs, beneficiary, reward, cap)?
                    }
                    MinerFundSplit::Bucketed {
                        cap,
                        staking_rewards,
                        community_fund,
                    } => {
                        let staking_rewards = staking_rewards
                            .then(|| {
                                bucket_address(
                                    &params.payout_addresses.staking_rewards,
                                    "staking rewards",
                                )
                            })
                            .transpose()?;
                        let community_fund = community_fund
                            .then(|| {
                                bucket_address(
                                    &params.payout_addresses.community_fund,
                                    "community fund",
                                )
                            })
                            .transpose()?;

                        bucketed_split(
                            &mut outputs,
                            [Some(beneficiary), staking_rewards, community_fund],
                            reward,
                            cap,
                        )?
                    }
                }
            }

            Distribution::FanOut(beneficiaries) => {
                if beneficiaries.is_empty() {
                    return Err(SubsidyError::NoBeneficiaries);
                }

                let shares = 2 * beneficiaries.len() as u64;
                let share = (reward / shares)?;

                for beneficiary in beneficiaries {
                    outputs.pay(beneficiary, share)?;
                }
            }

            Distribution::FullBurn => outputs.burn((reward / 2)?),
        }

        Ok(outputs)
    }
}

/// Returns the capped miner fund: half the block reward, but at most `cap`.
pub fn capped_funding(
    reward: Amount<NonNegative>,
    cap: Amount<NonNegative>,
) -> Result<Amount<NonNegative>, amount::Error> {
    Ok(min((reward / 2)?, cap))
}

/// Returns the beneficiary of the block at `height`.
///
/// Beneficiaries take turns, in list order, one block each.
pub fn rotating_beneficiary(
    beneficiaries: &[String],
    height: block::Height,
) -> Result<&str, SubsidyError> {
    if beneficiaries.is_empty() {
        return Err(SubsidyError::NoBeneficiaries);
    }

    let index = height.0 as usize % beneficiaries.len();

    Ok(&beneficiaries[index])
}

/// The two-way split: the beneficiary gets the capped miner fund, and
/// everything else in the block reward is burned.
fn capped_split(
    outputs: &mut MinerFundOutputs,
    beneficiary: &str,
    reward: Amount<NonNegative>,
    cap: Amount<NonNegative>,
) -> Result<(), SubsidyError> {
    let share = capped_funding(reward, cap)?;
    outputs.pay(beneficiary, share)?;

    let remaining = (reward - share)?;
    outputs.burn(remaining);

    Ok(())
}

/// The bucketed split: the capped miner fund is split into equal buckets,
/// each paid to its address or burned, then any division leftover is burned.
fn bucketed_split(
    outputs: &mut MinerFundOutputs,
    bucket_addresses: [Option<&str>; MINER_FUND_BUCKETS as usize],
    reward: Amount<NonNegative>,
    cap: Amount<NonNegative>,
) -> Result<(), SubsidyError> {
    let funding = capped_funding(reward, cap)?;
    let bucket = (funding / MINER_FUND_BUCKETS)?;

    for address in bucket_addresses {
        outputs.pay_or_burn(address, bucket)?;
    }

    burn_leftover(outputs, funding, bucket)
}

/// Burns the part of `funding` that doesn't divide evenly into buckets.
fn burn_leftover(
    outputs: &mut MinerFundOutputs,
    funding: Amount<NonNegative>,
    bucket: Amount<NonNegative>,
) -> Result<(), SubsidyError> {
    let leftover = (funding - (bucket * MINER_FUND_BUCKETS)?)?;

    if leftover.is_positive() {
        outputs.burn(leftover);
    }

    Ok(())
}

fn bucket_address<'p>(
    address: &'p Option<String>,
    feature: &'static str,
) -> Result<&'p str, SubsidyError> {
    address
        .as_deref()
        .ok_or(SubsidyError::MissingPayoutAddress { feature })
}
