//! Consensus check functions

use lotus_chain::{
    amount::{Amount, NonNegative},
    chain_tip::ChainTip,
    parameters::ConsensusParams,
    transparent::Output,
};

use crate::{block::subsidy::miner_fund, error::SubsidyError, Config};

/// Returns `Ok(())` if every `required` output is in `coinbase_outputs`.
///
/// Outputs match if they have the same value and lock script. Each coinbase
/// output can only match one required output, so repeated required outputs
/// must be repeated in the coinbase. The coinbase can also have other outputs,
/// and can order its outputs in any way.
pub fn check_miner_fund_outputs(
    coinbase_outputs: &[Output],
    required: &[Output],
) -> Result<(), SubsidyError> {
    let mut unmatched: Vec<&Output> = coinbase_outputs.iter().collect();

    for output in required {
        let position = unmatched
            .iter()
            .position(|coinbase_output| *coinbase_output == output)
            .ok_or_else(|| SubsidyError::MinerFundOutputNotFound(output.clone()))?;

        unmatched.swap_remove(position);
    }

    Ok(())
}

/// Returns `Ok(())` if `coinbase_outputs` pays the miner fund required in
/// the block after `previous`.
///
/// Nothing is required if `config` disables the miner fund.
/// See [`miner_fund::required_outputs`] for the rules.
pub fn miner_fund_is_valid<T: ChainTip>(
    coinbase_outputs: &[Output],
    params: &ConsensusParams,
    config: &Config,
    previous: Option<&T>,
    reward: Amount<NonNegative>,
) -> Result<(), SubsidyError> {
    let required =
        miner_fund::required_outputs(params, config.enable_miner_fund, previous, reward)?;

    check_miner_fund_outputs(coinbase_outputs, required.outputs())
}
