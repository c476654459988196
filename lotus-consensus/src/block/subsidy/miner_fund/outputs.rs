//! Payout destinations and miner fund output builders.

use lotus_chain::{
    amount::{Amount, NonNegative},
    parameters::{ConsensusParams, Network},
    transparent::{cashaddr, Address, Output, Script},
};

use crate::error::SubsidyError;

/// The network payout addresses are decoded for, whatever network the node runs on.
pub const PAYOUT_ADDRESS_NETWORK: Network = Network::Mainnet;

/// The CashAddr prefix payout addresses are decoded with, when they aren't Base58Check.
pub const PAYOUT_CASHADDR_PREFIX: &str = "bitcoincash";

/// Returns the destination of a payout address from the consensus parameters.
///
/// Tries a mainnet Base58Check address first, then a CashAddr with the
/// `bitcoincash` prefix. Payout addresses come from the consensus parameters,
/// so an address that decodes under neither encoding is a configuration error.
pub fn resolve_destination(address: &str) -> Result<Address, SubsidyError> {
    let base58 = match Address::decode_base58(address, PAYOUT_ADDRESS_NETWORK) {
        Ok(destination) => return Ok(destination),
        Err(error) => error,
    };

    cashaddr::decode(address, PAYOUT_CASHADDR_PREFIX)
        .and_then(|content| content.to_address(PAYOUT_ADDRESS_NETWORK))
        .map_err(|cashaddr| SubsidyError::InvalidDestination {
            address: address.to_string(),
            base58,
            cashaddr,
        })
}

/// Returns an output paying `amount` to the payout `address`.
pub fn payout_output(address: &str, amount: Amount<NonNegative>) -> Result<Output, SubsidyError> {
    let destination = resolve_destination(address)?;

    Ok(Output::new(amount, destination.script()))
}

/// Returns an output that removes `amount` from circulation.
///
/// Burn outputs don't decode any address, so they can't fail.
pub fn burn_output(amount: Amount<NonNegative>) -> Output {
    Output::new(amount, Script::new_burn())
}

/// Checks that every payout address in `params` resolves to a destination.
///
/// Run this when the consensus parameters are loaded, so misconfigured
/// addresses are reported at startup rather than on the first block that pays them.
pub fn check_payout_addresses(params: &ConsensusParams) -> Result<(), SubsidyError> {
    let epoch_addresses = params
        .epochs
        .iter()
        .flat_map(|epoch| epoch.beneficiaries.iter())
        .map(|address| ("epoch", address.as_str()));

    for (label, address) in params.payout_addresses.iter().chain(epoch_addresses) {
        resolve_destination(address).map_err(|error| SubsidyError::InvalidPayoutAddress {
            label,
            source: Box::new(error),
        })?;
    }

    Ok(())
}
