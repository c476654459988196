//! Property tests for transparent addresses and outputs.

use lotus_test::prelude::*;

use crate::{
    amount::Amount,
    parameters::{Network, NetworkKind},
    serialization::LotusSerialize,
};

use super::{cashaddr, Address, Output};

fn network_of(kind: NetworkKind) -> Network {
    match kind {
        NetworkKind::Mainnet => Network::Mainnet,
        NetworkKind::Testnet => Network::Testnet,
        NetworkKind::Regtest => Network::Regtest,
    }
}

#[test]
fn both_encodings_decode_to_the_same_address() -> Result<()> {
    lotus_test::init();

    proptest!(|(address in any::<Address>())| {
        let network = network_of(address.network_kind());

        let base58 = Address::decode_base58(&address.to_string(), network)?;
        prop_assert_eq!(base58, address);

        let encoded = cashaddr::encode(network.cashaddr_prefix(), &(&address).into())?;
        let cashaddr = cashaddr::decode(&encoded, network.cashaddr_prefix())?.to_address(network)?;
        prop_assert_eq!(cashaddr, address);
    });

    Ok(())
}

#[test]
fn address_scripts_are_spendable() -> Result<()> {
    lotus_test::init();

    proptest!(|(address in any::<Address>())| {
        let script = address.script();
        let expected_len = if address.is_script_hash() { 23 } else { 25 };

        prop_assert_eq!(script.as_raw_bytes().len(), expected_len);
        prop_assert!(!script.is_provably_unspendable());

        let output = Output::new(Amount::zero(), script);
        prop_assert!(!output.is_burn());
    });

    Ok(())
}

#[test]
fn output_serialized_length() -> Result<()> {
    lotus_test::init();

    proptest!(|(output in any::<Output>())| {
        let script_len = output.lock_script.as_raw_bytes().len();
        let compactsize_len = match script_len {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            _ => 5,
        };

        let bytes = output.lotus_serialize_to_vec()?;

        prop_assert_eq!(bytes.len(), 8 + compactsize_len + script_len);
        prop_assert_eq!(&bytes[..8], &output.value.to_bytes()[..]);
    });

    Ok(())
}
