//! Fixed transparent address and output test vectors.

use lotus_test::{prelude::*, vectors::*};

use crate::{
    amount::{Amount, NonNegative},
    parameters::{Network, NetworkKind},
    serialization::LotusSerialize,
    transparent::{Address, AddressError, Output, Script},
};

fn hash160() -> [u8; 20] {
    hex::decode(HASH160_HEX)
        .expect("test vector is valid hex")
        .try_into()
        .expect("test vector is 20 bytes")
}

#[test]
fn decode_base58_mainnet() -> Result<()> {
    lotus_test::init();

    let p2pkh = Address::decode_base58(BASE58_P2PKH, Network::Mainnet)?;
    assert_eq!(p2pkh, Address::from_pub_key_hash(NetworkKind::Mainnet, hash160()));
    assert_eq!(p2pkh.to_string(), BASE58_P2PKH);

    let p2sh = Address::decode_base58(BASE58_P2SH, Network::Mainnet)?;
    assert_eq!(p2sh, Address::from_script_hash(NetworkKind::Mainnet, hash160()));
    assert_eq!(p2sh.to_string(), BASE58_P2SH);

    Ok(())
}

#[test]
fn decode_base58_test_networks() -> Result<()> {
    lotus_test::init();

    for network in [Network::Testnet, Network::Regtest] {
        let p2pkh = Address::decode_base58(BASE58_TESTNET_P2PKH, network)?;
        assert_eq!(p2pkh, Address::from_pub_key_hash(network.kind(), hash160()));
        assert_eq!(p2pkh.to_string(), BASE58_TESTNET_P2PKH);

        let p2sh = Address::decode_base58(BASE58_TESTNET_P2SH, network)?;
        assert!(p2sh.is_script_hash());
        assert_eq!(p2sh.to_string(), BASE58_TESTNET_P2SH);
    }

    Ok(())
}

#[test]
fn decode_base58_rejects_other_networks() {
    lotus_test::init();

    assert_eq!(
        Address::decode_base58(BASE58_TESTNET_P2PKH, Network::Mainnet),
        Err(AddressError::UnknownVersion {
            version: 0x6f,
            network: Network::Mainnet,
        })
    );
    assert_eq!(
        Address::decode_base58(BASE58_P2SH, Network::Testnet),
        Err(AddressError::UnknownVersion {
            version: 0x05,
            network: Network::Testnet,
        })
    );
}

#[test]
fn decode_base58_rejects_invalid_strings() {
    lotus_test::init();

    for address in INVALID_ADDRESSES {
        assert!(
            Address::decode_base58(address, Network::Mainnet).is_err(),
            "{address:?} must not decode as Base58Check"
        );
    }

    // CashAddrs are not Base58Check
    assert!(Address::decode_base58(CASHADDR_P2PKH, Network::Mainnet).is_err());

    // A valid checksum over a payload that isn't a version byte and a 20-byte hash
    let short = bs58::encode([0x00; 10]).with_check().into_string();
    assert_eq!(
        Address::decode_base58(&short, Network::Mainnet),
        Err(AddressError::InvalidLength(10))
    );
}

#[test]
fn standard_scripts() -> Result<()> {
    lotus_test::init();

    let p2pkh = Address::decode_base58(BASE58_P2PKH, Network::Mainnet)?;
    assert_eq!(
        hex::encode(p2pkh.script().as_raw_bytes()),
        format!("76a914{HASH160_HEX}88ac")
    );

    let p2sh = Address::decode_base58(BASE58_P2SH, Network::Mainnet)?;
    assert_eq!(
        hex::encode(p2sh.script().as_raw_bytes()),
        format!("a914{HASH160_HEX}87")
    );

    Ok(())
}

#[test]
fn output_wire_format() -> Result<()> {
    lotus_test::init();

    let address = Address::decode_base58(BASE58_P2PKH, Network::Mainnet)?;
    let value: Amount<NonNegative> = Amount::try_from(125_000_000_i64)?;
    let output = Output::new(value, address.script());

    assert_eq!(
        hex::encode(output.lotus_serialize_to_vec()?),
        format!("40597307000000001976a914{HASH160_HEX}88ac")
    );

    let burn = Output::new(value, Script::new_burn());
    assert!(burn.is_burn());
    assert!(!output.is_burn());
    assert_eq!(
        hex::encode(burn.lotus_serialize_to_vec()?),
        "4059730700000000016a"
    );

    Ok(())
}
