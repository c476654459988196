//! CashAddr codec test vectors.

use color_eyre::eyre::Result;

use lotus_test::vectors::{
    CASHADDR_P2PKH, CASHADDR_P2SH, CASHADDR_SIZE_MISMATCH, CASHADDR_TESTNET_P2PKH, HASH160_HEX,
};

use super::*;

fn hash160() -> Vec<u8> {
    hex::decode(HASH160_HEX).expect("test vector is valid hex")
}

#[test]
fn decode_known_addresses() -> Result<()> {
    lotus_test::init();

    let content = decode(CASHADDR_P2PKH, "bitcoincash")?;
    assert_eq!(content.kind, CashAddrType::PubKey);
    assert_eq!(content.hash, hash160());

    let content = decode(CASHADDR_P2SH, "bitcoincash")?;
    assert_eq!(content.kind, CashAddrType::Script);
    assert_eq!(content.hash, hash160());

    let content = decode(CASHADDR_TESTNET_P2PKH, "bchtest")?;
    assert_eq!(content.kind, CashAddrType::PubKey);
    assert_eq!(content.hash, hash160());

    Ok(())
}

#[test]
fn decode_without_prefix_uses_default() -> Result<()> {
    lotus_test::init();

    let payload = CASHADDR_P2PKH
        .strip_prefix("bitcoincash:")
        .expect("vector has a prefix");

    assert_eq!(
        decode(payload, "bitcoincash")?,
        decode(CASHADDR_P2PKH, "bitcoincash")?
    );

    // The checksum covers the default prefix
    assert_eq!(decode(payload, "bchtest"), Err(Error::InvalidChecksum));

    Ok(())
}

#[test]
fn decode_uppercase() -> Result<()> {
    lotus_test::init();

    let upper = CASHADDR_P2SH.to_ascii_uppercase();

    assert_eq!(
        decode(&upper, "bitcoincash")?,
        decode(CASHADDR_P2SH, "bitcoincash")?
    );

    Ok(())
}

#[test]
fn decode_rejects_malformed_addresses() {
    lotus_test::init();

    assert_eq!(
        decode("bitcoincash:Qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a", "bitcoincash"),
        Err(Error::MixedCase)
    );
    assert_eq!(
        decode("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6c", "bitcoincash"),
        Err(Error::InvalidChecksum)
    );
    assert_eq!(
        decode(":qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a", "bitcoincash"),
        Err(Error::InvalidSeparator)
    );
    assert_eq!(
        decode("bitcoincash:bitcoincash:qpm2", "bitcoincash"),
        Err(Error::InvalidSeparator)
    );
    assert_eq!(
        decode("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6o", "bitcoincash"),
        Err(Error::InvalidCharacter('o'))
    );
    assert_eq!(
        decode("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6b", "bitcoincash"),
        Err(Error::InvalidCharacter('b'))
    );
    assert_eq!(
        decode("bitcoincash:qpm2", "bitcoincash"),
        Err(Error::TooShort)
    );
    assert_eq!(
        decode(CASHADDR_SIZE_MISMATCH, "bitcoincash"),
        Err(Error::HashSizeMismatch {
            expected: 20,
            actual: 24,
        })
    );
}

#[test]
fn decode_rejects_other_prefixes() {
    lotus_test::init();

    assert_eq!(
        decode(CASHADDR_TESTNET_P2PKH, "bitcoincash"),
        Err(Error::PrefixMismatch {
            expected: "bitcoincash".to_string(),
            actual: "bchtest".to_string(),
        })
    );
}

#[test]
fn encode_known_addresses() -> Result<()> {
    lotus_test::init();

    let pub_key = CashAddrContent {
        kind: CashAddrType::PubKey,
        hash: hash160(),
    };
    let script = CashAddrContent {
        kind: CashAddrType::Script,
        hash: hash160(),
    };

    assert_eq!(encode("bitcoincash", &pub_key)?, CASHADDR_P2PKH);
    assert_eq!(encode("bitcoincash", &script)?, CASHADDR_P2SH);
    assert_eq!(encode("bchtest", &pub_key)?, CASHADDR_TESTNET_P2PKH);

    Ok(())
}

#[test]
fn larger_hashes_decode_but_are_not_addresses() -> Result<()> {
    lotus_test::init();

    for size in [24, 28, 32, 40, 48, 56, 64] {
        let content = CashAddrContent {
            kind: CashAddrType::PubKey,
            hash: vec![0xab; size],
        };

        let encoded = encode("bitcoincash", &content)?;
        let decoded = decode(&encoded, "bitcoincash")?;

        assert_eq!(decoded, content);
        assert_eq!(
            decoded.to_address(Network::Mainnet),
            Err(Error::UnsupportedHashSize(size))
        );
    }

    assert_eq!(
        encode(
            "bitcoincash",
            &CashAddrContent {
                kind: CashAddrType::PubKey,
                hash: vec![0; 21],
            }
        ),
        Err(Error::UnsupportedHashSize(21))
    );

    Ok(())
}

#[test]
fn content_converts_to_transparent_address() -> Result<()> {
    lotus_test::init();

    let address = decode(CASHADDR_P2SH, "bitcoincash")?.to_address(Network::Mainnet)?;

    assert!(address.is_script_hash());
    assert_eq!(address.hash_bytes().to_vec(), hash160());
    assert_eq!(CashAddrContent::from(&address).kind, CashAddrType::Script);

    Ok(())
}
