//! Fixed test vectors for amounts.

use std::{cmp::min, collections::HashSet};

use color_eyre::eyre::Result;

use super::super::*;

fn sats(satoshis: i64) -> Amount {
    Amount::try_from(satoshis).expect("test amounts are valid")
}

#[test]
fn construction_checks_bounds() -> Result<()> {
    lotus_test::init();

    assert_eq!(Amount::<NonNegative>::try_from(0_i64)?, Amount::zero());
    assert_eq!(Amount::<NonNegative>::try_from(MAX_MONEY)?.satoshis(), MAX_MONEY);

    assert_eq!(
        Amount::<NonNegative>::try_from(-1_i64),
        Err(Error::OutOfRange {
            value: -1,
            range: 0..=MAX_MONEY,
        })
    );
    Amount::<NonNegative>::try_from(MAX_MONEY + 1)
        .expect_err("amounts above MAX_MONEY are rejected");

    assert_eq!(Amount::<NonNegative>::from_coins(260)?.satoshis(), 260 * COIN);
    Amount::<NonNegative>::from_coins(i64::MAX).expect_err("coin amounts are checked for overflow");

    Ok(())
}

#[test]
fn add_and_sub_check_bounds() -> Result<()> {
    lotus_test::init();

    assert_eq!((sats(400) + sats(600))?, sats(1_000));
    assert_eq!((sats(1_000) - sats(200))?, sats(800));
    assert_eq!((sats(1_000) - sats(1_000))?, Amount::zero());

    let err = (sats(100) - sats(101)).expect_err("amounts can't go below zero");
    assert_eq!(err.invalid_value(), -1);

    let err = (sats(MAX_MONEY) + sats(1)).expect_err("amounts can't go above MAX_MONEY");
    assert_eq!(err.invalid_value(), i128::from(MAX_MONEY) + 1);

    Ok(())
}

#[test]
fn div_is_floor_division() -> Result<()> {
    lotus_test::init();

    let reward = sats(1_001);

    assert_eq!((reward / 2)?.satoshis(), 500);
    assert_eq!((reward / 3)?.satoshis(), 333);
    assert_eq!((reward / 8)?.satoshis(), 125);
    assert_eq!((reward / 2_000)?.satoshis(), 0);

    assert_eq!(
        reward / 0,
        Err(Error::DivideByZero { amount: 1_001 }),
        "division by zero is an error, not a panic"
    );

    Ok(())
}

#[test]
fn mul_checks_bounds() -> Result<()> {
    lotus_test::init();

    assert_eq!((sats(150) * 3)?.satoshis(), 450);
    assert_eq!((sats(150) * 0)?, Amount::zero());

    let err = (sats(MAX_MONEY) * 2).expect_err("doubling MAX_MONEY overflows the constraint");
    assert_eq!(err.invalid_value(), i128::from(MAX_MONEY) * 2);

    (sats(MAX_MONEY) * u64::MAX).expect_err("huge multipliers are rejected, not wrapped");

    Ok(())
}

#[test]
fn sum_checks_bounds() -> Result<()> {
    lotus_test::init();

    let shares = vec![sats(125), sats(125), sats(250)];
    assert_eq!(
        shares.into_iter().sum::<std::result::Result<Amount, Error>>()?,
        sats(500)
    );

    assert_eq!(
        Vec::<Amount>::new()
            .into_iter()
            .sum::<std::result::Result<Amount, Error>>()?,
        Amount::zero()
    );

    let too_much = vec![sats(MAX_MONEY), sats(1), sats(2), sats(3)];
    assert_eq!(
        too_much.into_iter().sum::<std::result::Result<Amount, Error>>(),
        Err(Error::SumOverflow {
            partial_sum: i128::from(MAX_MONEY) + 1,
            remaining_items: 2,
        })
    );

    Ok(())
}

#[test]
fn little_endian_bytes() {
    lotus_test::init();

    assert_eq!(
        sats(125_000_000).to_bytes(),
        [0x40, 0x59, 0x73, 0x07, 0, 0, 0, 0]
    );
    assert_eq!(Amount::<NonNegative>::zero().to_bytes(), [0; 8]);
}

#[test]
fn deserialize_checks_bounds() -> Result<()> {
    lotus_test::init();

    #[derive(Debug, serde::Deserialize)]
    struct Cap {
        cap: Amount<NonNegative>,
    }

    let cap: Cap = toml::from_str("cap = 1000")?;
    assert_eq!(cap.cap.satoshis(), 1_000);

    toml::from_str::<Cap>("cap = -1").expect_err("negative caps are rejected");
    toml::from_str::<Cap>(&format!("cap = {}", MAX_MONEY + 1))
        .expect_err("caps above MAX_MONEY are rejected");

    Ok(())
}

#[test]
fn equality_ordering_and_hashing_are_by_value() {
    lotus_test::init();

    let one = sats(1);
    let another_one = sats(1);
    let zero = Amount::zero();

    assert_eq!(one, another_one);
    assert_ne!(one, zero);
    assert!(zero < one);
    assert_eq!(min(sats(500), sats(200)), sats(200));

    let hash_set: HashSet<Amount> = [one, another_one, zero].into_iter().collect();
    assert_eq!(hash_set.len(), 2);
}

#[test]
fn display_and_debug() {
    lotus_test::init();

    assert_eq!(sats(1_000).to_string(), "1000");
    assert_eq!(format!("{:>6}", sats(42)), "    42");
    assert_eq!(format!("{:?}", sats(42)), "Amount(42)");
}
