//! Satoshi amounts for block rewards and coinbase outputs.
//!
//! An [`Amount`] always lies in the range of its [`Constraint`]. Arithmetic
//! that could leave that range returns a [`Result`](std::result::Result), so
//! miner fund shares can't silently wrap or go negative.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, Div, Mul, RangeInclusive, Sub},
};

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "proptest-impl"))]
pub mod arbitrary;


/// The result of an amount operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Number of satoshis in 1 coin.
pub const COIN: i64 = 1_000_000;

/// The maximum satoshi amount.
pub const MAX_MONEY: i64 = 2_100_000_000 * COIN;

/// A number of satoshis, checked against the constraint `C`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[serde(bound = "C: Constraint + Clone")]
pub struct Amount<C = NonNegative>(i64, #[serde(skip)] PhantomData<C>);

impl<C> fmt::Display for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sats = self.satoshis();

        f.pad_integral(sats >= 0, "", &sats.unsigned_abs().to_string())
    }
}

impl<C> fmt::Debug for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Amount").field(&self.0).finish()
    }
}

impl<C: Constraint> Amount<C> {
    /// Returns a zero amount.
    pub fn zero() -> Self {
        Self(0, PhantomData)
    }

    /// Returns an amount of `coins` whole coins.
    pub fn from_coins(coins: i64) -> Result<Self> {
        C::validate(i128::from(coins) * i128::from(COIN)).map(Self::from_valid)
    }

    fn from_valid(satoshis: i64) -> Self {
        Self(satoshis, PhantomData)
    }
}

impl<C> Amount<C> {
    /// Returns the number of satoshis in this amount.
    pub fn satoshis(&self) -> i64 {
        self.0
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the 8-byte little-endian encoding used in transaction outputs.
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut buf = [0; 8];
        LittleEndian::write_i64(&mut buf, self.0);
        buf
    }
}

impl<C: Constraint> TryFrom<i64> for Amount<C> {
    type Error = Error;

    fn try_from(satoshis: i64) -> Result<Self> {
        C::validate(satoshis.into()).map(Self::from_valid)
    }
}

impl<C> From<Amount<C>> for i64 {
    fn from(amount: Amount<C>) -> Self {
        amount.0
    }
}

impl<C: Constraint> Add for Amount<C> {
    type Output = Result<Amount<C>>;

    fn add(self, rhs: Amount<C>) -> Self::Output {
        C::validate(i128::from(self.0) + i128::from(rhs.0)).map(Self::from_valid)
    }
}

impl<C: Constraint> Sub for Amount<C> {
    type Output = Result<Amount<C>>;

    fn sub(self, rhs: Amount<C>) -> Self::Output {
        C::validate(i128::from(self.0) - i128::from(rhs.0)).map(Self::from_valid)
    }
}

impl<C: Constraint> Mul<u64> for Amount<C> {
    type Output = Result<Amount<C>>;

    fn mul(self, rhs: u64) -> Self::Output {
        // An i64 times a u64 always fits in an i128
        C::validate(i128::from(self.0) * i128::from(rhs)).map(Self::from_valid)
    }
}

/// Floor division, as used for every miner fund share.
impl<C: Constraint> Div<u64> for Amount<C> {
    type Output = Result<Amount<C>>;

    fn div(self, rhs: u64) -> Self::Output {
        if rhs == 0 {
            return Err(Error::DivideByZero { amount: self.0 });
        }

        C::validate(i128::from(self.0).div_euclid(i128::from(rhs))).map(Self::from_valid)
    }
}

impl<C: Constraint> Sum<Amount<C>> for Result<Amount<C>> {
    fn sum<I: Iterator<Item = Amount<C>>>(mut iter: I) -> Self {
        let mut total = Amount::zero();

        while let Some(amount) = iter.next() {
            total = (total + amount).map_err(|error| Error::SumOverflow {
                partial_sum: error.invalid_value(),
                remaining_items: iter.by_ref().count(),
            })?;
        }

        Ok(total)
    }
}

impl<C> Hash for Amount<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<C> PartialEq for Amount<C> {
    fn eq(&self, other: &Amount<C>) -> bool {
        self.0 == other.0
    }
}

impl<C> Eq for Amount<C> {}

impl<C> PartialOrd for Amount<C> {
    fn partial_cmp(&self, other: &Amount<C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Amount<C> {
    fn cmp(&self, other: &Amount<C>) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Errors that can be returned when validating [`Amount`]s.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{value} satoshis is outside the valid amount range {range:?}")]
    OutOfRange {
        value: i128,
        range: RangeInclusive<i64>,
    },

    #[error("cannot divide {amount} satoshis by zero")]
    DivideByZero { amount: i64 },

    #[error(
        "overflow when summing amounts; \
         partial sum: {partial_sum}, number of remaining items: {remaining_items}"
    )]
    SumOverflow {
        partial_sum: i128,
        remaining_items: usize,
    },
}

impl Error {
    /// Returns the value that failed validation.
    pub fn invalid_value(&self) -> i128 {
        match self {
            Error::OutOfRange { value, .. } => *value,
            Error::DivideByZero { amount } => i128::from(*amount),
            Error::SumOverflow { partial_sum, .. } => *partial_sum,
        }
    }
}

/// Marker type for amounts that can't be negative.
///
/// Block rewards, funding caps and every coinbase output use this constraint.
///
/// ```
/// # use lotus_chain::amount::{Constraint, MAX_MONEY, NonNegative};
/// assert_eq!(NonNegative::valid_range(), 0..=MAX_MONEY);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub struct NonNegative;

impl Constraint for NonNegative {
    fn valid_range() -> RangeInclusive<i64> {
        0..=MAX_MONEY
    }
}

/// A range constraint on [`Amount`]s.
pub trait Constraint {
    /// Returns the range of valid satoshi values, which must include zero.
    fn valid_range() -> RangeInclusive<i64>;

    /// Returns `value` if it is in [`Constraint::valid_range`].
    fn validate(value: i128) -> Result<i64> {
        let range = Self::valid_range();

        match i64::try_from(value) {
            Ok(satoshis) if range.contains(&satoshis) => Ok(satoshis),
            _ => Err(Error::OutOfRange { value, range }),
        }
    }
}
