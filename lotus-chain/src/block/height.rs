use serde::{Deserialize, Serialize};

/// The height of a block is the length of the chain back to the genesis block.
///
/// # Invariants
///
/// Users should not construct block heights greater than `Height::MAX`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

impl std::str::FromStr for Height {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(h) if (Height(h) <= Height::MAX) => Ok(Height(h)),
            Ok(_) => Err("Height exceeds maximum height"),
            Err(_) => Err("Height(u32) integer parse error"),
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Height {
    /// The minimum Height.
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than `Height::MIN`.
    pub const MIN: Height = Height(0);

    /// The maximum Height.
    ///
    /// Nodes store block heights as signed 32-bit integers, so this is
    /// `i32::MAX`. Users should not construct block heights greater than
    /// `Height::MAX`.
    pub const MAX: Height = Height(i32::MAX as u32);

    /// Returns the height of the block that extends a block at this height,
    /// or `None` if it would be greater than [`Height::MAX`].
    pub fn next(self) -> Option<Height> {
        let next = Height(self.0.checked_add(1)?);

        (next <= Height::MAX).then_some(next)
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
use proptest::prelude::*;
#[cfg(any(test, feature = "proptest-impl"))]
impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_height() {
        lotus_test::init();

        assert_eq!(Height(0).next(), Some(Height(1)));
        assert_eq!(Height(41_999).next(), Some(Height(42_000)));
        assert_eq!(Height(499_999_999).next(), Some(Height(500_000_000)));
        assert_eq!(Height::MAX.next(), None);
    }

    #[test]
    fn parse_height() {
        lotus_test::init();

        assert_eq!("1000".parse::<Height>(), Ok(Height(1000)));
        assert_eq!("500000000".parse::<Height>(), Ok(Height(500_000_000)));
        assert_eq!("2147483647".parse::<Height>(), Ok(Height::MAX));
        assert!("2147483648".parse::<Height>().is_err());
        assert!("-1".parse::<Height>().is_err());
    }
}
