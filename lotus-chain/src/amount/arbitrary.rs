//! Randomised property testing for [`Amount`].

use std::{fmt, marker::PhantomData};

use proptest::prelude::*;

use super::{Amount, Constraint};

impl<C> Arbitrary for Amount<C>
where
    C: Constraint + fmt::Debug,
{
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        C::valid_range()
            .prop_map(|satoshis| Amount(satoshis, PhantomData))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
