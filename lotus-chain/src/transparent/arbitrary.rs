use proptest::prelude::*;

use crate::parameters::Network;

use super::Address;

impl Arbitrary for Address {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<(Network, bool, [u8; 20])>()
            .prop_map(|(network, is_p2pkh, hash_bytes)| {
                if is_p2pkh {
                    Address::from_pub_key_hash(network.kind(), hash_bytes)
                } else {
                    Address::from_script_hash(network.kind(), hash_bytes)
                }
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
