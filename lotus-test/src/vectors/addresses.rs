//! Payout address vectors in both supported encodings.
//!
//! Each pair encodes the same 20-byte hash, once as a mainnet Base58Check
//! address and once as a CashAddr with the `bitcoincash` prefix.

use once_cell::sync::Lazy;

/// The hash shared by the `*_HASH160` address vectors below.
pub const HASH160_HEX: &str = "76a04053bda0a88bda5177b86a15c3b29f559873";

/// Mainnet P2PKH Base58Check address for [`HASH160_HEX`].
pub const BASE58_P2PKH: &str = "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";

/// Mainnet P2SH Base58Check address for [`HASH160_HEX`].
pub const BASE58_P2SH: &str = "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC";

/// Testnet P2PKH Base58Check address for [`HASH160_HEX`].
pub const BASE58_TESTNET_P2PKH: &str = "mrLC19Je2BuWQDkWSTriGYPyQJXKkkBmCx";

/// Testnet P2SH Base58Check address for [`HASH160_HEX`].
pub const BASE58_TESTNET_P2SH: &str = "2N44ThNe8NXHyv4bsX8AoVCXquBRW94Ls7W";

/// CashAddr P2PKH address for [`HASH160_HEX`].
pub const CASHADDR_P2PKH: &str = "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a";

/// CashAddr P2SH address for [`HASH160_HEX`].
pub const CASHADDR_P2SH: &str = "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq";

/// CashAddr P2PKH address for [`HASH160_HEX`] with the `bchtest` prefix.
pub const CASHADDR_TESTNET_P2PKH: &str = "bchtest:qpm2qsznhks23z7629mms6s4cwef74vcwvqcw003ap";

/// A CashAddr carrying a 24-byte hash while its version byte claims 20 bytes.
pub const CASHADDR_SIZE_MISMATCH: &str = "bitcoincash:qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqljyuvg06";

/// Strings that decode under neither address encoding.
pub const INVALID_ADDRESSES: &[&str] = &[
    "",
    "not an address",
    // Base58Check with a corrupted checksum
    "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggv",
    // CashAddr with a corrupted checksum
    "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6c",
    // CashAddr with mixed case
    "bitcoincash:Qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
];

/// Mainnet P2PKH Base58Check addresses paying to the hashes `[n; 20]` for `n` in `1..=9`.
pub static BASE58_BENEFICIARIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "16Jswqk47s9PUcyCc88MMVwzgvHPvtEpf",
        "1BcktgV7EjHmxEwQDFFhhztzNqZkd5gdm",
        "1GvdqXEAMbSARrubpNP44Vqz4kr6TDPgC",
        "1NEWnMyDUTaYuUsoRVWQQznykg8Yc2Ynn",
        "1TYPjCiGbKiwP6r12cdkmVjySbQryonEV",
        "1YrGg3TKiBsKripCdjm77zgy8WhDYmUH5",
        "1eA9ctCNq41iLLnQErtTUVdxpRyZ9hZmW",
        "1jU2ZiwRwvA6oxkbqz1opzaxWMFyovCBf",
        "1pmuWZgV4nJVHaioT79ABVXxCGYLpCfri",
    ]
});

/// CashAddr P2PKH addresses paying to the hashes `[n; 20]` for `n` in `1..=9`.
pub static CASHADDR_BENEFICIARIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "bitcoincash:qqqszqgpqyqszqgpqyqszqgpqyqszqgpqyrygcdp8p",
        "bitcoincash:qqpqyqszqgpqyqszqgpqyqszqgpqyqszqgwfhvumgr",
        "bitcoincash:qqpsxqcrqvpsxqcrqvpsxqcrqvpsxqcrqvy7gzpqqn",
        "bitcoincash:qqzqgpqyqszqgpqyqszqgpqyqszqgpqyqsxq59v53v",
        "bitcoincash:qqzs2pg9q5zs2pg9q5zs2pg9q5zs2pg9q5vhtt30eu",
        "bitcoincash:qqrqvpsxqcrqvpsxqcrqvpsxqcrqvpsxqcp65lq4k7",
        "bitcoincash:qqrswpc8qurswpc8qurswpc8qurswpc8qutdt3aw7w",
        "bitcoincash:qqyqszqgpqyqszqgpqyqszqgpqyqszqgpqa4qt08m8",
        "bitcoincash:qqysjzgfpyysjzgfpyysjzgfpyysjzgfpyhzl9junh",
    ]
});

/// CashAddr P2SH addresses paying to the hashes `[n; 20]` for `n` in `1..=5`.
pub const CASHADDR_SCRIPT_BENEFICIARIES: &[&str] = &[
    "bitcoincash:pqqszqgpqyqszqgpqyqszqgpqyqszqgpqy5p4h2zuu",
    "bitcoincash:pqpqyqszqgpqyqszqgpqyqszqgpqyqszqgev2rmcn7",
    "bitcoincash:pqpsxqcrqvpsxqcrqvpsxqcrqvpsxqcrqvnm4dxrmw",
    "bitcoincash:pqzqgpqyqszqgpqyqszqgpqyqszqgpqyqs39f2th23",
    "bitcoincash:pqzs2pg9q5zs2pg9q5zs2pg9q5zs2pg9q5mjkykvzp",
];

/// Mainnet P2SH Base58Check addresses paying to the hashes `[n; 20]` for `n` in `1..=5`.
pub const BASE58_SCRIPT_BENEFICIARIES: &[&str] = &[
    "31nKoVLBc2BXUeKQKhnimyrt9DD12VwG6p",
    "31sdgSAvf93fs7wNXJur8LMq8u8HPf9qrp",
    "31xwZP1fiFupFbZLiv2yUgrn8b3Zf2otfV",
    "324FSKrQmNmxe5BJvXA6q3Mj8Gxr3ijc2q",
    "329ZKGh9pVe72YoH88HEBPrg7xt8Q5QoBr",
];
