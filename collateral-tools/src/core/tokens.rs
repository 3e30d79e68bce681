// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Human-readable token symbols for addresses, used when printing deployments.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::network::NetworkRegistry;

/// Tokens deployed outside of any network configuration, keyed by address.
#[rustfmt::skip]
static EXTRA_TOKENS: &[(&str, &str)] = &[
    ("0xaa91d24c2f7dbb6487f61869cd8cd8afd5c5cab2", "mrp-aUSDT"),
    ("0x60C384e226b120d93f3e0F4C502957b2B9C32B15", "saUSDC"),
    ("0x21fe646D1Ed0733336F2D4d9b2FE67790a6099D9", "saUSDT"),
    ("0xf579F9885f1AEa0d3F8bE0F18AfED28c92a43022", "cUSDCVault"),
    ("0x4Be33630F92661afD646081BC29079A38b879aA0", "cUSDTVault"),
    ("0xfBD1a538f5707C0D67a16ca4e3Fc711B80BD931A", "wcUSDCv3"),
    ("0x3BECE5EC596331033726E5C6C188c313Ff4E3fE5", "stkcvxeUSDFRAXBP"),
    ("0x83f20f44975d03b1b09e64809b757c47f942beea", "sDAI"),
    ("0xa8157BF67Fd7BcDCC139CB9Bf1bd7Eb921A779D3", "saUSDC"),
    ("0x684AA4faf9b07d5091B88c6e0a8160aCa5e6d17b", "saUSDT"),
    ("0xe176A5ebFB873D5b3cf1909d0EdaE4FE095F5bc7", "saEthPyUSD"),
    ("0x81697e25DFf8564d9E0bC6D27edb40006b34ea2A", "stkcvxeUSDFRAXBP"),
    ("0x8e33D5aC344f9F2fc1f2670D45194C280d4fBcF1", "stkcvxeUSDFRAXBP"),
    ("0x093cb4f405924a0c468b43209d5e466f1dd0ac7d", "saEthUSDC"),
    ("0x27F2f159Fe990Ba83D57f39Fd69661764BEbf37a", "wcUSDCv3"),
    ("0xA0d69E286B938e21CBf7E51D71F6A4c8918f482F", "eUSD"),
    ("0xE72B141DF173b999AE7c1aDcbF60Cc9833Ce56a8", "ETH+"),
    ("0xaCdf0DBA4B9839b96221a8487e9ca660a48212be", "hyUSD (mainnnet)"),
    ("0xFc0B1EEf20e4c68B3DCF36c4537Cfa7Ce46CA70b", "USDC+"),
    ("0x0d86883FAf4FfD7aEb116390af37746F45b6f378", "USD3"),
    ("0x78da5799CF427Fee11e9996982F4150eCe7a99A7", "rgUSD"),
    ("0xCc7FF230365bD730eE4B352cC2492CEdAC49383e", "hyUSD (base)"),
    ("0xCb327b99fF831bF8223cCEd12B1338FF3aA322Ff", "bsdETH"),
    ("0xfE0D6D83033e313691E96909d2188C150b834285", "iUSDC"),
    ("0xC9a3e2B3064c1c0546D3D0edc0A748E9f93Cf18d", "Vaya"),
    ("0x641B0453487C9D14c5df96d45a481ef1dc84e31f", "MAAT"),
    ("0x093c07787920eb34a0a0c7a09823510725aee4af", "wcUSDCv3"),
    ("0xa694f7177c6c839c951c74c797283b35d0a486c8", "wcUSDCv3 (base)"),
    ("0x53f1df4e5591ae35bf738742981669c3767241fa", "wcUSDCv3 (base)"),
    ("0x6f6f81e5e66f503184f2202d83a79650c3285759", "saBasUSDC (base)"),
    ("0x184460704886f9f2a7f3a0c2887680867954dc6e", "saBasUSDC (base)"),
    ("0xA35b1B31Ce002FBF2058D22F30f95D405200A15b", "ETHx"),
];

/// Chains whose configured tokens are known by symbol.
const SYMBOL_CHAINS: &[u64] = &[1, 8453];

/// Lower-cased address to symbol. Built once, never mutated.
static TOKENS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let registry = NetworkRegistry::builtin();
    let configured = SYMBOL_CHAINS
        .iter()
        .filter_map(|chain_id| registry.get(*chain_id).ok())
        .flat_map(|config| config.tokens.iter())
        .map(|(symbol, address)| (key(&address.to_string()), symbol.clone()));
    let extra = EXTRA_TOKENS
        .iter()
        .map(|(address, symbol)| (key(address), symbol.to_string()));
    configured.chain(extra).collect()
});

fn key(address: &str) -> String {
    address.trim().to_lowercase()
}

/// The symbol for `address`, or `address` itself, unchanged, if it is not a known token.
pub fn symbol_of(address: &str) -> String {
    TOKENS
        .get(&key(address))
        .cloned()
        .unwrap_or_else(|| address.to_string())
}
