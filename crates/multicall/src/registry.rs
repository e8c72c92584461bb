//! Known relay (Multicall2) deployments.
//!
//! Supporting another network only requires adding an entry to
//! [`DEPLOYMENTS`].

use {
    crate::{Error, Result},
    alloy::primitives::{Address, address},
    std::{collections::HashMap, sync::LazyLock},
};

pub mod networks {
    pub const MAINNET: u64 = 1;
    pub const BNB: u64 = 56;
    pub const POLYGON: u64 = 137;
}

/// Relay contract address by chain id.
pub static DEPLOYMENTS: LazyLock<HashMap<u64, Address>> = LazyLock::new(|| {
    use networks::*;
    maplit::hashmap! {
        MAINNET => address!("0x5ba1e12693dc8f9c48aad8770482f4739beed696"),
        BNB => address!("0x41263cba59eb80dc200f3e2544eda4ed6a90e76c"),
        POLYGON => address!("0x275617327c958bD06b5D6b871E7f491D76113dd8"),
    }
});

/// Returns the relay address for a chain.
pub fn relay_address(chain_id: u64) -> Result<Address> {
    DEPLOYMENTS
        .get(&chain_id)
        .copied()
        .ok_or(Error::UnsupportedNetwork(chain_id))
}

/// Chain ids with a known relay deployment, in ascending order.
pub fn supported_chains() -> Vec<u64> {
    let mut chains = DEPLOYMENTS.keys().copied().collect::<Vec<_>>();
    chains.sort_unstable();
    chains
}
