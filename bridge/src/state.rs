//! State definitions for the Swap Bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// The single account allowed to call the privileged mint/burn operations
    pub owner: Addr,
    /// CW20 token ledger this bridge administers. Set once at instantiation,
    /// never reassigned.
    pub token: Addr,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Consumed redemption digests (to prevent replay attacks)
/// Key: 32-byte redemption digest, Value: whether consumed
///
/// Grows with the number of lifetime redemptions; entries are never removed.
pub const REDEMPTIONS: Map<&[u8], bool> = Map::new("redemptions");
