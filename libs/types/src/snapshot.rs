//! Ephemeral reserve/supply view supplied per engine call
//!
//! The engine holds no pool balances of its own. The ledger-interaction
//! layer reads the escrow balances and liquidity-token supply atomically,
//! passes them in as a [`ReserveSnapshot`], and persists the new values
//! after applying a successful quote.

use serde::{Deserialize, Serialize};

/// Point-in-time view of one pool's escrow balances and outstanding
/// liquidity-token supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    /// Escrow balance of `mint_a`.
    pub reserve_a: u64,
    /// Escrow balance of `mint_b`.
    pub reserve_b: u64,
    /// Outstanding liquidity-token supply.
    pub liquidity_supply: u64,
}

impl ReserveSnapshot {
    pub const fn new(reserve_a: u64, reserve_b: u64, liquidity_supply: u64) -> Self {
        Self {
            reserve_a,
            reserve_b,
            liquidity_supply,
        }
    }

    /// A freshly created pool: no reserves, no liquidity outstanding.
    pub const fn empty() -> Self {
        Self::new(0, 0, 0)
    }

    /// A snapshot is consistent iff empty reserves and zero supply coincide:
    /// `reserve_a == 0 && reserve_b == 0 <=> liquidity_supply == 0`.
    pub const fn is_consistent(&self) -> bool {
        (self.reserve_a == 0 && self.reserve_b == 0) == (self.liquidity_supply == 0)
    }

    pub const fn is_empty(&self) -> bool {
        self.reserve_a == 0 && self.reserve_b == 0 && self.liquidity_supply == 0
    }
}
