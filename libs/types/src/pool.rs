//! Registry entry and pool record types
//!
//! A pool is immutable once created: the asset pair, the derived authority,
//! and the liquidity-token identifier never change. Reserve balances live in
//! ledger escrows controlled by the authority and are observed through
//! [`crate::ReserveSnapshot`], never stored here.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AmmId, MintId};

/// Immutable registry entry: one fee policy under one amm id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmConfig {
    pub id: AmmId,
    /// Creator-supplied admin identity. Recorded for the ledger layer;
    /// the engine itself performs no authorization.
    pub admin: AccountId,
    /// Swap fee in basis points, always below 10_000.
    pub fee_bps: u16,
}

/// Canonical lookup key for a pool: `(amm_id, mint_a, mint_b)` with
/// `mint_a < mint_b` by byte comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    pub amm_id: AmmId,
    pub mint_a: MintId,
    pub mint_b: MintId,
}

impl PoolKey {
    /// Build the canonical key for an unordered pair, sorting the mints by
    /// byte comparison. Identical mints are the caller's error to reject.
    pub fn canonical(amm_id: AmmId, mint_x: MintId, mint_y: MintId) -> Self {
        let (mint_a, mint_b) = if mint_x <= mint_y {
            (mint_x, mint_y)
        } else {
            (mint_y, mint_x)
        };
        Self {
            amm_id,
            mint_a,
            mint_b,
        }
    }
}

/// One pool: a canonicalized asset pair under one amm id, plus the derived
/// identities controlling its escrows and liquidity mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub amm_id: AmmId,
    pub mint_a: MintId,
    pub mint_b: MintId,
    /// Deterministically derived controller of the two reserve escrows and
    /// the liquidity mint. No private key exists for it.
    pub authority: AccountId,
    /// Liquidity token minted 1:1 with ownership share.
    pub mint_liquidity: MintId,
}

impl Pool {
    /// The canonical key this pool is registered under.
    pub fn key(&self) -> PoolKey {
        PoolKey {
            amm_id: self.amm_id,
            mint_a: self.mint_a,
            mint_b: self.mint_b,
        }
    }
}
