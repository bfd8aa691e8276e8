//! Pool registry: amm configuration and pool creation
//!
//! The registry is the engine's only mutable state. Both maps are sharded
//! concurrent maps so uniqueness is enforced atomically under concurrent
//! registration; the math modules stay lock-free and stateless.
//!
//! Pool authorities and liquidity-mint identifiers are derived
//! deterministically from the canonical `(amm_id, mint_a, mint_b)` triple
//! plus a domain-separation seed. Anyone holding the triple can recompute
//! them; no private key exists for either.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sha3::{Digest, Sha3_256};
use tracing::debug;

use poolkit_types::{AccountId, AmmConfig, AmmId, MintId, Pool, PoolKey};

use crate::error::{AmmError, Result};
use crate::math::BPS_DENOMINATOR;

const AUTHORITY_SEED: &[u8] = b"authority";
const LIQUIDITY_MINT_SEED: &[u8] = b"mint_liquidity";

/// Derive the identity controlling a pool's escrows and liquidity mint.
pub fn derive_pool_authority(amm_id: &AmmId, mint_a: &MintId, mint_b: &MintId) -> AccountId {
    AccountId::new(derive(amm_id, mint_a, mint_b, AUTHORITY_SEED))
}

/// Derive the identifier of a pool's liquidity token.
pub fn derive_liquidity_mint(amm_id: &AmmId, mint_a: &MintId, mint_b: &MintId) -> MintId {
    MintId::new(derive(amm_id, mint_a, mint_b, LIQUIDITY_MINT_SEED))
}

fn derive(amm_id: &AmmId, mint_a: &MintId, mint_b: &MintId, seed: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(amm_id.as_bytes());
    hasher.update(mint_a.as_bytes());
    hasher.update(mint_b.as_bytes());
    hasher.update(seed);
    hasher.finalize().into()
}

/// Process-wide registry of amm configurations and their pools.
#[derive(Debug, Default)]
pub struct AmmRegistry {
    amms: DashMap<AmmId, AmmConfig>,
    pools: DashMap<PoolKey, Pool>,
}

impl AmmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new amm with an immutable fee policy.
    ///
    /// Fails with [`AmmError::InvalidFee`] when the fee is not below 100%
    /// and [`AmmError::DuplicateAmm`] when the id is taken.
    pub fn create_amm(&self, amm_id: AmmId, fee_bps: u16, admin: AccountId) -> Result<AmmConfig> {
        if fee_bps as u64 >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee { fee_bps });
        }
        match self.amms.entry(amm_id) {
            Entry::Occupied(_) => Err(AmmError::DuplicateAmm { amm_id }),
            Entry::Vacant(slot) => {
                let config = AmmConfig {
                    id: amm_id,
                    admin,
                    fee_bps,
                };
                slot.insert(config);
                debug!(%amm_id, fee_bps, "amm registered");
                Ok(config)
            }
        }
    }

    /// Create the pool for an asset pair under a registered amm.
    ///
    /// The pair is canonicalized by byte order, so creation and lookup are
    /// insensitive to argument order. The returned record is immutable; the
    /// ledger layer creates the escrows and the liquidity mint as its own
    /// side effect, starting from zero reserves and zero supply.
    pub fn create_pool(&self, amm_id: AmmId, mint_x: MintId, mint_y: MintId) -> Result<Pool> {
        if !self.amms.contains_key(&amm_id) {
            return Err(AmmError::UnknownAmm { amm_id });
        }
        if mint_x == mint_y {
            return Err(AmmError::IdenticalMints);
        }

        let key = PoolKey::canonical(amm_id, mint_x, mint_y);
        match self.pools.entry(key) {
            Entry::Occupied(_) => Err(AmmError::DuplicatePool),
            Entry::Vacant(slot) => {
                let pool = Pool {
                    amm_id,
                    mint_a: key.mint_a,
                    mint_b: key.mint_b,
                    authority: derive_pool_authority(&amm_id, &key.mint_a, &key.mint_b),
                    mint_liquidity: derive_liquidity_mint(&amm_id, &key.mint_a, &key.mint_b),
                };
                slot.insert(pool);
                debug!(%amm_id, mint_a = %key.mint_a, mint_b = %key.mint_b, "pool created");
                Ok(pool)
            }
        }
    }

    /// Look up an amm configuration.
    pub fn amm(&self, amm_id: &AmmId) -> Option<AmmConfig> {
        self.amms.get(amm_id).map(|entry| *entry.value())
    }

    /// Look up a pool; argument order of the mints does not matter.
    pub fn pool(&self, amm_id: &AmmId, mint_x: &MintId, mint_y: &MintId) -> Option<Pool> {
        let key = PoolKey::canonical(*amm_id, *mint_x, *mint_y);
        self.pools.get(&key).map(|entry| *entry.value())
    }

    pub fn amm_count(&self) -> usize {
        self.amms.len()
    }

    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}
