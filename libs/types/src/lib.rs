//! # Poolkit Types Library
//!
//! Shared data model for the Poolkit liquidity pool engine.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: All financial values are integer token amounts
//!   in the asset's smallest unit; no floating point anywhere
//! - **Type Safety**: Distinct identifier types prevent mixing amm ids,
//!   asset mints, and account identities
//! - **Explicit State**: Pool balances are modeled as an ephemeral
//!   [`ReserveSnapshot`] supplied per call, never cached inside the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use poolkit_types::{AmmId, MintId, PoolKey, ReserveSnapshot};
//!
//! let amm = AmmId::new([1; 32]);
//! let key = PoolKey::canonical(amm, MintId::new([9; 32]), MintId::new([2; 32]));
//! assert!(key.mint_a < key.mint_b);
//!
//! let snapshot = ReserveSnapshot::new(1_000, 2_000, 1_414);
//! assert!(snapshot.is_consistent());
//! ```

pub mod identifiers;
pub mod pool;
pub mod snapshot;

pub use identifiers::{AccountId, AmmId, IdentifierError, MintId};
pub use pool::{AmmConfig, Pool, PoolKey};
pub use snapshot::ReserveSnapshot;
