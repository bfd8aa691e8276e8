//! # Poolkit AMM Library - Constant-Product Pool Engine
//!
//! ## Purpose
//!
//! Exact integer mathematics for a two-asset constant-product market maker:
//! pool creation, proportional liquidity deposit, fee-adjusted swap quoting,
//! and proportional liquidity withdrawal. All arithmetic is 64-bit token
//! amounts with 128-bit intermediates and floor rounding; there is no
//! floating point anywhere, so every quote is reproducible and every
//! invariant checkable to the unit.
//!
//! ## Integration Points
//!
//! - **Input Sources**: fresh [`ReserveSnapshot`] values and action
//!   parameters from the ledger-interaction layer
//! - **Output Destinations**: exact quotes ([`DepositQuote`], [`SwapQuote`],
//!   [`WithdrawQuote`]) the ledger layer turns into transfers, mints, and
//!   burns, applied as an atomic batch
//! - **State**: none inside the math paths; the [`AmmRegistry`] holds the
//!   immutable amm/pool configuration only
//!
//! ## Architecture Role
//!
//! The engine computes, the ledger executes. Reserves live in escrows
//! controlled by a derived pool authority; this crate only decides how much
//! of each asset moves and how the liquidity supply changes. A failed call
//! returns a typed [`AmmError`] and has no side effects.

pub mod error;
pub mod liquidity;
pub mod math;
pub mod registry;
pub mod swap;

pub use error::{AmmError, Result};
pub use liquidity::{
    deposit, initial_deposit, quote_deposit, quote_withdraw, withdraw, DepositQuote,
    WithdrawQuote,
};
pub use math::{integer_sqrt, mul_div, BPS_DENOMINATOR};
pub use registry::{derive_liquidity_mint, derive_pool_authority, AmmRegistry};
pub use swap::{quote_swap, quote_swap_in_pool, PoolSwapQuote, SwapDirection, SwapQuote};

/// Common model types, re-exported for downstream convenience.
pub use poolkit_types::{AccountId, AmmConfig, AmmId, MintId, Pool, PoolKey, ReserveSnapshot};
