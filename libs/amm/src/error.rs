//! Engine error taxonomy
//!
//! Every variant is a local validation failure. The engine mutates nothing
//! on its own (the registry insert is the single exception and is atomic),
//! so a failed call has no partial state to recover: errors are returned
//! synchronously to the caller, never logged or retried internally. The
//! ledger-interaction layer decides whether to surface, abandon, or resubmit
//! with adjusted parameters.

use thiserror::Error;

use poolkit_types::AmmId;

pub type Result<T> = std::result::Result<T, AmmError>;

/// Failures the liquidity pool engine can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// An intermediate product exceeded representable precision, or a
    /// division had a zero denominator. Fatal to the call; never retried
    /// with different rounding.
    #[error("arithmetic overflow in pool calculation")]
    ArithmeticOverflow,

    /// Fee must be below 100%.
    #[error("invalid fee: {fee_bps} bps is not below 10000")]
    InvalidFee { fee_bps: u16 },

    /// The amm id is already registered.
    #[error("amm {amm_id} is already registered")]
    DuplicateAmm { amm_id: AmmId },

    /// The amm id is not registered.
    #[error("amm {amm_id} is not registered")]
    UnknownAmm { amm_id: AmmId },

    /// A pool needs two distinct asset mints.
    #[error("pool mints must be distinct")]
    IdenticalMints,

    /// The canonical (amm, mint pair) triple already has a pool.
    #[error("pool already exists for this amm and mint pair")]
    DuplicatePool,

    /// Seeding deposit whose liquidity `floor(sqrt(a*b))` is zero.
    #[error("initial deposit too small: seeded liquidity rounds to zero")]
    InsufficientInitialLiquidity,

    /// Proportional deposit that would mint zero liquidity.
    #[error("deposit would mint zero liquidity")]
    ZeroLiquidityMinted,

    /// Withdraw of zero liquidity tokens.
    #[error("withdraw amount must be non-zero")]
    ZeroWithdraw,

    /// Withdraw of more liquidity than is outstanding.
    #[error("withdraw of {requested} exceeds outstanding liquidity supply {supply}")]
    InsufficientSupply { requested: u64, supply: u64 },

    /// Swap with zero input.
    #[error("swap input must be non-zero")]
    ZeroInput,

    /// Computed output is below the caller's slippage bound, or rounds to
    /// nothing at all.
    #[error("output {amount_out} is below the acceptable minimum {min_amount_out}")]
    OutputTooSmall { amount_out: u64, min_amount_out: u64 },

    /// Snapshot violates `reserves empty <=> supply zero`.
    #[error("reserve snapshot is inconsistent: empty reserves require zero liquidity supply")]
    InconsistentSnapshot,

    /// The pool cannot price the action: one or both reserves are empty, or
    /// the action would drain a reserve completely.
    #[error("pool has insufficient liquidity for this action")]
    InsufficientLiquidity,

    /// Constant-product self-check failed: the quote would decrease
    /// `reserve_in * reserve_out`.
    #[error("constant product invariant would decrease")]
    InvariantViolated,
}
