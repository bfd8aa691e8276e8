//! Liquidity deposit and withdrawal sizing
//!
//! Pure quote functions over explicit reserve/supply values. A quote tells
//! the ledger layer exactly how much to debit or credit and how much
//! liquidity to mint or burn; applying the transfers and persisting the new
//! reserves is the caller's job.
//!
//! Sizing rules:
//! - Seeding an empty pool mints `floor(sqrt(amount_a * amount_b))`, the
//!   standard fair initial share without an external price reference.
//! - Later deposits preserve the pool's price ratio: liquidity is the
//!   minimum of the two per-side ratios, and only the proportional amounts
//!   matching that liquidity are debited. Excess on the richer side stays
//!   with the depositor.
//! - Withdrawals return reserves pro rata to the liquidity burned. A full
//!   withdrawal returns the reserves exactly, with no residual dust.

use serde::{Deserialize, Serialize};
use tracing::trace;

use poolkit_types::ReserveSnapshot;

use crate::error::{AmmError, Result};
use crate::math;

/// Outcome of a deposit quote: liquidity to mint and the exact amounts to
/// debit from the depositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositQuote {
    pub liquidity_minted: u64,
    /// Actual `mint_a` debit; at most the requested amount.
    pub amount_a: u64,
    /// Actual `mint_b` debit; at most the requested amount.
    pub amount_b: u64,
}

/// Outcome of a withdraw quote: the exact amounts returned for the burned
/// liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawQuote {
    pub amount_a: u64,
    pub amount_b: u64,
}

/// Size the seeding deposit of an empty pool.
///
/// Only valid when the liquidity supply is zero. Mints
/// `floor(sqrt(amount_a * amount_b))` and debits the full requested
/// amounts. Fails with [`AmmError::InsufficientInitialLiquidity`] when the
/// product square-roots to zero (e.g. one side is zero).
pub fn initial_deposit(amount_a: u64, amount_b: u64) -> Result<DepositQuote> {
    let minted = math::integer_sqrt((amount_a as u128) * (amount_b as u128));
    if minted == 0 {
        return Err(AmmError::InsufficientInitialLiquidity);
    }
    Ok(DepositQuote {
        liquidity_minted: minted,
        amount_a,
        amount_b,
    })
}

/// Size a ratio-preserving deposit into a funded pool.
///
/// Mints `min(amount_a * supply / reserve_a, amount_b * supply / reserve_b)`
/// and debits only the proportional amounts matching that liquidity; any
/// excess requested on one side is left with the depositor. Fails with
/// [`AmmError::ZeroLiquidityMinted`] when the minted amount rounds to zero.
pub fn deposit(
    reserve_a: u64,
    reserve_b: u64,
    liquidity_supply: u64,
    amount_a: u64,
    amount_b: u64,
) -> Result<DepositQuote> {
    let liquidity_from_a = math::mul_div(amount_a, liquidity_supply, reserve_a)?;
    let liquidity_from_b = math::mul_div(amount_b, liquidity_supply, reserve_b)?;
    let minted = liquidity_from_a.min(liquidity_from_b);
    if minted == 0 {
        return Err(AmmError::ZeroLiquidityMinted);
    }

    let actual_a = math::mul_div(minted, reserve_a, liquidity_supply)?;
    let actual_b = math::mul_div(minted, reserve_b, liquidity_supply)?;
    trace!(minted, actual_a, actual_b, "deposit sized");

    Ok(DepositQuote {
        liquidity_minted: minted,
        amount_a: actual_a,
        amount_b: actual_b,
    })
}

/// Size a withdrawal of `liquidity` tokens against the current reserves.
///
/// Amounts are pro rata: `reserve * liquidity / supply`, floored. When
/// `liquidity == supply` the division is exact and the full reserves come
/// back. Burning liquidity that would return zero on a non-empty side is
/// rejected rather than silently donating the dust to the pool.
pub fn withdraw(
    reserve_a: u64,
    reserve_b: u64,
    liquidity_supply: u64,
    liquidity: u64,
) -> Result<WithdrawQuote> {
    if liquidity == 0 {
        return Err(AmmError::ZeroWithdraw);
    }
    if liquidity > liquidity_supply {
        return Err(AmmError::InsufficientSupply {
            requested: liquidity,
            supply: liquidity_supply,
        });
    }

    let amount_a = math::mul_div(reserve_a, liquidity, liquidity_supply)?;
    let amount_b = math::mul_div(reserve_b, liquidity, liquidity_supply)?;
    if (amount_a == 0 && reserve_a != 0) || (amount_b == 0 && reserve_b != 0) {
        return Err(AmmError::OutputTooSmall {
            amount_out: 0,
            min_amount_out: 1,
        });
    }

    Ok(WithdrawQuote { amount_a, amount_b })
}

/// Snapshot-level deposit entry point.
///
/// Validates snapshot consistency, then routes to the seeding or the
/// proportional path depending on the current liquidity supply.
pub fn quote_deposit(
    snapshot: &ReserveSnapshot,
    amount_a: u64,
    amount_b: u64,
) -> Result<DepositQuote> {
    if !snapshot.is_consistent() {
        return Err(AmmError::InconsistentSnapshot);
    }
    if snapshot.liquidity_supply == 0 {
        initial_deposit(amount_a, amount_b)
    } else {
        deposit(
            snapshot.reserve_a,
            snapshot.reserve_b,
            snapshot.liquidity_supply,
            amount_a,
            amount_b,
        )
    }
}

/// Snapshot-level withdraw entry point.
pub fn quote_withdraw(snapshot: &ReserveSnapshot, liquidity: u64) -> Result<WithdrawQuote> {
    if !snapshot.is_consistent() {
        return Err(AmmError::InconsistentSnapshot);
    }
    withdraw(
        snapshot.reserve_a,
        snapshot.reserve_b,
        snapshot.liquidity_supply,
        liquidity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_deposit_is_geometric_mean() {
        let quote = initial_deposit(1_000, 2_000).unwrap();
        assert_eq!(quote.liquidity_minted, 1_414);
        assert_eq!(quote.amount_a, 1_000);
        assert_eq!(quote.amount_b, 2_000);
    }

    #[test]
    fn initial_deposit_rejects_zero_product() {
        assert_eq!(
            initial_deposit(0, 2_000),
            Err(AmmError::InsufficientInitialLiquidity)
        );
        assert_eq!(
            initial_deposit(0, 0),
            Err(AmmError::InsufficientInitialLiquidity)
        );
    }

    #[test]
    fn deposit_takes_minimum_ratio_and_leaves_excess() {
        // Pool at 1000:2000 with 1414 supply; request 500 A and 1200 B.
        // A supports 707 liquidity, B supports 848; A binds.
        let quote = deposit(1_000, 2_000, 1_414, 500, 1_200).unwrap();
        assert_eq!(quote.liquidity_minted, 707);
        assert_eq!(quote.amount_a, 500);
        // Only the proportional 1000 B is debited; 200 B stays undebited.
        assert_eq!(quote.amount_b, 1_000);
    }

    #[test]
    fn deposit_never_debits_more_than_requested() {
        let quote = deposit(1_000, 2_000, 1_414, 333, 999).unwrap();
        assert!(quote.amount_a <= 333);
        assert!(quote.amount_b <= 999);
    }

    #[test]
    fn deposit_rejects_dust_that_mints_nothing() {
        // 1 unit of A against a deep pool rounds to zero liquidity.
        assert_eq!(
            deposit(10_000_000, 20_000_000, 1_000, 1, 1),
            Err(AmmError::ZeroLiquidityMinted)
        );
    }

    #[test]
    fn withdraw_is_proportional() {
        let quote = withdraw(1_600, 2_818, 2_121, 121).unwrap();
        assert_eq!(quote.amount_a, 91);
        assert_eq!(quote.amount_b, 160);
    }

    #[test]
    fn full_withdraw_returns_reserves_exactly() {
        let quote = withdraw(1_509, 2_658, 2_000, 2_000).unwrap();
        assert_eq!(quote.amount_a, 1_509);
        assert_eq!(quote.amount_b, 2_658);
    }

    #[test]
    fn withdraw_rejects_zero_amount() {
        assert_eq!(withdraw(1_000, 2_000, 1_414, 0), Err(AmmError::ZeroWithdraw));
    }

    #[test]
    fn withdraw_rejects_more_than_supply() {
        assert_eq!(
            withdraw(1_000, 2_000, 1_414, 1_415),
            Err(AmmError::InsufficientSupply {
                requested: 1_415,
                supply: 1_414
            })
        );
    }

    #[test]
    fn withdraw_rejects_burn_for_nothing() {
        // 1 of 1_000_000 liquidity against tiny reserves returns zero on
        // both sides; the burn is refused instead of vanishing.
        assert_eq!(
            withdraw(100, 100, 1_000_000, 1),
            Err(AmmError::OutputTooSmall {
                amount_out: 0,
                min_amount_out: 1
            })
        );
    }

    #[test]
    fn quote_deposit_routes_on_supply() {
        let empty = ReserveSnapshot::empty();
        let seeded = quote_deposit(&empty, 1_000, 2_000).unwrap();
        assert_eq!(seeded.liquidity_minted, 1_414);

        let funded = ReserveSnapshot::new(1_000, 2_000, 1_414);
        let followup = quote_deposit(&funded, 500, 1_200).unwrap();
        assert_eq!(followup.liquidity_minted, 707);
    }

    #[test]
    fn snapshot_entry_points_reject_inconsistent_state() {
        let bad = ReserveSnapshot::new(0, 0, 5);
        assert_eq!(
            quote_deposit(&bad, 10, 10),
            Err(AmmError::InconsistentSnapshot)
        );
        assert_eq!(quote_withdraw(&bad, 5), Err(AmmError::InconsistentSnapshot));
    }
}
