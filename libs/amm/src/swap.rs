//! Fee-adjusted constant-product swap quoting
//!
//! The fee is deducted from the input before the pricing curve is applied,
//! then the full input (fee included) is added to the reserve: fees accrue
//! to the pool and raise the value of every outstanding liquidity token
//! instead of being paid out separately.
//!
//! Every successful quote re-checks the economic core invariant inside the
//! engine: the product of the two reserves never decreases across a swap.

use serde::{Deserialize, Serialize};
use tracing::trace;

use poolkit_types::ReserveSnapshot;

use crate::error::{AmmError, Result};
use crate::math::{self, BPS_DENOMINATOR};

/// Which side of the pair feeds the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// `mint_a` in, `mint_b` out.
    AToB,
    /// `mint_b` in, `mint_a` out.
    BToA,
}

/// Exact outcome of a swap quote, expressed against the input/output sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuote {
    /// Full input amount the caller transfers in, fee included.
    pub amount_in: u64,
    /// Output amount the caller receives.
    pub amount_out: u64,
    /// Input-side reserve after the swap.
    pub new_reserve_in: u64,
    /// Output-side reserve after the swap.
    pub new_reserve_out: u64,
}

/// Swap quote expressed against the pool's canonical A/B sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSwapQuote {
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub amount_out: u64,
    /// Snapshot the ledger layer should observe after applying the swap.
    /// Liquidity supply is unchanged by swaps.
    pub new_snapshot: ReserveSnapshot,
}

/// Quote a fee-adjusted constant-product swap against one side of a pool.
///
/// Sequence: validate input, deduct the fee from `amount_in`, solve
/// `x * y = k` for the output given the fee-adjusted input, enforce the
/// caller's slippage bound, then self-check that the product of the new
/// reserves did not decrease.
pub fn quote_swap(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fee_bps: u16,
    min_amount_out: u64,
) -> Result<SwapQuote> {
    if amount_in == 0 {
        return Err(AmmError::ZeroInput);
    }
    if fee_bps as u64 >= BPS_DENOMINATOR {
        return Err(AmmError::InvalidFee { fee_bps });
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let amount_in_after_fee = math::mul_div(amount_in, BPS_DENOMINATOR - fee_bps as u64, BPS_DENOMINATOR)?;

    // x*y = k solved for the output, with the fee-adjusted input priced in:
    // amount_out = reserve_out * in_after_fee / (reserve_in + in_after_fee)
    let curve_denominator = math::checked_add(reserve_in, amount_in_after_fee)?;
    let amount_out = math::mul_div(reserve_out, amount_in_after_fee, curve_denominator)?;

    if amount_out == 0 || amount_out < min_amount_out {
        return Err(AmmError::OutputTooSmall {
            amount_out,
            min_amount_out,
        });
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    // The full input, fee included, lands in the reserve.
    let new_reserve_in = math::checked_add(reserve_in, amount_in)?;
    let new_reserve_out = math::checked_sub(reserve_out, amount_out)?;

    // Self-check, not merely a test: x' * y' >= x * y must hold for every
    // quote this engine hands out.
    let k_before = (reserve_in as u128) * (reserve_out as u128);
    let k_after = (new_reserve_in as u128) * (new_reserve_out as u128);
    if k_after < k_before {
        return Err(AmmError::InvariantViolated);
    }

    trace!(amount_in, amount_out, fee_bps, "swap quoted");
    Ok(SwapQuote {
        amount_in,
        amount_out,
        new_reserve_in,
        new_reserve_out,
    })
}

/// Snapshot-level swap entry point.
///
/// Validates snapshot consistency, requires a funded pool on both sides,
/// selects the in/out reserves from `direction`, and maps the quote back to
/// the canonical A/B orientation.
pub fn quote_swap_in_pool(
    snapshot: &ReserveSnapshot,
    direction: SwapDirection,
    amount_in: u64,
    fee_bps: u16,
    min_amount_out: u64,
) -> Result<PoolSwapQuote> {
    if !snapshot.is_consistent() {
        return Err(AmmError::InconsistentSnapshot);
    }
    if snapshot.reserve_a == 0 || snapshot.reserve_b == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let (reserve_in, reserve_out) = match direction {
        SwapDirection::AToB => (snapshot.reserve_a, snapshot.reserve_b),
        SwapDirection::BToA => (snapshot.reserve_b, snapshot.reserve_a),
    };

    let quote = quote_swap(reserve_in, reserve_out, amount_in, fee_bps, min_amount_out)?;

    let (new_reserve_a, new_reserve_b) = match direction {
        SwapDirection::AToB => (quote.new_reserve_in, quote.new_reserve_out),
        SwapDirection::BToA => (quote.new_reserve_out, quote.new_reserve_in),
    };

    Ok(PoolSwapQuote {
        direction,
        amount_in,
        amount_out: quote.amount_out,
        new_snapshot: ReserveSnapshot::new(
            new_reserve_a,
            new_reserve_b,
            snapshot.liquidity_supply,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_matches_fee_then_curve_sequence() {
        // 1100:1900 pool, 3% fee, 100 in: 97 after fee,
        // floor(1900 * 97 / 1197) = 153 out.
        let quote = quote_swap(1_100, 1_900, 100, 300, 0).unwrap();
        assert_eq!(quote.amount_out, 153);
        assert_eq!(quote.new_reserve_in, 1_200);
        assert_eq!(quote.new_reserve_out, 1_747);
    }

    #[test]
    fn product_never_decreases() {
        let quote = quote_swap(1_100, 1_900, 100, 300, 0).unwrap();
        let k_before = 1_100u128 * 1_900;
        let k_after =
            (quote.new_reserve_in as u128) * (quote.new_reserve_out as u128);
        assert!(k_after >= k_before);
    }

    #[test]
    fn zero_fee_swap_still_holds_product() {
        let quote = quote_swap(1_000, 1_000, 500, 0, 0).unwrap();
        // floor(1000 * 500 / 1500) = 333
        assert_eq!(quote.amount_out, 333);
        let k_after =
            (quote.new_reserve_in as u128) * (quote.new_reserve_out as u128);
        assert!(k_after >= 1_000_000);
    }

    #[test]
    fn slippage_bound_is_enforced() {
        assert_eq!(
            quote_swap(1_100, 1_900, 100, 300, 154),
            Err(AmmError::OutputTooSmall {
                amount_out: 153,
                min_amount_out: 154
            })
        );
    }

    #[test]
    fn zero_input_is_rejected() {
        assert_eq!(quote_swap(1_100, 1_900, 0, 300, 0), Err(AmmError::ZeroInput));
    }

    #[test]
    fn full_range_fee_is_rejected() {
        assert_eq!(
            quote_swap(1_100, 1_900, 100, 10_000, 0),
            Err(AmmError::InvalidFee { fee_bps: 10_000 })
        );
    }

    #[test]
    fn empty_reserve_cannot_price() {
        assert_eq!(
            quote_swap(0, 1_900, 100, 300, 0),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            quote_swap(1_100, 0, 100, 300, 0),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn dust_input_that_buys_nothing_is_rejected() {
        // 1 unit in against a deep pool rounds to zero out.
        assert_eq!(
            quote_swap(10_000_000, 10, 1, 300, 0),
            Err(AmmError::OutputTooSmall {
                amount_out: 0,
                min_amount_out: 0
            })
        );
    }

    #[test]
    fn directional_quotes_mirror_each_other() {
        let snapshot = ReserveSnapshot::new(1_100, 1_900, 1_414);

        let a_to_b =
            quote_swap_in_pool(&snapshot, SwapDirection::AToB, 100, 300, 0).unwrap();
        assert_eq!(a_to_b.amount_out, 153);
        assert_eq!(a_to_b.new_snapshot.reserve_a, 1_200);
        assert_eq!(a_to_b.new_snapshot.reserve_b, 1_747);
        assert_eq!(a_to_b.new_snapshot.liquidity_supply, 1_414);

        let b_to_a =
            quote_swap_in_pool(&snapshot, SwapDirection::BToA, 100, 300, 0).unwrap();
        // floor(1100 * 97 / (1900 + 97)) = 53
        assert_eq!(b_to_a.amount_out, 53);
        assert_eq!(b_to_a.new_snapshot.reserve_a, 1_047);
        assert_eq!(b_to_a.new_snapshot.reserve_b, 2_000);
    }

    #[test]
    fn pool_quote_rejects_inconsistent_snapshot() {
        let bad = ReserveSnapshot::new(1_000, 2_000, 0);
        assert_eq!(
            quote_swap_in_pool(&bad, SwapDirection::AToB, 100, 300, 0),
            Err(AmmError::InconsistentSnapshot)
        );
    }

    #[test]
    fn pool_quote_rejects_one_sided_pool() {
        let one_sided = ReserveSnapshot::new(1_000, 0, 500);
        assert_eq!(
            quote_swap_in_pool(&one_sided, SwapDirection::AToB, 100, 300, 0),
            Err(AmmError::InsufficientLiquidity)
        );
    }
}
