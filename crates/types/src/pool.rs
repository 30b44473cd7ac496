//! Pool identity and the initial liquidity request.

use crate::constants::FEE_TIERS;
use crate::error::{LaunchError, LaunchResult};
use crate::pair::CanonicalPair;
use solana_sdk::{pubkey::Pubkey, signature::Signature};

/// The unique key identifying a pool instance.
///
/// Opaque to the orchestrator: the same value must be passed unchanged to
/// pool initialization and to the liquidity submission, otherwise the pool
/// program resolves a different pool than the one just created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolIdentity {
    pub mint_0: Pubkey,
    pub mint_1: Pubkey,
    pub fee_bps: u16,
    pub tick_spacing: u16,
    /// Hook program attached to the pool, `None` for a plain pool
    pub hook: Option<Pubkey>,
}

impl PoolIdentity {
    /// Build the identity from an already-canonicalized pair.
    ///
    /// The `(fee_bps, tick_spacing)` combination must be one of the fixed
    /// tiers the pool program accepts.
    pub fn new(
        pair: &CanonicalPair,
        fee_bps: u16,
        tick_spacing: u16,
        hook: Option<Pubkey>,
    ) -> LaunchResult<Self> {
        if !FEE_TIERS.contains(&(fee_bps, tick_spacing)) {
            return Err(LaunchError::InvalidPriceOrIdentity(format!(
                "unsupported fee tier: {} bps with tick spacing {}",
                fee_bps, tick_spacing
            )));
        }
        Ok(Self {
            mint_0: pair.asset_0.mint,
            mint_1: pair.asset_1.mint,
            fee_bps,
            tick_spacing,
            hook,
        })
    }
}

/// The desired initial position, computed after pool initialization and
/// consumed exactly once by the submission step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityRequest {
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Derived joint liquidity scalar, never user-supplied
    pub liquidity: u128,
    /// Canonical deposit for asset 0 inflated by the slippage margin
    pub amount_0_max: u64,
    /// Canonical deposit for asset 1 inflated by the slippage margin
    pub amount_1_max: u64,
    /// Owner of the minted position
    pub recipient: Pubkey,
    /// Unix timestamp after which the submission must be rejected
    pub deadline: i64,
}

/// Receipt returned by an accepted liquidity submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReceipt {
    /// Ledger signature of the combined mint + settle transaction
    pub signature: Signature,
    /// Mint of the position token credited to the recipient
    pub position_mint: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::AssetDescriptor;

    fn pair() -> CanonicalPair {
        let (ia, pa) = AssetDescriptor::split_supply(1_000);
        let a = AssetDescriptor::new(Pubkey::new_unique(), 9, 1_000, ia, pa).unwrap();
        let b = AssetDescriptor::new(Pubkey::new_unique(), 6, 1_000, ia, pa).unwrap();
        CanonicalPair::order(a, 1, b, 2).unwrap()
    }

    #[test]
    fn identity_follows_canonical_order() {
        let pair = pair();
        let identity = PoolIdentity::new(&pair, 30, 60, None).unwrap();
        assert_eq!(identity.mint_0, pair.asset_0.mint);
        assert_eq!(identity.mint_1, pair.asset_1.mint);
        assert!(identity.mint_0 < identity.mint_1);
    }

    #[test]
    fn identity_rejects_unknown_fee_tier() {
        let pair = pair();
        assert!(PoolIdentity::new(&pair, 30, 10, None).is_err());
        assert!(PoolIdentity::new(&pair, 2, 1, None).is_err());
    }
}
