//! Validated inputs for one launch run.

use launch_math::sqrt_price_from_price;
use launch_types::{
    LaunchError, LaunchResult, BPS_DENOMINATOR, FEE_TIERS, MAX_TICK, MIN_TICK,
};
use solana_sdk::pubkey::Pubkey;

/// Everything a single launch run needs, validated up front so the
/// orchestrator only deals with ledger-side failures.
#[derive(Debug, Clone)]
pub struct LaunchParams {
    /// Total supply minted for asset A
    pub supply_a: u64,
    /// Total supply minted for asset B
    pub supply_b: u64,
    pub decimals_a: u8,
    pub decimals_b: u8,
    pub fee_bps: u16,
    pub tick_spacing: u16,
    /// Starting pool price, Q64.64 square root
    pub starting_sqrt_price: u128,
    /// Position range; `None` selects the widest on-grid range
    pub tick_lower: Option<i32>,
    pub tick_upper: Option<i32>,
    /// Target deposit of asset A into the position
    pub deposit_a: u64,
    /// Target deposit of asset B into the position
    pub deposit_b: u64,
    /// Margin added to the deposit maxima, in basis points
    pub slippage_bps: u64,
    /// Seconds past the ledger clock before the submission expires
    pub deadline_offset_secs: i64,
    /// Owner of the minted position
    pub recipient: Pubkey,
    /// Optional hook program baked into the pool identity
    pub hook: Option<Pubkey>,
}

impl LaunchParams {
    pub fn validate(&self) -> LaunchResult<()> {
        if self.supply_a == 0 || self.supply_b == 0 {
            return Err(LaunchError::Issuance("supply must be non-zero".into()));
        }
        if !FEE_TIERS.contains(&(self.fee_bps, self.tick_spacing)) {
            return Err(LaunchError::InvalidPriceOrIdentity(format!(
                "unsupported fee tier: {} bps with tick spacing {}",
                self.fee_bps, self.tick_spacing
            )));
        }
        if self.starting_sqrt_price == 0 {
            return Err(LaunchError::InvalidPriceOrIdentity(
                "starting sqrt price must be non-zero".into(),
            ));
        }
        if self.deposit_a == 0 && self.deposit_b == 0 {
            return Err(LaunchError::LiquidityDerivation(
                "at least one deposit must be non-zero".into(),
            ));
        }
        // Deposits come out of the issuer's half of the supply.
        if self.deposit_a > self.supply_a / 2 || self.deposit_b > self.supply_b / 2 {
            return Err(LaunchError::LiquidityDerivation(
                "deposit exceeds the issuer share of the supply".into(),
            ));
        }
        if let (Some(lower), Some(upper)) = (self.tick_lower, self.tick_upper) {
            if !(MIN_TICK..=MAX_TICK).contains(&lower) || !(MIN_TICK..=MAX_TICK).contains(&upper) {
                return Err(LaunchError::LiquidityDerivation(format!(
                    "position range [{}, {}] outside [{}, {}]",
                    lower, upper, MIN_TICK, MAX_TICK
                )));
            }
        }
        if self.tick_lower.is_some() != self.tick_upper.is_some() {
            return Err(LaunchError::LiquidityDerivation(
                "tick bounds must be given together or not at all".into(),
            ));
        }
        if self.deadline_offset_secs <= 0 {
            return Err(LaunchError::DeadlineExpired);
        }
        Ok(())
    }
}

/// Resolve the starting square-root price from whichever form the operator
/// gave: either the Q64.64 square root directly, or a plain Q64.64 exchange
/// rate to take the root of. Exactly one must be present.
pub fn resolve_starting_sqrt_price(
    price_q64: Option<u128>,
    sqrt_price_q64: Option<u128>,
) -> LaunchResult<u128> {
    match (price_q64, sqrt_price_q64) {
        (None, Some(sqrt)) => Ok(sqrt),
        (Some(price), None) => sqrt_price_from_price(price)
            .map_err(|e| LaunchError::InvalidPriceOrIdentity(e.to_string())),
        _ => Err(LaunchError::InvalidPriceOrIdentity(
            "give exactly one of the starting price and its square root".into(),
        )),
    }
}

/// Inflate a deposit by the slippage margin, flooring the result.
///
/// Saturates at `u64::MAX`, which the settlement treats as "no bound".
pub fn apply_slippage(amount: u64, slippage_bps: u64) -> u64 {
    // Widen before adding: the margin itself may be near u64::MAX, and the
    // widened product can still exceed 128 bits.
    let factor = u128::from(BPS_DENOMINATOR) + u128::from(slippage_bps);
    let scaled = u128::from(amount)
        .checked_mul(factor)
        .map(|product| product / u128::from(BPS_DENOMINATOR))
        .unwrap_or(u128::MAX);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
