/// Protocol constants used across the launch factory crates

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Q64 fixed-point scale factor: 2^64
pub const Q64: u128 = 1u128 << 64;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================================
// Tick and Price Constants
// ============================================================================

/// Minimum tick index supported by the pool price curve
pub const MIN_TICK: i32 = -443_636;

/// Maximum tick index supported by the pool price curve
pub const MAX_TICK: i32 = 443_636;

/// Square-root price at a 1:1 exchange rate, Q64.64
pub const SQRT_PRICE_ONE: u128 = Q64;

// ============================================================================
// Fee Tiers
// ============================================================================

/// Valid (fee_bps, tick_spacing) combinations accepted by the pool program.
pub const FEE_TIERS: &[(u16, u16)] = &[(1, 1), (5, 10), (30, 60), (100, 200)];

/// Default pool fee in basis points (0.3%)
pub const DEFAULT_FEE_BPS: u16 = 30;

/// Tick spacing paired with the default fee tier
pub const DEFAULT_TICK_SPACING: u16 = 60;

// ============================================================================
// Launch Defaults
// ============================================================================

/// Default slippage margin applied to the deposit maxima (10%)
pub const DEFAULT_SLIPPAGE_BPS: u64 = 1_000;

/// Default offset added to the ledger clock for the submission deadline
pub const DEFAULT_DEADLINE_OFFSET_SECS: i64 = 3_600;

/// Default decimal precision for newly issued mints
pub const DEFAULT_DECIMALS: u8 = 9;
