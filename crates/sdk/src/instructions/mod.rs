//! Instruction builders for the programs the launch touches.
//!
//! The wire encoding is borsh; addresses travel as raw 32-byte arrays.

pub mod allowance;
pub mod liquidity;
pub mod pool;
pub mod token;

pub use allowance::*;
pub use liquidity::*;
pub use pool::*;
pub use token::*;

use borsh::{BorshDeserialize, BorshSerialize};

/// Instruction data accepted by the pool program.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum PoolInstruction {
    /// Create the pool account for this identity and set its starting
    /// square-root price.
    InitializePool {
        mint_0: [u8; 32],
        mint_1: [u8; 32],
        fee_bps: u16,
        tick_spacing: u16,
        hook: Option<[u8; 32]>,
        sqrt_price_q64: u128,
    },
    /// Apply a batch of liquidity actions as one unit before `deadline`.
    ModifyLiquidity {
        actions: Vec<LiquidityAction>,
        deadline: i64,
    },
}

/// One action inside a `ModifyLiquidity` batch.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum LiquidityAction {
    /// Mint a position of `liquidity` over `[tick_lower, tick_upper]` to
    /// `recipient`, spending at most the given per-asset maxima.
    MintPosition {
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
        amount_0_max: u64,
        amount_1_max: u64,
        recipient: [u8; 32],
    },
    /// Settle the owed pair of assets for the actions before it.
    SettlePair { mint_0: [u8; 32], mint_1: [u8; 32] },
}

/// Instruction data accepted by the allowance registry program.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub enum AllowanceInstruction {
    /// Record a delegation of `amount` to the position manager until
    /// `expiry`.
    Approve { amount: u64, expiry: i64 },
}
