//! Persisted record of a completed launch.

use launch_types::{
    AssetDescriptor, CanonicalPair, LiquidityRequest, PoolIdentity, PositionReceipt,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Everything an operator needs to find the launched pool and position
/// again. Written to disk as JSON after a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchReport {
    pub mint_a: String,
    pub mint_b: String,
    /// Canonical pair order, `mint_0 < mint_1`
    pub mint_0: String,
    pub mint_1: String,
    pub fee_bps: u16,
    pub tick_spacing: u16,
    pub hook: Option<String>,
    pub starting_tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub amount_0_max: u64,
    pub amount_1_max: u64,
    pub deadline: i64,
    pub recipient: String,
    pub position_mint: String,
    pub signature: String,
}

impl LaunchReport {
    pub fn new(
        asset_a: &AssetDescriptor,
        asset_b: &AssetDescriptor,
        pair: &CanonicalPair,
        identity: &PoolIdentity,
        starting_tick: i32,
        request: &LiquidityRequest,
        receipt: &PositionReceipt,
    ) -> Self {
        Self {
            mint_a: asset_a.mint.to_string(),
            mint_b: asset_b.mint.to_string(),
            mint_0: pair.asset_0.mint.to_string(),
            mint_1: pair.asset_1.mint.to_string(),
            fee_bps: identity.fee_bps,
            tick_spacing: identity.tick_spacing,
            hook: identity.hook.map(|h| h.to_string()),
            starting_tick,
            tick_lower: request.tick_lower,
            tick_upper: request.tick_upper,
            liquidity: request.liquidity,
            amount_0_max: request.amount_0_max,
            amount_1_max: request.amount_1_max,
            deadline: request.deadline,
            recipient: request.recipient.to_string(),
            position_mint: receipt.position_mint.to_string(),
            signature: receipt.signature.to_string(),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{pubkey::Pubkey, signature::Signature};

    #[test]
    fn report_round_trips_through_json() {
        let (ia, pa) = AssetDescriptor::split_supply(1_000);
        let a = AssetDescriptor::new(Pubkey::new_unique(), 9, 1_000, ia, pa).unwrap();
        let b = AssetDescriptor::new(Pubkey::new_unique(), 6, 1_000, ia, pa).unwrap();
        let pair = CanonicalPair::order(a, 100, b, 200).unwrap();
        let identity = PoolIdentity::new(&pair, 30, 60, None).unwrap();
        let request = LiquidityRequest {
            tick_lower: -443_580,
            tick_upper: 443_580,
            liquidity: u128::from(u64::MAX) + 1,
            amount_0_max: 110,
            amount_1_max: 220,
            recipient: Pubkey::new_unique(),
            deadline: 1_700_000_000,
        };
        let receipt = PositionReceipt {
            signature: Signature::new_unique(),
            position_mint: Pubkey::new_unique(),
        };

        let report = LaunchReport::new(&a, &b, &pair, &identity, 0, &request, &receipt);
        let json = serde_json::to_string(&report).unwrap();
        let back: LaunchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mint_0, report.mint_0);
        assert_eq!(back.liquidity, request.liquidity);
        assert_eq!(back.signature, receipt.signature.to_string());
    }
}
