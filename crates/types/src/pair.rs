//! Issued assets and the canonicalized pair view of them.

use crate::error::{LaunchError, LaunchResult};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// One of the two fungible assets to be traded.
///
/// Immutable once issued; the supply split invariant
/// `issuer_amount + partner_amount == total_supply` is enforced by
/// [`AssetDescriptor::split_supply`] and checked again on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Mint address of the issued asset
    pub mint: Pubkey,
    /// Decimal precision, fixed at creation
    pub decimals: u8,
    /// Total supply minted at issuance
    pub total_supply: u64,
    /// Share minted to the issuer
    pub issuer_amount: u64,
    /// Share minted to the fixed partner recipient
    pub partner_amount: u64,
}

impl AssetDescriptor {
    pub fn new(
        mint: Pubkey,
        decimals: u8,
        total_supply: u64,
        issuer_amount: u64,
        partner_amount: u64,
    ) -> LaunchResult<Self> {
        if issuer_amount.checked_add(partner_amount) != Some(total_supply) {
            return Err(LaunchError::Issuance(format!(
                "supply split {} + {} does not equal total {}",
                issuer_amount, partner_amount, total_supply
            )));
        }
        Ok(Self {
            mint,
            decimals,
            total_supply,
            issuer_amount,
            partner_amount,
        })
    }

    /// Deterministic supply split: `floor(total / 2)` to the issuer, the
    /// remainder to the partner. Sums back to `total` exactly, odd totals
    /// included.
    pub fn split_supply(total: u64) -> (u64, u64) {
        let issuer = total / 2;
        (issuer, total - issuer)
    }
}

/// The ordering-normalized view of the two assets required by the pool
/// program: `asset_0.mint < asset_1.mint` by raw byte order.
///
/// Built exactly once per run. Every paired quantity introduced later
/// (deposits, slippage maxima) follows this mapping instead of re-deriving
/// the order at its own call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalPair {
    pub asset_0: AssetDescriptor,
    pub asset_1: AssetDescriptor,
    /// Target deposit for `asset_0`
    pub amount_0: u64,
    /// Target deposit for `asset_1`
    pub amount_1: u64,
}

impl CanonicalPair {
    /// Order an unordered `(asset, deposit)` pair into canonical form.
    ///
    /// The deposit amounts travel with their asset through the swap, so
    /// `order(a, x, b, y)` and `order(b, y, a, x)` produce the same value.
    pub fn order(
        asset_a: AssetDescriptor,
        amount_a: u64,
        asset_b: AssetDescriptor,
        amount_b: u64,
    ) -> LaunchResult<Self> {
        if asset_a.mint == asset_b.mint {
            return Err(LaunchError::InvalidPriceOrIdentity(format!(
                "cannot pair mint {} with itself",
                asset_a.mint
            )));
        }
        if asset_a.mint < asset_b.mint {
            Ok(Self {
                asset_0: asset_a,
                asset_1: asset_b,
                amount_0: amount_a,
                amount_1: amount_b,
            })
        } else {
            Ok(Self {
                asset_0: asset_b,
                asset_1: asset_a,
                amount_0: amount_b,
                amount_1: amount_a,
            })
        }
    }
}
