//! The capability boundary between the orchestrator and the chain.
//!
//! The pool protocol and the token-issuance collaborator are reached only
//! through this trait, so the launch sequence and its failure semantics can
//! be exercised against an in-memory fake without network access.

use launch_types::{AssetDescriptor, LaunchResult, LiquidityRequest, PoolIdentity, PositionReceipt};
use solana_sdk::pubkey::Pubkey;

/// Externally-observable ledger operations the launch sequence performs.
///
/// Every method maps to one atomically applied ledger operation: it is
/// either fully applied or fully rejected, so the orchestrator carries no
/// compensation logic of its own.
pub trait Ledger {
    /// Issue a fixed-supply fungible asset, splitting the supply
    /// deterministically between the issuer and the fixed partner.
    fn issue_asset(&self, total_supply: u64, decimals: u8) -> LaunchResult<AssetDescriptor>;

    /// Create the pool for `identity` at the given Q64.64 square-root
    /// starting price, returning the starting tick. Fails if a pool with
    /// this identity already exists.
    fn initialize_pool(&self, identity: &PoolIdentity, sqrt_price_q64: u128) -> LaunchResult<i32>;

    /// Grant the position manager a delegated allowance of `amount` over
    /// `mint`, valid until `expiry`.
    fn grant_allowance(&self, mint: &Pubkey, amount: u64, expiry: i64) -> LaunchResult<()>;

    /// Submit the paired mint-position and settle actions as one atomic
    /// request. Either the position is minted and funded, or nothing is.
    fn submit_liquidity(
        &self,
        identity: &PoolIdentity,
        request: &LiquidityRequest,
    ) -> LaunchResult<PositionReceipt>;

    /// Current ledger clock, used to anchor the submission deadline.
    fn unix_timestamp(&self) -> LaunchResult<i64>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn issue_asset(&self, total_supply: u64, decimals: u8) -> LaunchResult<AssetDescriptor> {
        (**self).issue_asset(total_supply, decimals)
    }

    fn initialize_pool(&self, identity: &PoolIdentity, sqrt_price_q64: u128) -> LaunchResult<i32> {
        (**self).initialize_pool(identity, sqrt_price_q64)
    }

    fn grant_allowance(&self, mint: &Pubkey, amount: u64, expiry: i64) -> LaunchResult<()> {
        (**self).grant_allowance(mint, amount, expiry)
    }

    fn submit_liquidity(
        &self,
        identity: &PoolIdentity,
        request: &LiquidityRequest,
    ) -> LaunchResult<PositionReceipt> {
        (**self).submit_liquidity(identity, request)
    }

    fn unix_timestamp(&self) -> LaunchResult<i64> {
        (**self).unix_timestamp()
    }
}
