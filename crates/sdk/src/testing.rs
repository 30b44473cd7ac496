//! Scriptable in-memory [`Ledger`] for exercising the launch sequence.

use crate::ledger::Ledger;
use launch_math::{amounts_for_liquidity, mul_div, sqrt_price_at_tick, tick_at_sqrt_price};
use launch_types::{
    AssetDescriptor, LaunchError, LaunchResult, LiquidityRequest, PoolIdentity, PositionReceipt,
    BPS_DENOMINATOR,
};
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
struct MockState {
    issued: Vec<AssetDescriptor>,
    pools: HashMap<PoolIdentity, u128>,
    allowances: Vec<(Pubkey, u64, i64)>,
    submissions: Vec<(PoolIdentity, LiquidityRequest)>,
}

/// In-memory ledger with scriptable failure modes.
///
/// Each `with_*` knob injects one failure or perturbation so tests can
/// drive the sequence into a specific error path without touching RPC.
pub struct MockLedger {
    now: i64,
    submit_latency_secs: i64,
    fail_issuance: bool,
    fail_allowance_for: Option<Pubkey>,
    price_drift_bps: u64,
    fixed_mints: Option<Vec<Pubkey>>,
    next_mint: Cell<usize>,
    state: RefCell<MockState>,
}

impl MockLedger {
    pub fn new(now: i64) -> Self {
        Self {
            now,
            submit_latency_secs: 0,
            fail_issuance: false,
            fail_allowance_for: None,
            price_drift_bps: 0,
            fixed_mints: None,
            next_mint: Cell::new(0),
            state: RefCell::new(MockState::default()),
        }
    }

    /// Clock skew applied between deadline anchoring and submission, to
    /// simulate a transaction landing late.
    pub fn with_submit_latency(mut self, secs: i64) -> Self {
        self.submit_latency_secs = secs;
        self
    }

    pub fn with_failing_issuance(mut self) -> Self {
        self.fail_issuance = true;
        self
    }

    pub fn with_failing_allowance(mut self, mint: Pubkey) -> Self {
        self.fail_allowance_for = Some(mint);
        self
    }

    /// Drift the pool price upward by `bps` between initialization and
    /// settlement, to trip the slippage bound.
    pub fn with_price_drift(mut self, bps: u64) -> Self {
        self.price_drift_bps = bps;
        self
    }

    /// Issue from a fixed cycle of mints instead of fresh ones, so a
    /// repeated run reproduces the same pool identity.
    pub fn with_fixed_mints(mut self, mints: Vec<Pubkey>) -> Self {
        self.fixed_mints = Some(mints);
        self
    }

    pub fn issued(&self) -> Vec<AssetDescriptor> {
        self.state.borrow().issued.clone()
    }

    pub fn allowances(&self) -> Vec<(Pubkey, u64, i64)> {
        self.state.borrow().allowances.clone()
    }

    pub fn submissions(&self) -> Vec<(PoolIdentity, LiquidityRequest)> {
        self.state.borrow().submissions.clone()
    }

    fn next_mint(&self) -> Pubkey {
        match &self.fixed_mints {
            Some(mints) if !mints.is_empty() => {
                let i = self.next_mint.get();
                self.next_mint.set(i + 1);
                mints[i % mints.len()]
            }
            _ => Pubkey::new_unique(),
        }
    }

    fn has_allowance(&self, mint: &Pubkey, now: i64) -> bool {
        self.state
            .borrow()
            .allowances
            .iter()
            .any(|(m, amount, expiry)| m == mint && *amount > 0 && *expiry > now)
    }

    fn drifted_sqrt_price(&self, sqrt_price: u128) -> LaunchResult<u128> {
        if self.price_drift_bps == 0 {
            return Ok(sqrt_price);
        }
        let scaled = mul_div(
            sqrt_price,
            u128::from(BPS_DENOMINATOR + self.price_drift_bps),
            u128::from(BPS_DENOMINATOR),
        )?;
        Ok(scaled)
    }
}

impl Ledger for MockLedger {
    fn issue_asset(&self, total_supply: u64, decimals: u8) -> LaunchResult<AssetDescriptor> {
        if self.fail_issuance {
            return Err(LaunchError::Issuance("issuance rejected".into()));
        }
        let (issuer_amount, partner_amount) = AssetDescriptor::split_supply(total_supply);
        let asset = AssetDescriptor::new(
            self.next_mint(),
            decimals,
            total_supply,
            issuer_amount,
            partner_amount,
        )?;
        self.state.borrow_mut().issued.push(asset);
        Ok(asset)
    }

    fn initialize_pool(&self, identity: &PoolIdentity, sqrt_price_q64: u128) -> LaunchResult<i32> {
        if sqrt_price_q64 == 0 {
            return Err(LaunchError::InvalidPriceOrIdentity(
                "starting sqrt price must be non-zero".into(),
            ));
        }
        if identity.mint_0 >= identity.mint_1 {
            return Err(LaunchError::InvalidPriceOrIdentity(
                "pool mints are not in canonical order".into(),
            ));
        }
        let mut state = self.state.borrow_mut();
        if state.pools.contains_key(identity) {
            return Err(LaunchError::AlreadyInitialized);
        }
        state.pools.insert(*identity, sqrt_price_q64);
        let tick = tick_at_sqrt_price(sqrt_price_q64)
            .map_err(|e| LaunchError::InvalidPriceOrIdentity(e.to_string()))?;
        Ok(tick)
    }

    fn grant_allowance(&self, mint: &Pubkey, amount: u64, expiry: i64) -> LaunchResult<()> {
        if self.fail_allowance_for.as_ref() == Some(mint) {
            return Err(LaunchError::Allowance {
                mint: *mint,
                reason: "approval rejected".into(),
            });
        }
        self.state
            .borrow_mut()
            .allowances
            .push((*mint, amount, expiry));
        Ok(())
    }

    fn submit_liquidity(
        &self,
        identity: &PoolIdentity,
        request: &LiquidityRequest,
    ) -> LaunchResult<PositionReceipt> {
        let now = self.now + self.submit_latency_secs;
        if request.deadline <= now {
            return Err(LaunchError::DeadlineExpired);
        }

        let sqrt_price = {
            let state = self.state.borrow();
            match state.pools.get(identity) {
                Some(price) => *price,
                None => {
                    return Err(LaunchError::AtomicSubmission(
                        "pool does not exist".into(),
                    ))
                }
            }
        };
        for mint in [&identity.mint_0, &identity.mint_1] {
            if !self.has_allowance(mint, now) {
                return Err(LaunchError::AtomicSubmission(format!(
                    "no allowance for mint {}",
                    mint
                )));
            }
        }

        // Settlement accounting at the (possibly drifted) pool price.
        let settle_price = self.drifted_sqrt_price(sqrt_price)?;
        let sqrt_lower = sqrt_price_at_tick(request.tick_lower)?;
        let sqrt_upper = sqrt_price_at_tick(request.tick_upper)?;
        let (need_0, need_1) =
            amounts_for_liquidity(settle_price, sqrt_lower, sqrt_upper, request.liquidity)?;
        if need_0 > request.amount_0_max || need_1 > request.amount_1_max {
            return Err(LaunchError::SlippageExceeded);
        }

        self.state
            .borrow_mut()
            .submissions
            .push((*identity, *request));
        Ok(PositionReceipt {
            signature: Signature::new_unique(),
            position_mint: Pubkey::new_unique(),
        })
    }

    fn unix_timestamp(&self) -> LaunchResult<i64> {
        Ok(self.now)
    }
}
