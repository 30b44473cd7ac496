//! The seven-step launch sequence.

use crate::params::{apply_slippage, LaunchParams};
use crate::report::LaunchReport;
use launch_math::{
    align_tick_to_spacing, full_range_ticks, liquidity_for_amounts, sqrt_price_at_tick,
};
use launch_sdk::Ledger;
use launch_types::{
    CanonicalPair, LaunchError, LaunchFailure, LaunchStep, LiquidityRequest, PoolIdentity,
};
use tracing::info;

/// Where a launch run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Running(LaunchStep),
    Completed,
    Failed { step: LaunchStep, cause: String },
}

/// Single-use driver of the launch sequence against a [`Ledger`].
///
/// `run` walks the steps in order and stops at the first failure; the
/// failing step and cause are recorded in the phase and returned. A
/// launcher never runs twice, so a partially-failed run must be restarted
/// from a fresh launcher (and, for the pool, a fresh pair of mints).
pub struct Launcher<L: Ledger> {
    ledger: L,
    params: LaunchParams,
    phase: LaunchPhase,
}

impl<L: Ledger> Launcher<L> {
    pub fn new(ledger: L, params: LaunchParams) -> Self {
        Self {
            ledger,
            params,
            phase: LaunchPhase::Idle,
        }
    }

    pub fn phase(&self) -> &LaunchPhase {
        &self.phase
    }

    fn abort(&mut self, step: LaunchStep, cause: LaunchError) -> LaunchFailure {
        self.phase = LaunchPhase::Failed {
            step,
            cause: cause.to_string(),
        };
        LaunchFailure { step, cause }
    }

    /// Execute the full sequence once.
    pub fn run(&mut self) -> Result<LaunchReport, LaunchFailure> {
        if self.phase != LaunchPhase::Idle {
            return Err(LaunchFailure {
                step: LaunchStep::IssueAssets,
                cause: LaunchError::AlreadyRun,
            });
        }

        // Step A: issue both fixed-supply assets.
        self.phase = LaunchPhase::Running(LaunchStep::IssueAssets);
        self.params
            .validate()
            .map_err(|e| self.abort(LaunchStep::IssueAssets, e))?;
        let asset_a = self
            .ledger
            .issue_asset(self.params.supply_a, self.params.decimals_a)
            .map_err(|e| self.abort(LaunchStep::IssueAssets, e))?;
        let asset_b = self
            .ledger
            .issue_asset(self.params.supply_b, self.params.decimals_b)
            .map_err(|e| self.abort(LaunchStep::IssueAssets, e))?;
        info!(mint_a = %asset_a.mint, mint_b = %asset_b.mint, "assets issued");

        // Step B: canonicalize; deposits travel with their asset.
        self.phase = LaunchPhase::Running(LaunchStep::Canonicalize);
        let pair = CanonicalPair::order(
            asset_a,
            self.params.deposit_a,
            asset_b,
            self.params.deposit_b,
        )
        .map_err(|e| self.abort(LaunchStep::Canonicalize, e))?;

        // Step C: the identity both later steps must share verbatim.
        self.phase = LaunchPhase::Running(LaunchStep::BuildIdentity);
        let identity = PoolIdentity::new(
            &pair,
            self.params.fee_bps,
            self.params.tick_spacing,
            self.params.hook,
        )
        .map_err(|e| self.abort(LaunchStep::BuildIdentity, e))?;

        // Step D: create the pool at the starting price.
        self.phase = LaunchPhase::Running(LaunchStep::InitializePool);
        let starting_tick = self
            .ledger
            .initialize_pool(&identity, self.params.starting_sqrt_price)
            .map_err(|e| self.abort(LaunchStep::InitializePool, e))?;
        info!(starting_tick, "pool initialized");

        // Step E: unbounded allowances for both mints; the settlement pulls
        // whatever the position actually needs, capped by the maxima below.
        self.phase = LaunchPhase::Running(LaunchStep::GrantAllowances);
        for mint in [identity.mint_0, identity.mint_1] {
            self.ledger
                .grant_allowance(&mint, u64::MAX, i64::MAX)
                .map_err(|e| self.abort(LaunchStep::GrantAllowances, e))?;
        }

        // Step F: derive the joint liquidity and the submission request.
        self.phase = LaunchPhase::Running(LaunchStep::DeriveLiquidity);
        let request = self
            .derive_request(&pair)
            .map_err(|e| self.abort(LaunchStep::DeriveLiquidity, e))?;
        info!(
            liquidity = request.liquidity,
            tick_lower = request.tick_lower,
            tick_upper = request.tick_upper,
            "liquidity derived"
        );

        // Step G: one atomic mint + settle submission.
        self.phase = LaunchPhase::Running(LaunchStep::SubmitLiquidity);
        let receipt = self
            .ledger
            .submit_liquidity(&identity, &request)
            .map_err(|e| self.abort(LaunchStep::SubmitLiquidity, e))?;
        info!(position_mint = %receipt.position_mint, "position minted");

        self.phase = LaunchPhase::Completed;
        Ok(LaunchReport::new(
            &asset_a, &asset_b, &pair, &identity, starting_tick, &request, &receipt,
        ))
    }

    fn derive_request(&self, pair: &CanonicalPair) -> Result<LiquidityRequest, LaunchError> {
        let (tick_lower, tick_upper) = match (self.params.tick_lower, self.params.tick_upper) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => full_range_ticks(self.params.tick_spacing),
        };
        if align_tick_to_spacing(tick_lower, self.params.tick_spacing) != tick_lower
            || align_tick_to_spacing(tick_upper, self.params.tick_spacing) != tick_upper
        {
            return Err(LaunchError::LiquidityDerivation(format!(
                "ticks [{}, {}] not aligned to spacing {}",
                tick_lower, tick_upper, self.params.tick_spacing
            )));
        }
        if tick_lower >= tick_upper {
            return Err(LaunchError::LiquidityDerivation(format!(
                "empty position range [{}, {}]",
                tick_lower, tick_upper
            )));
        }

        let sqrt_lower = sqrt_price_at_tick(tick_lower)?;
        let sqrt_upper = sqrt_price_at_tick(tick_upper)?;
        let liquidity = liquidity_for_amounts(
            self.params.starting_sqrt_price,
            sqrt_lower,
            sqrt_upper,
            pair.amount_0,
            pair.amount_1,
        )?;
        if liquidity == 0 {
            return Err(LaunchError::LiquidityDerivation(
                "deposits too small for any liquidity in this range".into(),
            ));
        }

        let deadline = self
            .ledger
            .unix_timestamp()?
            .checked_add(self.params.deadline_offset_secs)
            .ok_or(LaunchError::DeadlineExpired)?;

        Ok(LiquidityRequest {
            tick_lower,
            tick_upper,
            liquidity,
            amount_0_max: apply_slippage(pair.amount_0, self.params.slippage_bps),
            amount_1_max: apply_slippage(pair.amount_1, self.params.slippage_bps),
            recipient: self.params.recipient,
            deadline,
        })
    }
}
