//! RPC-backed implementation of the [`Ledger`] capability.

use crate::config::SdkConfig;
use crate::error::SdkResult;
use crate::instructions;
use crate::ledger::Ledger;
use crate::pda::find_pool_address;
use launch_types::{
    AssetDescriptor, LaunchError, LaunchResult, LiquidityRequest, PoolIdentity, PositionReceipt,
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Client that performs the launch's ledger operations over RPC.
///
/// One transaction per [`Ledger`] operation; the ledger applies each
/// transaction atomically, so a rejected operation leaves no partial state.
pub struct LaunchClient {
    pub config: SdkConfig,
    rpc: RpcClient,
}

impl LaunchClient {
    pub fn new(config: SdkConfig) -> Self {
        let rpc = RpcClient::new_with_timeout_and_commitment(
            config.rpc_url.clone(),
            std::time::Duration::from_secs(config.timeout_secs),
            config.commitment,
        );
        Self { config, rpc }
    }

    /// Payer balance in lamports, for preflight checks.
    pub fn payer_balance(&self) -> SdkResult<u64> {
        Ok(self.rpc.get_balance(&self.config.payer.pubkey())?)
    }

    /// Rent-exempt balance needed for one mint account.
    pub fn mint_rent(&self) -> SdkResult<u64> {
        Ok(self
            .rpc
            .get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)?)
    }

    fn send(&self, instructions: &[Instruction], extra_signers: &[&Keypair]) -> SdkResult<Signature> {
        let payer = &self.config.payer;
        let blockhash = self.rpc.get_latest_blockhash()?;
        let mut signers: Vec<&Keypair> = vec![payer];
        signers.extend_from_slice(extra_signers);
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        Ok(self.rpc.send_and_confirm_transaction(&tx)?)
    }
}

impl Ledger for LaunchClient {
    fn issue_asset(&self, total_supply: u64, decimals: u8) -> LaunchResult<AssetDescriptor> {
        let mint = Keypair::new();
        let (issuer_amount, partner_amount) = AssetDescriptor::split_supply(total_supply);

        let issue = || -> SdkResult<Signature> {
            let rent = self.mint_rent()?;
            let ixs = instructions::issue_fixed_supply(
                &self.config.payer.pubkey(),
                &mint.pubkey(),
                &self.config.partner,
                decimals,
                issuer_amount,
                partner_amount,
                rent,
            )?;
            self.send(&ixs, &[&mint])
        };
        let signature = issue().map_err(|e| LaunchError::Issuance(e.to_string()))?;
        info!(mint = %mint.pubkey(), %signature, total_supply, "asset issued");

        AssetDescriptor::new(
            mint.pubkey(),
            decimals,
            total_supply,
            issuer_amount,
            partner_amount,
        )
    }

    fn initialize_pool(&self, identity: &PoolIdentity, sqrt_price_q64: u128) -> LaunchResult<i32> {
        if sqrt_price_q64 == 0 {
            return Err(LaunchError::InvalidPriceOrIdentity(
                "starting sqrt price must be non-zero".into(),
            ));
        }

        // The pool account is the identity: if it already exists, this exact
        // pool has been initialized before and the run must fail.
        let (pool, _) = find_pool_address(identity, &self.config.pool_program);
        if self.rpc.get_account(&pool).is_ok() {
            return Err(LaunchError::AlreadyInitialized);
        }

        let ix = instructions::initialize_pool(
            &self.config.pool_program,
            &self.config.payer.pubkey(),
            identity,
            sqrt_price_q64,
        )
        .map_err(LaunchError::from)?;
        let signature = self.send(&[ix], &[]).map_err(|e| {
            let message = e.to_string();
            if message.contains("already in use") {
                LaunchError::AlreadyInitialized
            } else {
                LaunchError::InvalidPriceOrIdentity(message)
            }
        })?;

        let starting_tick = launch_math::tick_at_sqrt_price(sqrt_price_q64)
            .map_err(|e| LaunchError::InvalidPriceOrIdentity(e.to_string()))?;
        info!(%pool, %signature, starting_tick, "pool initialized");
        Ok(starting_tick)
    }

    fn grant_allowance(&self, mint: &Pubkey, amount: u64, expiry: i64) -> LaunchResult<()> {
        let grant = || -> SdkResult<Signature> {
            let ixs = instructions::grant_allowance(
                &self.config.allowance_program,
                &self.config.payer.pubkey(),
                mint,
                &self.config.position_manager,
                amount,
                expiry,
            )?;
            self.send(&ixs, &[])
        };
        let signature = grant().map_err(|e| LaunchError::Allowance {
            mint: *mint,
            reason: e.to_string(),
        })?;
        info!(%mint, %signature, "allowance granted");
        Ok(())
    }

    fn submit_liquidity(
        &self,
        identity: &PoolIdentity,
        request: &LiquidityRequest,
    ) -> LaunchResult<PositionReceipt> {
        if request.deadline <= self.unix_timestamp()? {
            return Err(LaunchError::DeadlineExpired);
        }

        let position_mint = Keypair::new();
        let ix = instructions::modify_liquidity(
            &self.config.pool_program,
            &self.config.allowance_program,
            &self.config.payer.pubkey(),
            &self.config.position_manager,
            &position_mint.pubkey(),
            identity,
            request,
        )
        .map_err(LaunchError::from)?;

        let signature = self.send(&[ix], &[&position_mint]).map_err(|e| {
            let message = e.to_string();
            if message.contains("deadline") {
                LaunchError::DeadlineExpired
            } else if message.contains("maximum") || message.contains("slippage") {
                LaunchError::SlippageExceeded
            } else {
                LaunchError::AtomicSubmission(message)
            }
        })?;

        info!(position_mint = %position_mint.pubkey(), %signature, "liquidity submitted");
        Ok(PositionReceipt {
            signature,
            position_mint: position_mint.pubkey(),
        })
    }

    fn unix_timestamp(&self) -> LaunchResult<i64> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| LaunchError::Transport(e.to_string()))?;
        Ok(now.as_secs() as i64)
    }
}
