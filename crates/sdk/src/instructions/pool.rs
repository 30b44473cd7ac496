//! Pool initialization instruction.

use crate::error::SdkResult;
use crate::instructions::PoolInstruction;
use crate::pda::find_pool_address;
use launch_types::PoolIdentity;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Build the instruction that creates the pool for `identity` at the given
/// Q64.64 square-root starting price.
pub fn initialize_pool(
    pool_program: &Pubkey,
    payer: &Pubkey,
    identity: &PoolIdentity,
    sqrt_price_q64: u128,
) -> SdkResult<Instruction> {
    let (pool, _) = find_pool_address(identity, pool_program);

    let data = borsh::to_vec(&PoolInstruction::InitializePool {
        mint_0: identity.mint_0.to_bytes(),
        mint_1: identity.mint_1.to_bytes(),
        fee_bps: identity.fee_bps,
        tick_spacing: identity.tick_spacing,
        hook: identity.hook.map(|h| h.to_bytes()),
        sqrt_price_q64,
    })?;

    let mut accounts = vec![
        AccountMeta::new(pool, false),
        AccountMeta::new_readonly(identity.mint_0, false),
        AccountMeta::new_readonly(identity.mint_1, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    if let Some(hook) = identity.hook {
        accounts.push(AccountMeta::new_readonly(hook, false));
    }

    Ok(Instruction {
        program_id: *pool_program,
        accounts,
        data,
    })
}
