//! Program-derived addresses for the pool and allowance programs.

use launch_types::PoolIdentity;
use solana_sdk::pubkey::Pubkey;

/// Derive the pool account address for a pool identity.
///
/// The seeds cover every identity field, so two identities differing in any
/// component resolve to different pools.
pub fn find_pool_address(identity: &PoolIdentity, pool_program: &Pubkey) -> (Pubkey, u8) {
    let hook = identity.hook.unwrap_or_default();
    Pubkey::find_program_address(
        &[
            b"pool",
            identity.mint_0.as_ref(),
            identity.mint_1.as_ref(),
            &identity.fee_bps.to_le_bytes(),
            &identity.tick_spacing.to_le_bytes(),
            hook.as_ref(),
        ],
        pool_program,
    )
}

/// Derive the allowance record address for an (owner, mint) delegation.
pub fn find_allowance_address(
    owner: &Pubkey,
    mint: &Pubkey,
    allowance_program: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"allowance", owner.as_ref(), mint.as_ref()],
        allowance_program,
    )
}

/// Derive the position account address from the position mint.
pub fn find_position_address(position_mint: &Pubkey, pool_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"position", position_mint.as_ref()], pool_program)
}
