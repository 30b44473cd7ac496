//! Delegated-allowance grant: a token-level approval plus the registry
//! record the position manager checks at settlement.

use crate::error::SdkResult;
use crate::instructions::AllowanceInstruction;
use crate::pda::find_allowance_address;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account::get_associated_token_address;

/// Build the instructions granting the position manager a delegated
/// allowance of `amount` over `mint` until `expiry`.
pub fn grant_allowance(
    allowance_program: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    position_manager: &Pubkey,
    amount: u64,
    expiry: i64,
) -> SdkResult<Vec<Instruction>> {
    let owner_account = get_associated_token_address(owner, mint);
    let (allowance, _) = find_allowance_address(owner, mint, allowance_program);

    let approve = spl_token::instruction::approve(
        &spl_token::id(),
        &owner_account,
        position_manager,
        owner,
        &[],
        amount,
    )?;

    let data = borsh::to_vec(&AllowanceInstruction::Approve { amount, expiry })?;
    let record = Instruction {
        program_id: *allowance_program,
        accounts: vec![
            AccountMeta::new(allowance, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*position_manager, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    };

    Ok(vec![approve, record])
}
