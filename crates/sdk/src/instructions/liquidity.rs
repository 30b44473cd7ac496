//! The combined mint-position + settle-pair submission.

use crate::error::SdkResult;
use crate::instructions::{LiquidityAction, PoolInstruction};
use crate::pda::{find_allowance_address, find_pool_address, find_position_address};
use launch_types::{LiquidityRequest, PoolIdentity};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account::get_associated_token_address;

/// Build the single instruction carrying both Step G actions.
///
/// The pool program applies the whole action list or none of it, which is
/// what makes the mint and its settlement atomic: they ride in one
/// instruction, in one transaction.
#[allow(clippy::too_many_arguments)]
pub fn modify_liquidity(
    pool_program: &Pubkey,
    allowance_program: &Pubkey,
    payer: &Pubkey,
    position_manager: &Pubkey,
    position_mint: &Pubkey,
    identity: &PoolIdentity,
    request: &LiquidityRequest,
) -> SdkResult<Instruction> {
    let (pool, _) = find_pool_address(identity, pool_program);
    let (position, _) = find_position_address(position_mint, pool_program);
    let (allowance_0, _) = find_allowance_address(payer, &identity.mint_0, allowance_program);
    let (allowance_1, _) = find_allowance_address(payer, &identity.mint_1, allowance_program);

    let actions = vec![
        LiquidityAction::MintPosition {
            tick_lower: request.tick_lower,
            tick_upper: request.tick_upper,
            liquidity: request.liquidity,
            amount_0_max: request.amount_0_max,
            amount_1_max: request.amount_1_max,
            recipient: request.recipient.to_bytes(),
        },
        LiquidityAction::SettlePair {
            mint_0: identity.mint_0.to_bytes(),
            mint_1: identity.mint_1.to_bytes(),
        },
    ];
    let data = borsh::to_vec(&PoolInstruction::ModifyLiquidity {
        actions,
        deadline: request.deadline,
    })?;

    let accounts = vec![
        AccountMeta::new(pool, false),
        AccountMeta::new(position, false),
        AccountMeta::new(*position_mint, true),
        AccountMeta::new(
            get_associated_token_address(payer, &identity.mint_0),
            false,
        ),
        AccountMeta::new(
            get_associated_token_address(payer, &identity.mint_1),
            false,
        ),
        AccountMeta::new_readonly(allowance_0, false),
        AccountMeta::new_readonly(allowance_1, false),
        AccountMeta::new_readonly(*position_manager, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *pool_program,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshDeserialize;
    use launch_types::Q64;

    #[test]
    fn both_actions_ride_in_one_instruction() {
        let pool_program = Pubkey::new_unique();
        let allowance_program = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mint_0, mint_1) = if a < b { (a, b) } else { (b, a) };
        let identity = PoolIdentity {
            mint_0,
            mint_1,
            fee_bps: 30,
            tick_spacing: 60,
            hook: None,
        };
        let request = LiquidityRequest {
            tick_lower: -60,
            tick_upper: 60,
            liquidity: Q64,
            amount_0_max: 1_100,
            amount_1_max: 2_200,
            recipient: payer,
            deadline: 1_700_000_000,
        };

        let ix = modify_liquidity(
            &pool_program,
            &allowance_program,
            &payer,
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &identity,
            &request,
        )
        .unwrap();

        let decoded = PoolInstruction::try_from_slice(&ix.data).unwrap();
        match decoded {
            PoolInstruction::ModifyLiquidity { actions, deadline } => {
                assert_eq!(actions.len(), 2);
                assert_eq!(deadline, request.deadline);
                assert!(matches!(actions[0], LiquidityAction::MintPosition { .. }));
                assert!(matches!(actions[1], LiquidityAction::SettlePair { .. }));
            }
            other => panic!("unexpected instruction: {:?}", other),
        }
    }
}
