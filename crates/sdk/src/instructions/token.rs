//! Token-issuance collaborator: create a mint and pay out the supply split.

use crate::error::SdkResult;
use solana_sdk::{
    instruction::Instruction, program_pack::Pack, pubkey::Pubkey, system_instruction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};

/// Instructions that create a fixed-supply mint and distribute the whole
/// supply between the issuer and the partner in one transaction.
///
/// The mint authority stays with the issuer only for the duration of this
/// transaction; no further minting happens after the payout.
#[allow(clippy::too_many_arguments)]
pub fn issue_fixed_supply(
    payer: &Pubkey,
    mint: &Pubkey,
    partner: &Pubkey,
    decimals: u8,
    issuer_amount: u64,
    partner_amount: u64,
    mint_rent: u64,
) -> SdkResult<Vec<Instruction>> {
    let issuer_account = get_associated_token_address(payer, mint);
    let partner_account = get_associated_token_address(partner, mint);

    let mut instructions = vec![
        system_instruction::create_account(
            payer,
            mint,
            mint_rent,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint2(&spl_token::id(), mint, payer, None, decimals)?,
        create_associated_token_account(payer, payer, mint, &spl_token::id()),
        create_associated_token_account(payer, partner, mint, &spl_token::id()),
    ];
    instructions.push(spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        &issuer_account,
        payer,
        &[],
        issuer_amount,
    )?);
    instructions.push(spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        &partner_account,
        payer,
        &[],
        partner_amount,
    )?);
    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_types::AssetDescriptor;

    #[test]
    fn issuance_builds_the_full_payout_sequence() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let partner = Pubkey::new_unique();
        let (issuer_amount, partner_amount) = AssetDescriptor::split_supply(101);

        let ixs =
            issue_fixed_supply(&payer, &mint, &partner, 6, issuer_amount, partner_amount, 1_000)
                .unwrap();

        // create mint, init mint, two payout accounts, two payouts
        assert_eq!(ixs.len(), 6);
        assert_eq!(ixs[0].program_id, solana_sdk::system_program::id());
        assert_eq!(ixs[1].program_id, spl_token::id());
    }
}
