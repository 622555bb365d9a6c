use anchor_lang::prelude::*;

use crate::constants::AUTHORITIES_GROUP_SEED;
use crate::errors::NftStandardError;
use crate::events::AuthoritiesGroupCreated;
use crate::state::AuthoritiesGroup;
use crate::utils::{create_pda_account, write_account};

#[derive(Accounts)]
#[instruction(id: Pubkey)]
pub struct CreateAuthoritiesGroup<'info> {
    /// Pays for the group account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Group PDA, allocated by the handler
    /// CHECK: Seeds verified; must still be unallocated
    #[account(
        mut,
        seeds = [AUTHORITIES_GROUP_SEED, id.as_ref()],
        bump
    )]
    pub authorities_group: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateAuthoritiesGroup>,
    id: Pubkey,
    transfer_authority: Pubkey,
    update_authority: Pubkey,
    inclusion_authority: Pubkey,
) -> Result<()> {
    let bump = ctx.bumps.authorities_group;
    let group_info = ctx.accounts.authorities_group.to_account_info();

    create_pda_account(
        &ctx.accounts.payer.to_account_info(),
        &group_info,
        &ctx.accounts.system_program.to_account_info(),
        AuthoritiesGroup::SIZE,
        &[AUTHORITIES_GROUP_SEED, id.as_ref(), &[bump]],
        NftStandardError::DuplicateGroup,
    )?;

    write_account(
        &group_info,
        &AuthoritiesGroup {
            id,
            transfer_authority,
            update_authority,
            inclusion_authority,
            bump,
        },
    )?;

    emit!(AuthoritiesGroupCreated {
        authorities_group: group_info.key(),
        id,
        transfer_authority,
        update_authority,
        inclusion_authority,
    });

    Ok(())
}
