use anchor_lang::prelude::*;

use crate::authority::{require_authority, Operation};
use crate::constants::{AUTHORITIES_GROUP_SEED, INCLUSION_SEED};
use crate::errors::NftStandardError;
use crate::events::IncludedInSet;
use crate::state::{AuthoritiesGroup, Inclusion};
use crate::utils::{
    create_pda_account, mint_authorities_group, require_token_2022_mint, write_account,
};

#[derive(Accounts)]
pub struct IncludeInSet<'info> {
    /// Parent group's inclusion authority; pays for the inclusion account
    /// CHECK: Verified by the authorization checker
    #[account(mut)]
    pub inclusion_authority: UncheckedAccount<'info>,

    /// Parent's authorities group
    #[account(
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,

    /// CHECK: Group binding validated through its MetadataPointer
    pub parent_mint: UncheckedAccount<'info>,

    /// CHECK: Validated as a Token-2022 mint
    pub child_mint: UncheckedAccount<'info>,

    /// Inclusion PDA, allocated by the handler
    /// CHECK: Seeds verified; must still be unallocated
    #[account(
        mut,
        seeds = [INCLUSION_SEED, parent_mint.key().as_ref(), child_mint.key().as_ref()],
        bump
    )]
    pub inclusion: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<IncludeInSet>) -> Result<()> {
    let group = &ctx.accounts.authorities_group;
    let parent_mint = ctx.accounts.parent_mint.key();
    let child_mint = ctx.accounts.child_mint.key();

    require_authority(
        group,
        Operation::IncludeInSet,
        &ctx.accounts.inclusion_authority,
    )?;

    require_keys_neq!(parent_mint, child_mint, NftStandardError::CannotIncludeSelf);
    require_keys_eq!(
        mint_authorities_group(&ctx.accounts.parent_mint)?,
        group.key(),
        NftStandardError::GroupMismatch
    );
    require_token_2022_mint(&ctx.accounts.child_mint)?;

    let bump = ctx.bumps.inclusion;
    let inclusion_info = ctx.accounts.inclusion.to_account_info();

    create_pda_account(
        &ctx.accounts.inclusion_authority.to_account_info(),
        &inclusion_info,
        &ctx.accounts.system_program.to_account_info(),
        Inclusion::SIZE,
        &[
            INCLUSION_SEED,
            parent_mint.as_ref(),
            child_mint.as_ref(),
            &[bump],
        ],
        NftStandardError::DuplicateEdge,
    )?;

    write_account(
        &inclusion_info,
        &Inclusion {
            authorities_group: group.key(),
            parent_mint,
            child_mint,
            bump,
        },
    )?;

    emit!(IncludedInSet {
        authorities_group: group.key(),
        parent_mint,
        child_mint,
        inclusion: inclusion_info.key(),
    });

    Ok(())
}
