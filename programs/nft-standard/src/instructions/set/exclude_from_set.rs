use anchor_lang::prelude::*;

use crate::authority::{require_authority, Operation};
use crate::constants::{AUTHORITIES_GROUP_SEED, INCLUSION_SEED};
use crate::errors::NftStandardError;
use crate::events::ExcludedFromSet;
use crate::state::{AuthoritiesGroup, Inclusion};
use crate::utils::{close_account, load_account};

#[derive(Accounts)]
pub struct ExcludeFromSet<'info> {
    /// Parent group's inclusion authority; receives the rent refund
    /// CHECK: Verified by the authorization checker
    #[account(mut)]
    pub inclusion_authority: UncheckedAccount<'info>,

    /// Parent's authorities group
    #[account(
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,

    /// CHECK: Only used as a seed; may already be closed
    pub parent_mint: UncheckedAccount<'info>,

    /// CHECK: Only used as a seed; may already be closed
    pub child_mint: UncheckedAccount<'info>,

    /// CHECK: Seeds verified; loaded in handler so absence maps to EdgeNotFound
    #[account(
        mut,
        seeds = [INCLUSION_SEED, parent_mint.key().as_ref(), child_mint.key().as_ref()],
        bump
    )]
    pub inclusion: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ExcludeFromSet>) -> Result<()> {
    let group = &ctx.accounts.authorities_group;

    require_authority(
        group,
        Operation::ExcludeFromSet,
        &ctx.accounts.inclusion_authority,
    )?;

    let inclusion: Inclusion =
        load_account(&ctx.accounts.inclusion, NftStandardError::EdgeNotFound)?;

    // The edge records the parent's group at inclusion time
    require_keys_eq!(
        inclusion.authorities_group,
        group.key(),
        NftStandardError::GroupMismatch
    );

    close_account(
        &ctx.accounts.inclusion.to_account_info(),
        &ctx.accounts.inclusion_authority.to_account_info(),
    )?;

    emit!(ExcludedFromSet {
        authorities_group: group.key(),
        parent_mint: inclusion.parent_mint,
        child_mint: inclusion.child_mint,
        inclusion: ctx.accounts.inclusion.key(),
    });

    Ok(())
}
