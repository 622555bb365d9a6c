use anchor_lang::prelude::*;

use crate::authority::{require_authority, Operation};
use crate::constants::AUTHORITIES_GROUP_SEED;
use crate::errors::NftStandardError;
use crate::events::GroupAuthorityUpdated;
use crate::state::{AuthoritiesGroup, AuthorityRole};

#[derive(Accounts)]
pub struct UpdateGroupAuthority<'info> {
    /// Current holder of the role being rotated
    /// CHECK: Verified by the authorization checker
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,
}

pub fn handler(
    ctx: Context<UpdateGroupAuthority>,
    role: AuthorityRole,
    new_authority: Option<Pubkey>,
) -> Result<()> {
    let group = &mut ctx.accounts.authorities_group;

    require!(
        group.authority(role) != Pubkey::default(),
        NftStandardError::ImmutableAuthority
    );
    require_authority(
        group,
        Operation::UpdateGroupAuthority(role),
        &ctx.accounts.authority,
    )?;

    // None = renounce (default pubkey can never sign)
    let old_authority = group.set_authority(role, new_authority.unwrap_or_default());

    emit!(GroupAuthorityUpdated {
        authorities_group: group.key(),
        role,
        old_authority,
        new_authority: group.authority(role),
    });

    Ok(())
}
