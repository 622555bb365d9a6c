use anchor_lang::prelude::*;

use crate::authority::{require_authority, Operation};
use crate::constants::AUTHORITIES_GROUP_SEED;
use crate::errors::NftStandardError;
use crate::events::ReferenceMetadataUpdated;
use crate::state::{AuthoritiesGroup, Metadata, MetadataData};
use crate::utils::{load_account, require_data_account, write_account};

/// Accounts for update_reference_metadata.
///
/// remaining_accounts[0] must be the account named by `metadata_account`.
#[derive(Accounts)]
pub struct UpdateReferenceMetadata<'info> {
    /// Must be the group's update authority
    /// CHECK: Verified by the authorization checker
    #[account(mut)]
    pub metadata_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,

    /// CHECK: Loaded in handler; must be an existing Metadata owned by this program
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<UpdateReferenceMetadata>, metadata_account: Pubkey) -> Result<()> {
    let group = &ctx.accounts.authorities_group;

    require_authority(
        group,
        Operation::UpdateReferenceMetadata,
        &ctx.accounts.metadata_authority,
    )?;

    let mut metadata: Metadata = load_account(
        &ctx.accounts.metadata,
        NftStandardError::AccountNotInitialized,
    )?;
    require_keys_eq!(
        metadata.authorities_group,
        group.key(),
        NftStandardError::GroupMismatch
    );

    // Only the pointer is rewritten; OnChain payloads are not touched here
    let MetadataData::Reference {
        metadata_account: old_metadata_account,
    } = metadata.data
    else {
        return err!(NftStandardError::NotReferenceMetadata);
    };

    require_data_account(ctx.remaining_accounts, &metadata_account)?;

    metadata.data = MetadataData::Reference { metadata_account };
    write_account(&ctx.accounts.metadata, &metadata)?;

    emit!(ReferenceMetadataUpdated {
        metadata: ctx.accounts.metadata.key(),
        old_metadata_account,
        new_metadata_account: metadata_account,
    });

    Ok(())
}
