use anchor_lang::prelude::*;
use anchor_spl::token_2022::Token2022;

use crate::authority::{require_authority, Operation};
use crate::constants::{AUTHORITIES_GROUP_SEED, METADATA_SEED};
use crate::errors::NftStandardError;
use crate::events::MetadataCreated;
use crate::state::{AuthoritiesGroup, Metadata, MetadataData, MetadataType};
use crate::utils::{create_pda_account, metadata_pointer, require_data_account, write_account};

/// Accounts for create_onchain_metadata.
///
/// remaining_accounts[0] must be the account named by `data_account`.
#[derive(Accounts)]
pub struct CreateOnchainMetadata<'info> {
    /// Pays for the metadata account; must be the group's update authority
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,

    /// Token-2022 mint bound to the group through its MetadataPointer
    /// CHECK: Extension data validated in handler
    pub mint: UncheckedAccount<'info>,

    /// Metadata PDA, allocated by the handler
    /// CHECK: Seeds verified; must still be unallocated
    #[account(
        mut,
        seeds = [METADATA_SEED, mint.key().as_ref()],
        bump
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateOnchainMetadata>,
    data_type: u8,
    data_account: Pubkey,
) -> Result<()> {
    let data_type = MetadataType::try_from(data_type)?;
    let group = &ctx.accounts.authorities_group;

    require_authority(group, Operation::CreateOnchainMetadata, &ctx.accounts.payer)?;

    // The mint records its group and metadata address at mint time
    let pointer = metadata_pointer(&ctx.accounts.mint)?;
    require!(
        Option::<Pubkey>::from(pointer.authority) == Some(group.key()),
        NftStandardError::GroupMismatch
    );
    require!(
        Option::<Pubkey>::from(pointer.metadata_address) == Some(ctx.accounts.metadata.key()),
        NftStandardError::MetadataPointerMismatch
    );

    require_data_account(ctx.remaining_accounts, &data_account)?;

    let mint = ctx.accounts.mint.key();
    let bump = ctx.bumps.metadata;
    let metadata_info = ctx.accounts.metadata.to_account_info();

    create_pda_account(
        &ctx.accounts.payer.to_account_info(),
        &metadata_info,
        &ctx.accounts.system_program.to_account_info(),
        Metadata::SIZE,
        &[METADATA_SEED, mint.as_ref(), &[bump]],
        NftStandardError::AccountAlreadyInitialized,
    )?;

    write_account(
        &metadata_info,
        &Metadata {
            mint,
            authorities_group: group.key(),
            data: MetadataData::new(data_type, data_account),
            bump,
        },
    )?;

    emit!(MetadataCreated {
        metadata: metadata_info.key(),
        mint,
        authorities_group: group.key(),
        data_type,
        target: data_account,
    });

    Ok(())
}
