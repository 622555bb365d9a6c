use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::associated_token::{self, AssociatedToken, Create};
use anchor_spl::token_2022::spl_token_2022::{
    extension::ExtensionType, instruction::AuthorityType, state::Mint as Token2022Mint,
};
use anchor_spl::token_2022::{
    initialize_mint2, mint_to, set_authority, InitializeMint2, MintTo, SetAuthority, Token2022,
};
use anchor_spl::token_2022_extensions::{metadata_pointer_initialize, MetadataPointerInitialize};

use crate::constants::{AUTHORITIES_GROUP_SEED, METADATA_SEED};
use crate::errors::NftStandardError;
use crate::events::NftMinted;
use crate::state::AuthoritiesGroup;

#[derive(Accounts)]
pub struct MintNft<'info> {
    /// Pays for the mint and token account, receives the single token
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Group the new mint is bound to
    #[account(
        seeds = [AUTHORITIES_GROUP_SEED, authorities_group.id.as_ref()],
        bump = authorities_group.bump
    )]
    pub authorities_group: Account<'info, AuthoritiesGroup>,

    /// New mint (fresh keypair)
    #[account(mut)]
    pub mint: Signer<'info>,

    /// Metadata PDA the mint's pointer targets; created later by create_onchain_metadata
    /// CHECK: Seeds verified; not written here
    #[account(seeds = [METADATA_SEED, mint.key().as_ref()], bump)]
    pub metadata: UncheckedAccount<'info>,

    /// Creator's associated token account
    /// CHECK: Address derived and initialized by the associated token program
    #[account(mut)]
    pub creator_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintNft>) -> Result<()> {
    require!(
        ctx.accounts.mint.lamports() == 0 && ctx.accounts.mint.data_is_empty(),
        NftStandardError::AccountAlreadyInitialized
    );

    let group = ctx.accounts.authorities_group.key();
    let metadata = ctx.accounts.metadata.key();
    let creator = ctx.accounts.creator.to_account_info();
    let mint = ctx.accounts.mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    // 1. Allocate the mint with room for the MetadataPointer extension
    let space =
        ExtensionType::try_calculate_account_len::<Token2022Mint>(&[ExtensionType::MetadataPointer])
            .map_err(|_| ProgramError::InvalidAccountData)?;

    create_account(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: creator.clone(),
                to: mint.clone(),
            },
        ),
        Rent::get()?.minimum_balance(space),
        space as u64,
        token_program.key,
    )?;

    // 2. Bind the mint: pointer authority = group, pointer target = Metadata PDA
    metadata_pointer_initialize(
        CpiContext::new(
            token_program.clone(),
            MetadataPointerInitialize {
                token_program_id: token_program.clone(),
                mint: mint.clone(),
            },
        ),
        Some(group),
        Some(metadata),
    )?;

    // 3. Initialize the mint (creator as temporary mint authority, no freeze authority)
    initialize_mint2(
        CpiContext::new(token_program.clone(), InitializeMint2 { mint: mint.clone() }),
        0,
        creator.key,
        None,
    )?;

    // 4. Creator's ATA, then exactly one token
    associated_token::create(CpiContext::new(
        ctx.accounts.associated_token_program.to_account_info(),
        Create {
            payer: creator.clone(),
            associated_token: ctx.accounts.creator_token_account.to_account_info(),
            authority: creator.clone(),
            mint: mint.clone(),
            system_program: ctx.accounts.system_program.to_account_info(),
            token_program: token_program.clone(),
        },
    ))?;

    mint_to(
        CpiContext::new(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: ctx.accounts.creator_token_account.to_account_info(),
                authority: creator.clone(),
            },
        ),
        1,
    )?;

    // 5. Renounce mint authority (supply = 1 forever)
    set_authority(
        CpiContext::new(
            token_program,
            SetAuthority {
                current_authority: creator,
                account_or_mint: mint,
            },
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    emit!(NftMinted {
        mint: ctx.accounts.mint.key(),
        authorities_group: group,
        metadata,
        creator: ctx.accounts.creator.key(),
    });

    Ok(())
}
