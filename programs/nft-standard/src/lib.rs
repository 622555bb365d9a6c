use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::AuthorityRole;

declare_id!("nftR4ZKbkETQuviq89kz4d5B3Gm9VM5LkLMoHNBuXzy");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "NFT Standard",
    project_url: "https://github.com/nft-standard/nft-standard",
    contacts: "email:security@nft-standard.dev",
    policy: "https://github.com/nft-standard/nft-standard/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/nft-standard/nft-standard"
}

#[program]
pub mod nft_standard {
    use super::*;

    // =========================================================================
    // Authorities Group Instructions
    // =========================================================================

    /// Create an authorities group at the PDA derived from `id`.
    /// The three roles may be held by one principal or delegated separately.
    pub fn create_authorities_group(
        ctx: Context<CreateAuthoritiesGroup>,
        id: Pubkey,
        transfer_authority: Pubkey,
        update_authority: Pubkey,
        inclusion_authority: Pubkey,
    ) -> Result<()> {
        instructions::group::create_authorities_group::handler(
            ctx,
            id,
            transfer_authority,
            update_authority,
            inclusion_authority,
        )
    }

    /// Rotate or renounce one role of a group. Signed by that role's current holder.
    /// Pass None to renounce (role becomes immutable).
    pub fn update_group_authority(
        ctx: Context<UpdateGroupAuthority>,
        role: AuthorityRole,
        new_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::group::update_group_authority::handler(ctx, role, new_authority)
    }

    // =========================================================================
    // Mint Instructions
    // =========================================================================

    /// Mint a one-of-one Token-2022 NFT to the creator, bound to the group through
    /// its MetadataPointer (authority = group, target = Metadata PDA).
    pub fn mint_nft(ctx: Context<MintNft>) -> Result<()> {
        instructions::mint::mint_nft::handler(ctx)
    }

    // =========================================================================
    // Metadata Instructions
    // =========================================================================

    /// Create the metadata record of a mint bound to the group.
    /// `data_type` 0 = OnChain (data account), 1 = Reference (rewritable pointer).
    pub fn create_onchain_metadata(
        ctx: Context<CreateOnchainMetadata>,
        data_type: u8,
        data_account: Pubkey,
    ) -> Result<()> {
        instructions::metadata::create_onchain_metadata::handler(ctx, data_type, data_account)
    }

    /// Point a Reference metadata at a new metadata account. Update authority only.
    pub fn update_reference_metadata(
        ctx: Context<UpdateReferenceMetadata>,
        metadata_account: Pubkey,
    ) -> Result<()> {
        instructions::metadata::update_reference_metadata::handler(ctx, metadata_account)
    }

    // =========================================================================
    // Set Instructions
    // =========================================================================

    /// Include a child mint in the parent mint's set. Inclusion authority only.
    pub fn include_in_set(ctx: Context<IncludeInSet>) -> Result<()> {
        instructions::set::include_in_set::handler(ctx)
    }

    /// Remove a child from the parent's set, closing the inclusion account.
    pub fn exclude_from_set(ctx: Context<ExcludeFromSet>) -> Result<()> {
        instructions::set::exclude_from_set::handler(ctx)
    }
}
