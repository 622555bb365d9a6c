use anchor_lang::prelude::*;

use crate::state::{AuthorityRole, MetadataType};

// ============================================================================
// Authorities Group Events
// ============================================================================

#[event]
pub struct AuthoritiesGroupCreated {
    pub authorities_group: Pubkey,
    pub id: Pubkey,
    pub transfer_authority: Pubkey,
    pub update_authority: Pubkey,
    pub inclusion_authority: Pubkey,
}

#[event]
pub struct GroupAuthorityUpdated {
    pub authorities_group: Pubkey,
    pub role: AuthorityRole,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}

// ============================================================================
// Mint Events
// ============================================================================

#[event]
pub struct NftMinted {
    pub mint: Pubkey,
    pub authorities_group: Pubkey,
    /// Metadata PDA recorded in the mint's MetadataPointer
    pub metadata: Pubkey,
    pub creator: Pubkey,
}

// ============================================================================
// Metadata Events
// ============================================================================

#[event]
pub struct MetadataCreated {
    pub metadata: Pubkey,
    pub mint: Pubkey,
    pub authorities_group: Pubkey,
    pub data_type: MetadataType,
    /// Data account for OnChain, metadata account for Reference
    pub target: Pubkey,
}

#[event]
pub struct ReferenceMetadataUpdated {
    pub metadata: Pubkey,
    pub old_metadata_account: Pubkey,
    pub new_metadata_account: Pubkey,
}

// ============================================================================
// Set Events
// ============================================================================

#[event]
pub struct IncludedInSet {
    pub authorities_group: Pubkey,
    pub parent_mint: Pubkey,
    pub child_mint: Pubkey,
    pub inclusion: Pubkey,
}

#[event]
pub struct ExcludedFromSet {
    pub authorities_group: Pubkey,
    pub parent_mint: Pubkey,
    pub child_mint: Pubkey,
    pub inclusion: Pubkey,
}
