use anchor_lang::prelude::*;

use crate::constants::{
    AUTHORITIES_GROUP_SEED, DISCRIMINATOR_LENGTH, INCLUSION_SEED, METADATA_SEED,
};
use crate::errors::NftStandardError;

// ============================================================================
// Authorities Group
// ============================================================================

/// One of the three delegated roles held in an authorities group
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum AuthorityRole {
    /// Governs token transfers of the group's assets
    Transfer,
    /// Governs metadata creation and updates
    Update,
    /// Governs inclusion of children in the group's sets
    Inclusion,
}

/// Bundle of delegated authorities governing a set of assets.
/// PDA seeds: [b"authorities_group", id]
#[account]
#[derive(InitSpace)]
pub struct AuthoritiesGroup {
    /// Caller-chosen identifier the address is derived from
    pub id: Pubkey,

    pub transfer_authority: Pubkey,

    pub update_authority: Pubkey,

    pub inclusion_authority: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

// Account size: 8 (discriminator) + 32 * 4 + 1 = 137 bytes

impl AuthoritiesGroup {
    pub const SIZE: usize = DISCRIMINATOR_LENGTH + Self::INIT_SPACE;

    /// Derive the group address for a caller-chosen id
    pub fn find_address(id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[AUTHORITIES_GROUP_SEED, id.as_ref()], &crate::ID)
    }

    /// Principal currently holding `role`
    pub fn authority(&self, role: AuthorityRole) -> Pubkey {
        match role {
            AuthorityRole::Transfer => self.transfer_authority,
            AuthorityRole::Update => self.update_authority,
            AuthorityRole::Inclusion => self.inclusion_authority,
        }
    }

    /// Replace the principal holding `role`, returning the previous one
    pub fn set_authority(&mut self, role: AuthorityRole, authority: Pubkey) -> Pubkey {
        let slot = match role {
            AuthorityRole::Transfer => &mut self.transfer_authority,
            AuthorityRole::Update => &mut self.update_authority,
            AuthorityRole::Inclusion => &mut self.inclusion_authority,
        };
        std::mem::replace(slot, authority)
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Metadata variant selector, encoded as a single byte in instruction data
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MetadataType {
    /// Payload lives in a separate data account
    OnChain,
    /// Pointer to a metadata account that can be rewritten later
    Reference,
}

impl TryFrom<u8> for MetadataType {
    type Error = NftStandardError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::OnChain),
            1 => Ok(Self::Reference),
            _ => Err(NftStandardError::InvalidDataType),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum MetadataData {
    OnChain { data_account: Pubkey },
    Reference { metadata_account: Pubkey },
}

impl MetadataData {
    pub fn new(data_type: MetadataType, target: Pubkey) -> Self {
        match data_type {
            MetadataType::OnChain => Self::OnChain {
                data_account: target,
            },
            MetadataType::Reference => Self::Reference {
                metadata_account: target,
            },
        }
    }

    pub fn data_type(&self) -> MetadataType {
        match self {
            Self::OnChain { .. } => MetadataType::OnChain,
            Self::Reference { .. } => MetadataType::Reference,
        }
    }

    /// Account the metadata points at, regardless of variant
    pub fn target(&self) -> Pubkey {
        match self {
            Self::OnChain { data_account } => *data_account,
            Self::Reference { metadata_account } => *metadata_account,
        }
    }
}

/// Per-mint metadata record.
/// PDA seeds: [b"metadata", mint]
#[account]
#[derive(InitSpace)]
pub struct Metadata {
    /// Mint this metadata describes
    pub mint: Pubkey,

    /// Group whose update authority governs this record
    pub authorities_group: Pubkey,

    pub data: MetadataData,

    /// PDA bump seed
    pub bump: u8,
}

// Account size: 8 (discriminator) + 32 + 32 + (1 + 32) + 1 = 106 bytes

impl Metadata {
    pub const SIZE: usize = DISCRIMINATOR_LENGTH + Self::INIT_SPACE;

    pub fn find_address(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[METADATA_SEED, mint.as_ref()], &crate::ID)
    }
}

// ============================================================================
// Set Inclusion
// ============================================================================

/// Directed set-membership edge parent -> child.
/// The account existing is the membership; closing it excludes the child.
/// PDA seeds: [b"inclusion", parent_mint, child_mint]
#[account]
#[derive(InitSpace)]
pub struct Inclusion {
    /// Parent's authorities group at inclusion time
    pub authorities_group: Pubkey,

    pub parent_mint: Pubkey,

    pub child_mint: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

// Account size: 8 (discriminator) + 32 * 3 + 1 = 105 bytes

impl Inclusion {
    pub const SIZE: usize = DISCRIMINATOR_LENGTH + Self::INIT_SPACE;

    pub fn find_address(parent_mint: &Pubkey, child_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[INCLUSION_SEED, parent_mint.as_ref(), child_mint.as_ref()],
            &crate::ID,
        )
    }
}
