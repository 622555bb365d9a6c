//! Serialization helpers for Anchor structs
//!
//! Anchor structs use 8-byte discriminator prefix

#![allow(dead_code)]

use solana_sdk::pubkey::Pubkey;

/// AuthoritiesGroup size: discriminator(8) + id(32) + 3 authorities(96) + bump(1)
pub const AUTHORITIES_GROUP_SIZE: usize = 8 + 32 + 32 * 3 + 1; // 137 bytes

/// Metadata size: discriminator(8) + mint(32) + group(32) + data(1 + 32) + bump(1)
pub const METADATA_SIZE: usize = 8 + 32 + 32 + 1 + 32 + 1; // 106 bytes

/// Inclusion size: discriminator(8) + group(32) + parent(32) + child(32) + bump(1)
pub const INCLUSION_SIZE: usize = 8 + 32 * 3 + 1; // 105 bytes

/// sha256("account:AuthoritiesGroup")[0..8]
pub const AUTHORITIES_GROUP_DISCRIMINATOR: [u8; 8] =
    [0xda, 0x63, 0x01, 0xaf, 0x6e, 0x8c, 0xbe, 0xb7];

/// sha256("account:Metadata")[0..8]
pub const METADATA_DISCRIMINATOR: [u8; 8] = [0x48, 0x0b, 0x79, 0x1a, 0x6f, 0xb5, 0x55, 0x5d];

/// sha256("account:Inclusion")[0..8]
pub const INCLUSION_DISCRIMINATOR: [u8; 8] = [0x63, 0x1c, 0x1f, 0x90, 0x75, 0x2e, 0xc7, 0x27];

/// MetadataData variant tags (Borsh enum index)
pub const METADATA_ONCHAIN: u8 = 0;
pub const METADATA_REFERENCE: u8 = 1;

/// Decoded AuthoritiesGroup fields
#[derive(Debug, PartialEq, Eq)]
pub struct GroupFields {
    pub id: Pubkey,
    pub transfer_authority: Pubkey,
    pub update_authority: Pubkey,
    pub inclusion_authority: Pubkey,
    pub bump: u8,
}

/// Serialize AuthoritiesGroup
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: id
/// - 32 bytes: transfer_authority
/// - 32 bytes: update_authority
/// - 32 bytes: inclusion_authority
/// - 1 byte: bump
pub fn serialize_authorities_group(group: &GroupFields) -> Vec<u8> {
    let mut data = vec![0u8; AUTHORITIES_GROUP_SIZE];

    data[0..8].copy_from_slice(&AUTHORITIES_GROUP_DISCRIMINATOR);
    data[8..40].copy_from_slice(&group.id.to_bytes());
    data[40..72].copy_from_slice(&group.transfer_authority.to_bytes());
    data[72..104].copy_from_slice(&group.update_authority.to_bytes());
    data[104..136].copy_from_slice(&group.inclusion_authority.to_bytes());
    data[136] = group.bump;

    data
}

pub fn deserialize_authorities_group(data: &[u8]) -> GroupFields {
    assert_eq!(&data[0..8], &AUTHORITIES_GROUP_DISCRIMINATOR, "Not an AuthoritiesGroup");

    let key = |from: usize| Pubkey::new_from_array(data[from..from + 32].try_into().unwrap());
    GroupFields {
        id: key(8),
        transfer_authority: key(40),
        update_authority: key(72),
        inclusion_authority: key(104),
        bump: data[136],
    }
}

/// Serialize Metadata
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: mint
/// - 32 bytes: authorities_group
/// - 1 byte: data variant (0 = OnChain, 1 = Reference)
/// - 32 bytes: data account / metadata account
/// - 1 byte: bump
pub fn serialize_metadata(
    mint: Pubkey,
    authorities_group: Pubkey,
    variant: u8,
    target: Pubkey,
    bump: u8,
) -> Vec<u8> {
    let mut data = vec![0u8; METADATA_SIZE];

    data[0..8].copy_from_slice(&METADATA_DISCRIMINATOR);
    data[8..40].copy_from_slice(&mint.to_bytes());
    data[40..72].copy_from_slice(&authorities_group.to_bytes());
    data[72] = variant;
    data[73..105].copy_from_slice(&target.to_bytes());
    data[105] = bump;

    data
}

/// Returns (mint, authorities_group, variant, target, bump)
pub fn deserialize_metadata(data: &[u8]) -> (Pubkey, Pubkey, u8, Pubkey, u8) {
    assert_eq!(&data[0..8], &METADATA_DISCRIMINATOR, "Not a Metadata");

    let key = |from: usize| Pubkey::new_from_array(data[from..from + 32].try_into().unwrap());
    (key(8), key(40), data[72], key(73), data[105])
}

/// Serialize Inclusion
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: authorities_group
/// - 32 bytes: parent_mint
/// - 32 bytes: child_mint
/// - 1 byte: bump
pub fn serialize_inclusion(
    authorities_group: Pubkey,
    parent_mint: Pubkey,
    child_mint: Pubkey,
    bump: u8,
) -> Vec<u8> {
    let mut data = vec![0u8; INCLUSION_SIZE];

    data[0..8].copy_from_slice(&INCLUSION_DISCRIMINATOR);
    data[8..40].copy_from_slice(&authorities_group.to_bytes());
    data[40..72].copy_from_slice(&parent_mint.to_bytes());
    data[72..104].copy_from_slice(&child_mint.to_bytes());
    data[104] = bump;

    data
}

/// Returns (authorities_group, parent_mint, child_mint, bump)
pub fn deserialize_inclusion(data: &[u8]) -> (Pubkey, Pubkey, Pubkey, u8) {
    assert_eq!(&data[0..8], &INCLUSION_DISCRIMINATOR, "Not an Inclusion");

    let key = |from: usize| Pubkey::new_from_array(data[from..from + 32].try_into().unwrap());
    (key(8), key(40), key(72), data[104])
}
