/// Seed prefix for AuthoritiesGroup PDAs: [AUTHORITIES_GROUP_SEED, id]
pub const AUTHORITIES_GROUP_SEED: &[u8] = b"authorities_group";

/// Seed prefix for Metadata PDAs: [METADATA_SEED, mint]
pub const METADATA_SEED: &[u8] = b"metadata";

/// Seed prefix for Inclusion PDAs: [INCLUSION_SEED, parent_mint, child_mint]
pub const INCLUSION_SEED: &[u8] = b"inclusion";

/// Anchor account discriminator length
pub const DISCRIMINATOR_LENGTH: usize = 8;
