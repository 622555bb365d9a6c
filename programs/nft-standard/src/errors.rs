use anchor_lang::prelude::*;

#[error_code]
pub enum NftStandardError {
    // ========================================================================
    // Authorization
    // ========================================================================
    #[msg("Signer does not hold the authority role required for this operation")]
    Unauthorized,

    // ========================================================================
    // Uniqueness / existence
    // ========================================================================
    #[msg("An authorities group already exists for this id")]
    DuplicateGroup,

    #[msg("Child is already included in the parent's set")]
    DuplicateEdge,

    #[msg("Account is not initialized")]
    AccountNotInitialized,

    #[msg("Child is not included in the parent's set")]
    EdgeNotFound,

    #[msg("Account is already initialized")]
    AccountAlreadyInitialized,

    // ========================================================================
    // Cross-references
    // ========================================================================
    #[msg("Authorities group does not match the one recorded for the mint")]
    GroupMismatch,

    #[msg("Invalid mint - must be an initialized Token-2022 mint")]
    InvalidMint,

    #[msg("Mint metadata pointer does not reference the metadata account")]
    MetadataPointerMismatch,

    // ========================================================================
    // Metadata
    // ========================================================================
    #[msg("Unknown metadata data type (must be 0 or 1)")]
    InvalidDataType,

    #[msg("Metadata is not a reference metadata")]
    NotReferenceMetadata,

    #[msg("Data account does not exist or does not match the argument")]
    InvalidDataAccount,

    // ========================================================================
    // Sets / authorities
    // ========================================================================
    #[msg("A mint cannot be included in its own set")]
    CannotIncludeSelf,

    #[msg("Authority role is immutable (renounced)")]
    ImmutableAuthority,

    #[msg("Arithmetic overflow")]
    Overflow,
}
