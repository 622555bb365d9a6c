//! Role-scoped authorization for mutating instructions.
//!
//! Every instruction that mutates group-governed state names an [`Operation`],
//! which maps to exactly one [`AuthorityRole`]. Handlers call
//! [`require_authority`] before writing anything, so a failed check reverts the
//! whole instruction with `Unauthorized` and no partial effect.
//!
//! Checks are scoped to the role, not the group: holding the update authority
//! of a group grants nothing over its sets.

use anchor_lang::prelude::*;

use crate::errors::NftStandardError;
use crate::state::{AuthoritiesGroup, AuthorityRole};

/// Group-governed operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    CreateOnchainMetadata,
    UpdateReferenceMetadata,
    IncludeInSet,
    ExcludeFromSet,
    /// Rotating a role is gated by that same role
    UpdateGroupAuthority(AuthorityRole),
}

impl Operation {
    pub const fn required_role(self) -> AuthorityRole {
        match self {
            Operation::CreateOnchainMetadata | Operation::UpdateReferenceMetadata => {
                AuthorityRole::Update
            }
            Operation::IncludeInSet | Operation::ExcludeFromSet => AuthorityRole::Inclusion,
            Operation::UpdateGroupAuthority(role) => role,
        }
    }
}

/// Check that `signer` signed the transaction and holds the role `operation` requires
pub fn require_authority(
    group: &AuthoritiesGroup,
    operation: Operation,
    signer: &AccountInfo,
) -> Result<()> {
    check_authority(group, operation, signer.key, signer.is_signer)
}

pub fn check_authority(
    group: &AuthoritiesGroup,
    operation: Operation,
    key: &Pubkey,
    is_signer: bool,
) -> Result<()> {
    let role = operation.required_role();
    let expected = group.authority(role);

    if !is_signer || *key != expected {
        msg!(
            "{:?}: {:?} authority {} required, got {} (signed: {})",
            operation,
            role,
            expected,
            key,
            is_signer
        );
        return err!(NftStandardError::Unauthorized);
    }

    Ok(())
}
