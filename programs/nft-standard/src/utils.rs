use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use spl_token_2022::extension::metadata_pointer::MetadataPointer;
use spl_token_2022::extension::{BaseStateWithExtensions, StateWithExtensions};
use spl_token_2022::state::Mint;

use crate::errors::NftStandardError;

// ============================================================================
// Program accounts
// ============================================================================

/// Allocate a program-owned PDA, failing with `already_exists` if it is in use.
///
/// Anchor's `init` reports an existing account as a generic system program
/// error; records here need their own error per account kind.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
    already_exists: NftStandardError,
) -> Result<()> {
    if !(target.owner == &anchor_lang::system_program::ID && target.data_is_empty()) {
        return Err(already_exists.into());
    }

    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();
    let signer = &[signer_seeds];

    if current == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    // Someone pre-funded the address: top up, then allocate and assign
    if current < rent {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            rent - current,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}

/// Serialize `record` (discriminator + Borsh) into the account data
pub fn write_account<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

/// Load a record owned by this program, mapping absence to `missing`
pub fn load_account<T: AccountDeserialize>(
    info: &AccountInfo,
    missing: NftStandardError,
) -> Result<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Err(missing.into());
    }

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Close a program account, refunding its lamports to `destination`
pub fn close_account<'info>(
    info: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let refund = info.lamports();

    **destination.try_borrow_mut_lamports()? = destination
        .lamports()
        .checked_add(refund)
        .ok_or(NftStandardError::Overflow)?;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&anchor_lang::system_program::ID);
    info.resize(0)?;

    Ok(())
}

/// Check the pointer target passed in remaining accounts exists and matches
pub fn require_data_account(remaining: &[AccountInfo], expected: &Pubkey) -> Result<()> {
    let account = remaining
        .first()
        .ok_or(NftStandardError::InvalidDataAccount)?;

    require_keys_eq!(*account.key, *expected, NftStandardError::InvalidDataAccount);
    require!(
        account.lamports() > 0 && account.owner != &anchor_lang::system_program::ID,
        NftStandardError::InvalidDataAccount
    );

    Ok(())
}

// ============================================================================
// Token-2022 mints
// ============================================================================

/// Read the MetadataPointer extension of a Token-2022 mint
pub fn metadata_pointer(mint: &AccountInfo) -> Result<MetadataPointer> {
    require!(
        mint.owner == &spl_token_2022::ID,
        NftStandardError::InvalidMint
    );

    let data = mint.try_borrow_data()?;
    let state =
        StateWithExtensions::<Mint>::unpack(&data).map_err(|_| NftStandardError::InvalidMint)?;
    let pointer = state
        .get_extension::<MetadataPointer>()
        .map_err(|_| NftStandardError::InvalidMint)?;

    Ok(*pointer)
}

/// Authorities group a mint was bound to at mint time (its metadata pointer authority)
pub fn mint_authorities_group(mint: &AccountInfo) -> Result<Pubkey> {
    let pointer = metadata_pointer(mint)?;

    Option::<Pubkey>::from(pointer.authority).ok_or_else(|| error!(NftStandardError::GroupMismatch))
}

/// Check the account is an initialized Token-2022 mint
pub fn require_token_2022_mint(mint: &AccountInfo) -> Result<()> {
    require!(
        mint.owner == &spl_token_2022::ID,
        NftStandardError::InvalidMint
    );

    let data = mint.try_borrow_data()?;
    StateWithExtensions::<Mint>::unpack(&data).map_err(|_| NftStandardError::InvalidMint)?;

    Ok(())
}
