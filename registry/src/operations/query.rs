// Registry Query Operations
// This module contains read-only query functions.

use crate::error::{RegistryError, RegistryResult};
use crate::types::{Principal, TokenId};

use super::RegistryStorage;

// ========================================
// Owner Query
// ========================================

/// Get the current owner of a token
///
/// # Returns
/// - `Ok(Principal)`: Current owner
/// - `Err(NonExistentToken)`: The id has no owner record
pub fn owner_of<S: RegistryStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> RegistryResult<Principal> {
    storage
        .owner_of(token_id)
        .ok_or(RegistryError::NonExistentToken)
}

// ========================================
// Existence Query
// ========================================

/// Check if a token exists (i.e. has an owner record)
pub fn exists<S: RegistryStorage + ?Sized>(storage: &S, token_id: TokenId) -> bool {
    storage.owner_of(token_id).is_some()
}

// ========================================
// Balance Query
// ========================================

/// Get the number of tokens currently owned by a principal.
/// Zero for a principal that owns nothing; never an error.
pub fn balance_of<S: RegistryStorage + ?Sized>(storage: &S, owner: &Principal) -> u64 {
    storage.balance_of(owner)
}

// ========================================
// Approval Queries
// ========================================

/// Get the current single-token delegate for a token
///
/// # Returns
/// - `Ok(Some(Principal))`: Current delegate
/// - `Ok(None)`: No delegate set
/// - `Err(NonExistentToken)`: The token was never minted — callers must not
///   receive a default value for an unknown id
pub fn get_approved<S: RegistryStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> RegistryResult<Option<Principal>> {
    if !exists(storage, token_id) {
        return Err(RegistryError::NonExistentToken);
    }

    Ok(storage.approved_for(token_id))
}

/// Check whether `operator` holds blanket approval over all of `owner`'s
/// tokens. Pure read; defaults to false for any pair never set.
pub fn is_approved_for_all<S: RegistryStorage + ?Sized>(
    storage: &S,
    owner: &Principal,
    operator: &Principal,
) -> bool {
    storage.is_approved_for_all(owner, operator)
}

// ========================================
// Composite Authorization Query
// ========================================

/// Composite check used by the transfer protocol: true iff `caller` is the
/// owner, the single-token delegate, or an approved operator of the owner.
///
/// # Returns
/// - `Ok(bool)`: Whether the caller is authorized
/// - `Err(NonExistentToken)`: The token does not exist
pub fn is_authorized<S: RegistryStorage + ?Sized>(
    storage: &S,
    caller: &Principal,
    token_id: TokenId,
) -> RegistryResult<bool> {
    let owner = owner_of(storage, token_id)?;
    Ok(super::check_authorized(storage, &owner, token_id, caller).is_ok())
}
