// Registry Operations Module
// This module contains the core business logic for registry operations.
//
// The operations are designed to be backend-agnostic:
// - Storage access is abstracted via the RegistryStorage trait
// - Caller identity is passed as a parameter via RuntimeContext
// - This allows testing and reuse across different host environments

mod approve;
mod query;
mod transfer;

pub use approve::*;
pub use query::*;
pub use transfer::*;

use crate::error::{RegistryError, RegistryResult};
use crate::types::{Principal, RegistryEvent, TokenId};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for registry operations.
///
/// Ownership is the root fact: a token exists iff it has an owner record.
/// Approvals are derived authorization grants layered on top and must never
/// be consulted to determine existence.
pub trait RegistryStorage {
    // Ownership ledger
    /// Current owner of a token, `None` if the token does not exist
    fn owner_of(&self, token_id: TokenId) -> Option<Principal>;

    /// Unconditionally overwrite the owner record. Used only by the transfer
    /// protocol and genesis provisioning; callers must have already
    /// validated existence and authorization.
    fn set_owner(&mut self, token_id: TokenId, owner: &Principal) -> RegistryResult<()>;

    /// Number of tokens currently owned by `owner`. Always equals the
    /// cardinality of the owned set; zero for unknown principals.
    fn balance_of(&self, owner: &Principal) -> u64;

    // Single-token approvals
    /// Current single-token delegate, `None` if unset. Callers are
    /// responsible for checking that the token exists first.
    fn approved_for(&self, token_id: TokenId) -> Option<Principal>;

    /// Overwrite the single-token approval; `None` revokes
    fn set_approved(
        &mut self,
        token_id: TokenId,
        delegate: Option<&Principal>,
    ) -> RegistryResult<()>;

    // Operator approvals
    /// Whether `operator` holds blanket transfer rights over all of
    /// `owner`'s tokens. Defaults to false for any pair never set.
    fn is_approved_for_all(&self, owner: &Principal, operator: &Principal) -> bool;

    /// Overwrite the (owner, operator) entry
    fn set_approval_for_all(
        &mut self,
        owner: &Principal,
        operator: &Principal,
        approved: bool,
    ) -> RegistryResult<()>;

    // Events
    /// Record an event for external delivery. Operations call this exactly
    /// once per successful state change, after the mutation is applied.
    fn record_event(&mut self, event: RegistryEvent) -> RegistryResult<()>;
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context identifying the caller of an operation
pub struct RuntimeContext {
    /// Current caller (request signer)
    pub caller: Principal,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Principal) -> Self {
        Self { caller }
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check that `caller` may move the token currently owned by `owner`.
/// Returns Ok(()) if the caller is the owner, the single-token delegate, or
/// an approved operator of the owner; `NotAuthorized` otherwise.
pub fn check_authorized<S: RegistryStorage + ?Sized>(
    storage: &S,
    owner: &Principal,
    token_id: TokenId,
    caller: &Principal,
) -> RegistryResult<()> {
    // Owner always has permission
    if owner == caller {
        return Ok(());
    }

    // Single token approval
    if storage.approved_for(token_id).as_ref() == Some(caller) {
        return Ok(());
    }

    // Blanket operator approval
    if storage.is_approved_for_all(owner, caller) {
        return Ok(());
    }

    Err(RegistryError::NotAuthorized)
}
