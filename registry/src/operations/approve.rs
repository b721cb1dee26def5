// Registry Approval Operations
// This module contains the two delegation mechanisms layered on the ledger:
// per-token single delegates and per-owner blanket operators.

use log::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::types::{Principal, RegistryEvent, TokenId};

use super::{RegistryStorage, RuntimeContext};

// ========================================
// Single-Token Approval
// ========================================

/// Set or revoke the single-token approval for a token.
///
/// Authorization: the caller must be the current owner of the token, or an
/// operator approved by the current owner. The new delegate overwrites any
/// previous one; `None` revokes.
///
/// The approval is always owner-scoped: it is implicitly invalidated by any
/// ownership change (the transfer protocol clears the underlying entry).
///
/// # Returns
/// - `Ok(())`: Approval updated, `Approval` event recorded
/// - `Err(NonExistentToken)`: The token has no owner
/// - `Err(NotAuthorized)`: Caller is neither owner nor approved operator
pub fn approve<S: RegistryStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    token_id: TokenId,
    delegate: Option<&Principal>,
) -> RegistryResult<()> {
    let owner = storage
        .owner_of(token_id)
        .ok_or(RegistryError::NonExistentToken)?;

    if ctx.caller != owner && !storage.is_approved_for_all(&owner, &ctx.caller) {
        return Err(RegistryError::NotAuthorized);
    }

    storage.set_approved(token_id, delegate)?;

    debug!(
        "approval for token {} set to {:?} by {}",
        token_id, delegate, ctx.caller
    );

    storage.record_event(RegistryEvent::Approval {
        owner,
        approved: delegate.copied(),
        token_id,
    })
}

// ========================================
// Operator Approval
// ========================================

/// Grant or revoke blanket operator rights over all of the caller's tokens,
/// present and future.
///
/// Unconditionally authorized: the caller acts on their own behalf, so no
/// ownership check is needed. Overwrites the (caller, operator) entry;
/// operator approval persists across transfers.
pub fn set_approval_for_all<S: RegistryStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    operator: &Principal,
    approved: bool,
) -> RegistryResult<()> {
    storage.set_approval_for_all(&ctx.caller, operator, approved)?;

    debug!(
        "operator approval ({}, {}) set to {}",
        ctx.caller, operator, approved
    );

    storage.record_event(RegistryEvent::ApprovalForAll {
        owner: ctx.caller,
        operator: *operator,
        approved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{get_approved, is_approved_for_all};
    use crate::storage::MemoryStorage;
    use crate::types::PRINCIPAL_SIZE;

    fn principal(byte: u8) -> Principal {
        Principal::new([byte; PRINCIPAL_SIZE])
    }

    fn setup() -> (MemoryStorage, Principal) {
        let mut storage = MemoryStorage::new();
        let owner = principal(10);
        storage.set_owner(0, &owner).unwrap();
        (storage, owner)
    }

    #[test]
    fn test_approve_by_owner() {
        let (mut storage, owner) = setup();
        let delegate = principal(2);

        let ctx = RuntimeContext::new(owner);
        approve(&mut storage, &ctx, 0, Some(&delegate)).unwrap();

        assert_eq!(get_approved(&storage, 0), Ok(Some(delegate)));
        assert_eq!(
            storage.drain_events(),
            vec![RegistryEvent::Approval {
                owner,
                approved: Some(delegate),
                token_id: 0,
            }]
        );
    }

    #[test]
    fn test_approve_overwrites_previous_delegate() {
        let (mut storage, owner) = setup();
        let ctx = RuntimeContext::new(owner);

        approve(&mut storage, &ctx, 0, Some(&principal(2))).unwrap();
        approve(&mut storage, &ctx, 0, Some(&principal(3))).unwrap();

        assert_eq!(get_approved(&storage, 0), Ok(Some(principal(3))));
    }

    #[test]
    fn test_approve_revoke() {
        let (mut storage, owner) = setup();
        let ctx = RuntimeContext::new(owner);

        approve(&mut storage, &ctx, 0, Some(&principal(2))).unwrap();
        approve(&mut storage, &ctx, 0, None).unwrap();

        assert_eq!(get_approved(&storage, 0), Ok(None));
    }

    #[test]
    fn test_approve_by_operator() {
        let (mut storage, owner) = setup();
        let operator = principal(3);
        let delegate = principal(4);

        let owner_ctx = RuntimeContext::new(owner);
        set_approval_for_all(&mut storage, &owner_ctx, &operator, true).unwrap();

        let ctx = RuntimeContext::new(operator);
        approve(&mut storage, &ctx, 0, Some(&delegate)).unwrap();

        assert_eq!(get_approved(&storage, 0), Ok(Some(delegate)));
        // The event names the owner, not the operator that set it
        assert_eq!(
            storage.drain_events().last(),
            Some(&RegistryEvent::Approval {
                owner,
                approved: Some(delegate),
                token_id: 0,
            })
        );
    }

    #[test]
    fn test_approve_not_authorized() {
        let (mut storage, _owner) = setup();
        let stranger = principal(9);

        let ctx = RuntimeContext::new(stranger);
        let result = approve(&mut storage, &ctx, 0, Some(&stranger));
        assert_eq!(result, Err(RegistryError::NotAuthorized));
        assert!(storage.drain_events().is_empty());
    }

    #[test]
    fn test_approve_nonexistent_token() {
        let (mut storage, owner) = setup();
        let ctx = RuntimeContext::new(owner);

        let result = approve(&mut storage, &ctx, 42, Some(&principal(2)));
        assert_eq!(result, Err(RegistryError::NonExistentToken));
    }

    #[test]
    fn test_set_approval_for_all() {
        let (mut storage, owner) = setup();
        let operator = principal(3);

        let ctx = RuntimeContext::new(owner);
        set_approval_for_all(&mut storage, &ctx, &operator, true).unwrap();
        assert!(is_approved_for_all(&storage, &owner, &operator));

        // One-directional
        assert!(!is_approved_for_all(&storage, &operator, &owner));

        set_approval_for_all(&mut storage, &ctx, &operator, false).unwrap();
        assert!(!is_approved_for_all(&storage, &owner, &operator));

        assert_eq!(
            storage.drain_events(),
            vec![
                RegistryEvent::ApprovalForAll {
                    owner,
                    operator,
                    approved: true,
                },
                RegistryEvent::ApprovalForAll {
                    owner,
                    operator,
                    approved: false,
                },
            ]
        );
    }

    #[test]
    fn test_set_approval_for_all_needs_no_holdings() {
        // An owner may delegate blanket authority over current and future
        // holdings, even while owning nothing
        let mut storage = MemoryStorage::new();
        let ctx = RuntimeContext::new(principal(1));

        set_approval_for_all(&mut storage, &ctx, &principal(2), true).unwrap();
        assert!(is_approved_for_all(&storage, &principal(1), &principal(2)));
    }
}
