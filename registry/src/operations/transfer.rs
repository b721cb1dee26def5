// Registry Transfer Operations
// This module contains the ownership state-transition engine: the plain
// transfer and the safe variant with its receiver acknowledgment round-trip.

use log::{debug, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::receiver::{TokenReceivers, TOKEN_RECEIVED_MAGIC};
use crate::types::{Principal, RegistryEvent, TokenId};

use super::{check_authorized, RegistryStorage, RuntimeContext};

// ========================================
// Shared Transfer Core
// ========================================

/// Check the shared transfer preconditions, in order, first failure wins:
///
/// 1. Token must exist — `NonExistentToken`
/// 2. The resolved current owner must equal `from` — `OwnerMismatch`
///    (guards against stale or forged `from`)
/// 3. `to` must not be the zero principal — `InvalidRecipient`
/// 4. Caller must be owner, delegate or operator — `NotAuthorized`
fn validate_transfer<S: RegistryStorage>(
    storage: &S,
    ctx: &RuntimeContext,
    from: &Principal,
    to: &Principal,
    token_id: TokenId,
) -> RegistryResult<()> {
    let owner = storage
        .owner_of(token_id)
        .ok_or(RegistryError::NonExistentToken)?;

    if owner != *from {
        return Err(RegistryError::OwnerMismatch);
    }

    if to.is_zero() {
        return Err(RegistryError::InvalidRecipient);
    }

    check_authorized(storage, &owner, token_id, &ctx.caller)
}

/// Apply the validated state transition: overwrite the owner record,
/// unconditionally clear the single-token approval (even if `to` equals
/// `from` or the previous delegate), and record the `Transfer` event.
fn commit_transfer<S: RegistryStorage>(
    storage: &mut S,
    from: &Principal,
    to: &Principal,
    token_id: TokenId,
) -> RegistryResult<()> {
    storage.set_owner(token_id, to)?;
    storage.set_approved(token_id, None)?;

    debug!("token {} transferred from {} to {}", token_id, from, to);

    storage.record_event(RegistryEvent::Transfer {
        from: *from,
        to: *to,
        token_id,
    })
}

// ========================================
// Transfer Operation
// ========================================

/// Transfer a token to a new owner, without a receiver check.
///
/// # Returns
/// - `Ok(())`: Ownership moved, approval cleared, `Transfer` event recorded
/// - `Err(RegistryError)`: A precondition failed; no state was changed
pub fn transfer_from<S: RegistryStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Principal,
    to: &Principal,
    token_id: TokenId,
) -> RegistryResult<()> {
    validate_transfer(storage, ctx, from, to, token_id)?;
    commit_transfer(storage, from, to, token_id)
}

// ========================================
// Safe Transfer Operation
// ========================================

/// Transfer a token, requiring the recipient to acknowledge custody when it
/// is a callable principal.
///
/// The acknowledgment round-trip is part of the same atomic operation: the
/// ownership/approval mutation is staged and only committed once the
/// receiver accepts, so a rejecting or failing receiver leaves the registry
/// byte-for-byte unchanged and no reader ever observes a partial state. A
/// recipient that is not callable skips the round-trip and the transfer
/// stands as-is.
///
/// # Returns
/// - `Ok(())`: Transfer committed
/// - `Err(UnsafeRecipient)`: Receiver errored or returned a value other than
///   the expected acknowledgment; nothing changed
/// - `Err(RegistryError)`: A shared precondition failed; the receiver was
///   never invoked
pub fn safe_transfer_from_with_data<S: RegistryStorage, R: TokenReceivers>(
    storage: &mut S,
    receivers: &R,
    ctx: &RuntimeContext,
    from: &Principal,
    to: &Principal,
    token_id: TokenId,
    data: &[u8],
) -> RegistryResult<()> {
    validate_transfer(storage, ctx, from, to, token_id)?;

    if receivers.is_callable(to) {
        match receivers.on_token_received(to, &ctx.caller, from, token_id, data) {
            Ok(ack) if ack == TOKEN_RECEIVED_MAGIC => {}
            Ok(ack) => {
                warn!(
                    "receiver {} returned {:02x?} instead of acknowledgment, rejecting transfer of token {}",
                    to, ack, token_id
                );
                return Err(RegistryError::UnsafeRecipient);
            }
            Err(e) => {
                warn!(
                    "receiver {} aborted acknowledgment for token {}: {}",
                    to, token_id, e
                );
                return Err(RegistryError::UnsafeRecipient);
            }
        }
    }

    commit_transfer(storage, from, to, token_id)
}

/// Safe transfer without trailing data; identical to
/// [`safe_transfer_from_with_data`] with an empty data payload.
pub fn safe_transfer_from<S: RegistryStorage, R: TokenReceivers>(
    storage: &mut S,
    receivers: &R,
    ctx: &RuntimeContext,
    from: &Principal,
    to: &Principal,
    token_id: TokenId,
) -> RegistryResult<()> {
    safe_transfer_from_with_data(storage, receivers, ctx, from, to, token_id, &[])
}
