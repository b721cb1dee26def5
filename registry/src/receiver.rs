// Receiver Acknowledgment Interface
// External collaborator contract consumed by the safe transfer path. The
// registry only defines the call shape and the accept/reject rule; what a
// receiver does internally is out of scope.

use thiserror::Error;

use crate::types::{Principal, TokenId};

/// Fixed 4-byte acknowledgment returned by an accepting receiver
pub type Acknowledgment = [u8; 4];

/// Expected acknowledgment value. Any other value, or an error during the
/// call, signals rejection.
pub const TOKEN_RECEIVED_MAGIC: Acknowledgment = [0x15, 0x0b, 0x7a, 0x02];

/// Error raised by a receiver during the acknowledgment call. The registry
/// treats any such error as rejection and does not interpret it further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("receiver call aborted: {0}")]
pub struct ReceiverError(pub String);

/// Capability probe and acknowledgment call surface for transfer recipients.
///
/// Implementations resolve which principals are callable and dispatch the
/// acknowledgment round-trip to them. A recipient that is not callable is
/// never invoked; the safe transfer then stands without an acknowledgment.
pub trait TokenReceivers {
    /// Check whether the principal is a callable recipient
    fn is_callable(&self, principal: &Principal) -> bool;

    /// Invoke the acknowledgment entry point on `recipient`.
    ///
    /// `operator` is the caller that initiated the transfer, `from` the
    /// previous owner. The call is synchronous; the registry blocks on the
    /// result and treats it as part of the same atomic operation.
    fn on_token_received(
        &self,
        recipient: &Principal,
        operator: &Principal,
        from: &Principal,
        token_id: TokenId,
        data: &[u8],
    ) -> Result<Acknowledgment, ReceiverError>;
}

/// Receiver set with no callable principals. Every safe transfer through it
/// behaves like a plain transfer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReceivers;

impl TokenReceivers for NoReceivers {
    fn is_callable(&self, _principal: &Principal) -> bool {
        false
    }

    fn on_token_received(
        &self,
        recipient: &Principal,
        _operator: &Principal,
        _from: &Principal,
        _token_id: TokenId,
        _data: &[u8],
    ) -> Result<Acknowledgment, ReceiverError> {
        Err(ReceiverError(format!("{} is not callable", recipient)))
    }
}
