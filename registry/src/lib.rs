// Non-Fungible Token Ownership Registry
// This crate tracks exclusive ownership of uniquely identified tokens,
// delegated authority over them, and the transfer protocol that moves them.
//
// Features:
// - Ownership ledger: token id -> owner, existence = having an owner
// - Single-token delegates and blanket operator approvals
// - Plain and safe transfers; the safe variant requires a callable
//   recipient to acknowledge custody before the transfer commits
// - Exactly-once event recording per successful state change
// - Genesis provisioning format for externally supplied initial state
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Principal, TokenId, events)
// - operations: Core operation logic (approve, transfer, query) over an
//   abstract storage backend
// - receiver: Receiver acknowledgment interface contract
// - storage: In-memory storage backend
// - genesis: Genesis provisioning format

mod error;
pub mod genesis;
pub mod operations;
pub mod receiver;
mod storage;
mod types;

pub use error::*;
pub use storage::*;
pub use types::*;
