// Registry Storage - In-Memory Backend
// Insertion-ordered maps keep reads and the derived balance scan
// deterministic across runs, matching the single-sequencer execution model.

use indexmap::IndexMap;

use crate::error::RegistryResult;
use crate::operations::RegistryStorage;
use crate::types::{Principal, RegistryEvent, TokenId};

/// In-memory storage backend.
///
/// Ownership is the only stored fact per token; balances are derived by
/// counting owner records, so `balance_of` always equals the cardinality of
/// the owned set. Events are buffered until drained by an external notifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    owners: IndexMap<TokenId, Principal>,
    approvals: IndexMap<TokenId, Principal>,
    operators: IndexMap<(Principal, Principal), bool>,
    events: Vec<RegistryEvent>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens
    pub fn token_count(&self) -> usize {
        self.owners.len()
    }

    /// Take all buffered events, oldest first. Each event is delivered to
    /// the caller exactly once.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at the buffered events without draining them
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}

impl RegistryStorage for MemoryStorage {
    fn owner_of(&self, token_id: TokenId) -> Option<Principal> {
        self.owners.get(&token_id).copied()
    }

    fn set_owner(&mut self, token_id: TokenId, owner: &Principal) -> RegistryResult<()> {
        self.owners.insert(token_id, *owner);
        Ok(())
    }

    fn balance_of(&self, owner: &Principal) -> u64 {
        self.owners.values().filter(|o| *o == owner).count() as u64
    }

    fn approved_for(&self, token_id: TokenId) -> Option<Principal> {
        self.approvals.get(&token_id).copied()
    }

    fn set_approved(
        &mut self,
        token_id: TokenId,
        delegate: Option<&Principal>,
    ) -> RegistryResult<()> {
        match delegate {
            Some(delegate) => {
                self.approvals.insert(token_id, *delegate);
            }
            None => {
                // shift_remove keeps the map insertion-ordered
                self.approvals.shift_remove(&token_id);
            }
        }
        Ok(())
    }

    fn is_approved_for_all(&self, owner: &Principal, operator: &Principal) -> bool {
        *self
            .operators
            .get(&(*owner, *operator))
            .unwrap_or(&false)
    }

    fn set_approval_for_all(
        &mut self,
        owner: &Principal,
        operator: &Principal,
        approved: bool,
    ) -> RegistryResult<()> {
        self.operators.insert((*owner, *operator), approved);
        Ok(())
    }

    fn record_event(&mut self, event: RegistryEvent) -> RegistryResult<()> {
        self.events.push(event);
        Ok(())
    }
}
