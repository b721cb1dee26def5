// Genesis Provisioning
// The initial population of the ownership ledger is supplied by an
// out-of-scope deployment step; this module only defines the data format it
// hands over and the application onto a storage backend. No events are
// recorded: genesis state exists before any observer.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};
use crate::operations::RegistryStorage;
use crate::types::{Principal, TokenId};

/// A single pre-minted token in the genesis state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisToken {
    /// Token identifier
    pub token_id: TokenId,
    /// Owner at genesis
    pub owner: Principal,
}

/// Genesis state handed over by the provisioning step
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Pre-minted tokens
    pub tokens: Vec<GenesisToken>,
}

impl GenesisState {
    /// Genesis state assigning all listed token ids to a single owner
    pub fn single_owner(owner: Principal, token_ids: impl IntoIterator<Item = TokenId>) -> Self {
        Self {
            tokens: token_ids
                .into_iter()
                .map(|token_id| GenesisToken { token_id, owner })
                .collect(),
        }
    }

    /// Apply the genesis state onto an empty or partially provisioned store.
    ///
    /// # Returns
    /// - `Ok(())`: All owner records created
    /// - `Err(InvalidRecipient)`: A token is assigned to the zero principal
    /// - `Err(TokenAlreadyExists)`: A token id appears twice or is already
    ///   live in the store
    pub fn apply<S: RegistryStorage>(&self, storage: &mut S) -> RegistryResult<()> {
        for token in &self.tokens {
            if token.owner.is_zero() {
                return Err(RegistryError::InvalidRecipient);
            }
            if storage.owner_of(token.token_id).is_some() {
                return Err(RegistryError::TokenAlreadyExists);
            }
            storage.set_owner(token.token_id, &token.owner)?;
        }

        debug!("genesis provisioned {} tokens", self.tokens.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::PRINCIPAL_SIZE;

    fn principal(byte: u8) -> Principal {
        Principal::new([byte; PRINCIPAL_SIZE])
    }

    #[test]
    fn test_apply_single_owner() {
        let mut storage = MemoryStorage::new();
        let owner = principal(10);

        GenesisState::single_owner(owner, [0, 1])
            .apply(&mut storage)
            .unwrap();

        assert_eq!(storage.owner_of(0), Some(owner));
        assert_eq!(storage.owner_of(1), Some(owner));
        assert_eq!(storage.balance_of(&owner), 2);
        // Provisioning is not a state transition, so nothing was recorded
        assert!(storage.events().is_empty());
    }

    #[test]
    fn test_apply_rejects_zero_owner() {
        let mut storage = MemoryStorage::new();
        let genesis = GenesisState::single_owner(Principal::ZERO, [0]);

        assert_eq!(
            genesis.apply(&mut storage),
            Err(RegistryError::InvalidRecipient)
        );
    }

    #[test]
    fn test_apply_rejects_duplicate_token() {
        let mut storage = MemoryStorage::new();
        let genesis = GenesisState {
            tokens: vec![
                GenesisToken {
                    token_id: 0,
                    owner: principal(1),
                },
                GenesisToken {
                    token_id: 0,
                    owner: principal(2),
                },
            ],
        };

        assert_eq!(
            genesis.apply(&mut storage),
            Err(RegistryError::TokenAlreadyExists)
        );
    }

    #[test]
    fn test_genesis_json_format() {
        let json = format!(
            r#"{{ "tokens": [ {{ "token_id": 0, "owner": "{}" }} ] }}"#,
            "0a".repeat(PRINCIPAL_SIZE)
        );
        let genesis: GenesisState = serde_json::from_str(&json).unwrap();

        assert_eq!(genesis.tokens.len(), 1);
        assert_eq!(genesis.tokens[0].owner, principal(0x0a));
    }
}
