// Registry Core Types
// This module defines the data structures shared by all registry operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token identifier. Ids are opaque and externally assigned; the registry
/// never allocates or reuses them. Zero is a valid id.
pub type TokenId = u64;

/// Size of a principal identifier in bytes
pub const PRINCIPAL_SIZE: usize = 32;

/// An opaque, externally-issued identity (account or callable recipient).
/// The registry only compares principals for equality; it never creates or
/// authenticates them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(#[serde(with = "hex")] [u8; PRINCIPAL_SIZE]);

impl Principal {
    /// The null principal. Never a valid owner or transfer recipient.
    pub const ZERO: Self = Self([0u8; PRINCIPAL_SIZE]);

    /// Create a principal from raw bytes
    pub const fn new(bytes: [u8; PRINCIPAL_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; PRINCIPAL_SIZE] {
        &self.0
    }

    /// Check for the null principal
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Hex representation of the identifier
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.to_hex())
    }
}

impl From<[u8; PRINCIPAL_SIZE]> for Principal {
    fn from(bytes: [u8; PRINCIPAL_SIZE]) -> Self {
        Self(bytes)
    }
}

// ========================================
// Events
// ========================================

/// Observable notification recorded exactly once per successful state change.
/// Delivery to external listeners is fire-and-forget from the registry's
/// perspective; a failed or reverted operation records nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// Ownership of `token_id` moved from `from` to `to`
    Transfer {
        from: Principal,
        to: Principal,
        token_id: TokenId,
    },

    /// Single-token approval for `token_id` changed
    Approval {
        owner: Principal,
        approved: Option<Principal>,
        token_id: TokenId,
    },

    /// Blanket operator approval changed
    ApprovalForAll {
        owner: Principal,
        operator: Principal,
        approved: bool,
    },
}
