// Registry Error Codes
// This module defines all error codes for registry operations.
//
// Error Code Ranges:
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 600-699: safe_transfer errors
// - 900-999: System errors

use thiserror::Error;

/// Registry operation result type
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum RegistryError {
    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token does not exist")]
    NonExistentToken = 100,

    #[error("Token already exists")]
    TokenAlreadyExists = 101,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not authorized")]
    NotAuthorized = 200,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Recipient is the zero principal")]
    InvalidRecipient = 300,

    #[error("Supplied owner does not match current owner")]
    OwnerMismatch = 301,

    // ========================================
    // safe_transfer errors (600-699)
    // ========================================
    #[error("Receiver did not acknowledge the transfer")]
    UnsafeRecipient = 600,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Storage error")]
    StorageError = 901,
}

impl RegistryError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::NonExistentToken),
            101 => Some(Self::TokenAlreadyExists),
            200 => Some(Self::NotAuthorized),
            300 => Some(Self::InvalidRecipient),
            301 => Some(Self::OwnerMismatch),
            600 => Some(Self::UnsafeRecipient),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }
}
