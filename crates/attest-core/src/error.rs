//! # Error Taxonomy
//!
//! Every way a registry operation can be rejected. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every rejection is terminal. There is no transient failure class and
//!   no retry policy, because there is nothing transient to retry against.
//! - A rejected operation leaves the registry untouched: no record change,
//!   no authority change, no audit event.
//! - Errors carry the derived key or caller so hosts can log actionable
//!   context without the registry exposing raw subject identifiers.

use thiserror::Error;

use crate::identity::AccountId;
use crate::key::RecordKey;

/// Rejection reasons for registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller is not the current registry authority. Applies to every
    /// write operation.
    #[error("caller {caller} is not the registry authority")]
    Unauthorized {
        /// The rejected caller.
        caller: AccountId,
    },

    /// Create targeted a key that already holds a record. Revoked records
    /// still occupy their slot, so they block re-creation too.
    #[error("a record already exists at {key}")]
    AlreadyExists {
        /// The occupied key.
        key: RecordKey,
    },

    /// Update or revoke targeted a key with no record, or a record that
    /// has already been revoked.
    #[error("no active record at {key}")]
    NotFound {
        /// The targeted key.
        key: RecordKey,
    },

    /// The nil identity was offered as registry authority, at
    /// initialization or as a transfer target.
    #[error("the nil account cannot hold registry authority")]
    InvalidAuthority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let caller = AccountId::nil();
        let err = RegistryError::Unauthorized { caller };
        assert!(err.to_string().contains("account:"));

        let key = RecordKey::derive("s", "c");
        let err = RegistryError::NotFound { key };
        assert!(err.to_string().contains(&key.to_hex()));
    }
}
