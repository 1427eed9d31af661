//! # Account Identity Newtype
//!
//! Newtype wrapper for caller and authority identities. The hosting
//! environment authenticates callers and hands the registry a verified
//! `AccountId` per call — the registry never re-verifies signatures itself.
//!
//! ## Security Invariant
//!
//! The nil UUID is the "zero identity". It can never hold registry
//! authority: both store initialization and authority transfer reject it,
//! so a misconfigured host cannot brick the registry into an unowned state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated principal — a caller or the registry authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil (all-zero) identity. Rejected as an authority.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the nil identity.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_identity_detected() {
        assert!(AccountId::nil().is_nil());
        assert!(!AccountId::new().is_nil());
    }

    #[test]
    fn test_display_prefix() {
        let id = AccountId::nil();
        assert_eq!(
            id.to_string(),
            "account:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_from_str_round_trip() {
        let id = AccountId::new();
        let parsed: AccountId = id.0.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serde_as_plain_uuid_string() {
        let id = AccountId::nil();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
