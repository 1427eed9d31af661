//! # Audit Events
//!
//! Append-only, externally observable trail of successful state changes.
//! Exactly one event is appended per successful write; rejected calls
//! append nothing. Events carry derived keys, never raw subjects.

use serde::{Deserialize, Serialize};

use attest_core::{AccountId, RecordKey, Timestamp};

/// A successful state-changing call, as recorded in the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A record was created at `key`.
    Added {
        /// The derived record key.
        key: RecordKey,
        /// Category label of the new record.
        category: String,
        /// When the record was created.
        timestamp: Timestamp,
    },

    /// The proof hash at `key` was replaced.
    Updated {
        /// The derived record key.
        key: RecordKey,
        /// Category label of the record.
        category: String,
        /// When the record was updated.
        timestamp: Timestamp,
    },

    /// The record at `key` was revoked.
    Revoked {
        /// The derived record key.
        key: RecordKey,
        /// Category label of the record.
        category: String,
        /// When the record was revoked.
        timestamp: Timestamp,
    },

    /// Registry authority moved from `previous` to `new`.
    AuthorityTransferred {
        /// The outgoing authority.
        previous: AccountId,
        /// The incoming authority.
        new: AccountId,
    },
}

impl AuditEvent {
    /// The record key this event concerns, if it concerns one.
    pub fn key(&self) -> Option<&RecordKey> {
        match self {
            Self::Added { key, .. } | Self::Updated { key, .. } | Self::Revoked { key, .. } => {
                Some(key)
            }
            Self::AuthorityTransferred { .. } => None,
        }
    }
}
