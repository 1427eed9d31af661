//! # Attestation Records
//!
//! The stored record for one `(subject, category)` pair, and the
//! zero-defaulting view returned by the public read path.

use serde::{Deserialize, Serialize};

use attest_core::Timestamp;

/// The authenticated proof record for one `(subject, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque content digest (hash/CID) of the off-store artifact.
    pub proof_hash: String,
    /// Category label, stored redundantly for display and audit even
    /// though it is part of the key-derivation input.
    pub category: String,
    /// When the record last changed state.
    pub updated_at: Timestamp,
    /// `false` means revoked. Revoked records keep their last contents.
    pub active: bool,
}

/// Read-path projection of a record.
///
/// `get` never errors: for a key with no record it returns the zero view
/// — empty strings, the epoch timestamp, inactive. This is deliberately
/// asymmetric with `update`/`revoke`, which reject absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    /// Stored proof hash, or empty if the record is absent.
    pub proof_hash: String,
    /// Stored category label, or empty if the record is absent.
    pub category: String,
    /// Last state change, or the epoch if the record is absent.
    pub updated_at: Timestamp,
    /// Whether the record exists and has not been revoked.
    pub active: bool,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            proof_hash: record.proof_hash.clone(),
            category: record.category.clone(),
            updated_at: record.updated_at,
            active: record.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_view() {
        let view = RecordView::default();
        assert_eq!(view.proof_hash, "");
        assert_eq!(view.category, "");
        assert_eq!(view.updated_at.unix(), 0);
        assert!(!view.active);
    }

    #[test]
    fn test_view_mirrors_record() {
        let record = Record {
            proof_hash: "QmHash1".to_string(),
            category: "math101".to_string(),
            updated_at: Timestamp::from_unix(1_700_000_000).unwrap(),
            active: true,
        };
        let view = RecordView::from(&record);
        assert_eq!(view.proof_hash, record.proof_hash);
        assert_eq!(view.category, record.category);
        assert_eq!(view.updated_at, record.updated_at);
        assert!(view.active);
    }
}
