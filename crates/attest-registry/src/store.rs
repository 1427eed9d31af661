//! # Record Store
//!
//! The registry state machine: the key-to-record map, the singleton
//! authority field, and the append-only audit trail, with every operation
//! an atomic, immediately-consistent, synchronous state transition.
//!
//! ## Write Semantics
//!
//! All precondition checks complete before any mutation. A rejected call
//! changes nothing: no record, no authority, no audit event. A successful
//! write appends exactly one event after its state change, within the same
//! call.
//!
//! ## Caller Identity
//!
//! `caller` on every write is the authenticated principal supplied by the
//! host (equivalent to a verified message sender). The store trusts it
//! without re-verifying signatures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use attest_core::{AccountId, RecordKey, RegistryError, Timestamp};

use crate::event::AuditEvent;
use crate::record::{Record, RecordView};

/// The authenticated record store.
///
/// Holds its authority as owned state rather than anything ambient, so
/// independent store instances coexist freely (one per test, one per
/// tenant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordStore {
    /// The single identity with write privilege.
    authority: AccountId,
    /// At most one record per derived key. Records are never removed.
    records: BTreeMap<RecordKey, Record>,
    /// Append-only trail of successful writes.
    events: Vec<AuditEvent>,
}

impl RecordStore {
    /// Create a store owned by `initial_authority`.
    ///
    /// The authority is set exactly once here; afterwards it changes only
    /// through [`transfer_authority`](Self::transfer_authority).
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidAuthority`] if `initial_authority` is nil.
    pub fn new(initial_authority: AccountId) -> Result<Self, RegistryError> {
        if initial_authority.is_nil() {
            return Err(RegistryError::InvalidAuthority);
        }
        Ok(Self {
            authority: initial_authority,
            records: BTreeMap::new(),
            events: Vec::new(),
        })
    }

    // ─── Writes (authority-only) ─────────────────────────────────────

    /// Create an active record at `derive(subject, category)`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the authority.
    /// - [`RegistryError::AlreadyExists`] if the key holds a record,
    ///   active or revoked.
    pub fn create(
        &mut self,
        caller: AccountId,
        subject: &str,
        category: &str,
        proof_hash: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        let key = RecordKey::derive(subject, category);
        if self.records.contains_key(&key) {
            return Err(RegistryError::AlreadyExists { key });
        }

        let now = Timestamp::now();
        self.records.insert(
            key,
            Record {
                proof_hash: proof_hash.into(),
                category: category.to_string(),
                updated_at: now,
                active: true,
            },
        );
        self.events.push(AuditEvent::Added {
            key,
            category: category.to_string(),
            timestamp: now,
        });
        info!(%key, category, "record added");
        Ok(())
    }

    /// Replace the proof hash of the active record at the derived key.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the authority.
    /// - [`RegistryError::NotFound`] if the key is absent or the record
    ///   has been revoked.
    pub fn update(
        &mut self,
        caller: AccountId,
        subject: &str,
        category: &str,
        new_proof_hash: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        let key = RecordKey::derive(subject, category);
        let record = self.active_record_mut(key)?;

        let now = Timestamp::now();
        record.proof_hash = new_proof_hash.into();
        record.updated_at = now;
        let category = record.category.clone();
        self.events.push(AuditEvent::Updated {
            key,
            category: category.clone(),
            timestamp: now,
        });
        info!(%key, %category, "record updated");
        Ok(())
    }

    /// Revoke the active record at the derived key.
    ///
    /// Soft delete: the record keeps its last proof hash, category, and
    /// slot. There is no reactivation, and the occupied slot blocks any
    /// later `create` for the same pair.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the authority.
    /// - [`RegistryError::NotFound`] if the key is absent or the record
    ///   is already revoked.
    pub fn revoke(
        &mut self,
        caller: AccountId,
        subject: &str,
        category: &str,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        let key = RecordKey::derive(subject, category);
        let record = self.active_record_mut(key)?;

        let now = Timestamp::now();
        record.active = false;
        record.updated_at = now;
        let category = record.category.clone();
        self.events.push(AuditEvent::Revoked {
            key,
            category: category.clone(),
            timestamp: now,
        });
        info!(%key, %category, "record revoked");
        Ok(())
    }

    /// Hand registry authority to `new_authority`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Unauthorized`] if `caller` is not the authority.
    /// - [`RegistryError::InvalidAuthority`] if `new_authority` is nil —
    ///   the registry can never become unowned.
    pub fn transfer_authority(
        &mut self,
        caller: AccountId,
        new_authority: AccountId,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        if new_authority.is_nil() {
            return Err(RegistryError::InvalidAuthority);
        }

        let previous = self.authority;
        self.authority = new_authority;
        self.events.push(AuditEvent::AuthorityTransferred {
            previous,
            new: new_authority,
        });
        info!(%previous, new = %new_authority, "authority transferred");
        Ok(())
    }

    // ─── Reads (public) ──────────────────────────────────────────────

    /// Whether the stored proof at `(subject, category)` matches
    /// `expected_proof` exactly.
    ///
    /// `true` only when the record exists, is active, and the stored proof
    /// hash equals `expected_proof` byte for byte — no case folding, no
    /// normalization. Absent and revoked records verify `false`; this path
    /// never errors.
    pub fn verify(&self, subject: &str, category: &str, expected_proof: &str) -> bool {
        let key = RecordKey::derive(subject, category);
        match self.records.get(&key) {
            Some(record) => record.active && record.proof_hash == expected_proof,
            None => false,
        }
    }

    /// The record at `(subject, category)`, or the zero view if absent.
    pub fn get(&self, subject: &str, category: &str) -> RecordView {
        let key = RecordKey::derive(subject, category);
        self.records
            .get(&key)
            .map(RecordView::from)
            .unwrap_or_default()
    }

    /// The current registry authority.
    pub fn authority(&self) -> AccountId {
        self.authority
    }

    /// The audit trail, oldest first.
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Number of records, revoked ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has ever been created.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ─── Precondition helpers ────────────────────────────────────────

    /// Reject callers other than the current authority.
    fn require_authority(&self, caller: AccountId) -> Result<(), RegistryError> {
        if caller != self.authority {
            return Err(RegistryError::Unauthorized { caller });
        }
        Ok(())
    }

    /// The active record at `key`, for mutation. Absent and revoked
    /// records both reject with `NotFound`.
    fn active_record_mut(&mut self, key: RecordKey) -> Result<&mut Record, RegistryError> {
        match self.records.get_mut(&key) {
            Some(record) if record.active => Ok(record),
            _ => Err(RegistryError::NotFound { key }),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
