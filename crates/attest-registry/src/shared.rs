//! # Shared Store Wrapper
//!
//! [`RecordStore`] assumes its host serializes writes, the way a
//! replicated-state-machine executor does. A standalone host must supply
//! an equivalent guarantee; [`SharedRecordStore`] is that equivalent, built
//! on `Arc<RwLock<_>>`.
//!
//! ## Guarantees
//!
//! - Writes take the write lock: each state change completes, audit-event
//!   append included, before the next write begins.
//! - `verify` and `get` take the read lock and may run concurrently with
//!   each other.
//! - A read concurrent with a write observes the pre-write or post-write
//!   state atomically, never a partially updated record.
//!
//! No timeouts, no cancellation, no retry policy — every call completes
//! or fails immediately with a terminal [`RegistryError`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use attest_core::{AccountId, RegistryError};

use crate::event::AuditEvent;
use crate::record::RecordView;
use crate::store::RecordStore;

/// A thread-safe handle to a [`RecordStore`]. Cheap to clone; all clones
/// share the same store.
#[derive(Debug, Clone)]
pub struct SharedRecordStore {
    inner: Arc<RwLock<RecordStore>>,
}

impl SharedRecordStore {
    /// Create a shared store owned by `initial_authority`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidAuthority`] if `initial_authority` is nil.
    pub fn new(initial_authority: AccountId) -> Result<Self, RegistryError> {
        Ok(Self::from_store(RecordStore::new(initial_authority)?))
    }

    /// Wrap an existing store (e.g. one restored from a snapshot).
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // ─── Writes ──────────────────────────────────────────────────────

    /// See [`RecordStore::create`].
    pub fn create(
        &self,
        caller: AccountId,
        subject: &str,
        category: &str,
        proof_hash: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.write().create(caller, subject, category, proof_hash)
    }

    /// See [`RecordStore::update`].
    pub fn update(
        &self,
        caller: AccountId,
        subject: &str,
        category: &str,
        new_proof_hash: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.write().update(caller, subject, category, new_proof_hash)
    }

    /// See [`RecordStore::revoke`].
    pub fn revoke(
        &self,
        caller: AccountId,
        subject: &str,
        category: &str,
    ) -> Result<(), RegistryError> {
        self.write().revoke(caller, subject, category)
    }

    /// See [`RecordStore::transfer_authority`].
    pub fn transfer_authority(
        &self,
        caller: AccountId,
        new_authority: AccountId,
    ) -> Result<(), RegistryError> {
        self.write().transfer_authority(caller, new_authority)
    }

    // ─── Reads ───────────────────────────────────────────────────────

    /// See [`RecordStore::verify`].
    pub fn verify(&self, subject: &str, category: &str, expected_proof: &str) -> bool {
        self.read().verify(subject, category, expected_proof)
    }

    /// See [`RecordStore::get`].
    pub fn get(&self, subject: &str, category: &str) -> RecordView {
        self.read().get(subject, category)
    }

    /// The current registry authority.
    pub fn authority(&self) -> AccountId {
        self.read().authority()
    }

    /// A copy of the audit trail, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.read().events().to_vec()
    }

    /// A snapshot copy of the whole store (e.g. for persistence).
    pub fn snapshot(&self) -> RecordStore {
        self.read().clone()
    }

    // ─── Lock helpers ────────────────────────────────────────────────

    // Store operations validate before they mutate and contain no panic
    // points mid-mutation, so a poisoned lock cannot hold a torn record;
    // recover the guard instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, RecordStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RecordStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
