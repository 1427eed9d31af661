//! End-to-end registry lifecycle: create, verify, update, revoke, and
//! authority transfer against one store instance, checking the audit
//! trail at each step.

use attest_core::{AccountId, RecordKey, RegistryError};
use attest_registry::{AuditEvent, RecordStore};

#[test]
fn full_attestation_lifecycle() {
    let authority = AccountId::new();
    let mut store = RecordStore::new(authority).unwrap();

    // Publish a proof for alice's math101 result.
    store
        .create(authority, "alice", "math101", "QmHash1")
        .unwrap();
    assert!(store.verify("alice", "math101", "QmHash1"));

    // Correct the published document.
    store
        .update(authority, "alice", "math101", "QmHash2")
        .unwrap();
    assert!(!store.verify("alice", "math101", "QmHash1"));
    assert!(store.verify("alice", "math101", "QmHash2"));

    // Withdraw the attestation.
    store.revoke(authority, "alice", "math101").unwrap();
    assert!(!store.verify("alice", "math101", "QmHash2"));

    // The revoked record stays on the books.
    let view = store.get("alice", "math101");
    assert_eq!(view.proof_hash, "QmHash2");
    assert_eq!(view.category, "math101");
    assert!(!view.active);
    assert!(view.updated_at.unix() > 0);

    // The slot is permanently occupied.
    let key = RecordKey::derive("alice", "math101");
    assert_eq!(
        store
            .create(authority, "alice", "math101", "QmHash3")
            .unwrap_err(),
        RegistryError::AlreadyExists { key }
    );

    // Hand the registry to a successor, who can keep writing.
    let successor = AccountId::new();
    store.transfer_authority(authority, successor).unwrap();
    assert_eq!(
        store
            .create(authority, "bob", "math101", "QmHash4")
            .unwrap_err(),
        RegistryError::Unauthorized { caller: authority }
    );
    store
        .create(successor, "bob", "math101", "QmHash4")
        .unwrap();

    // Five successful writes, five events, in order.
    let kinds: Vec<_> = store
        .events()
        .iter()
        .map(|e| match e {
            AuditEvent::Added { .. } => "added",
            AuditEvent::Updated { .. } => "updated",
            AuditEvent::Revoked { .. } => "revoked",
            AuditEvent::AuthorityTransferred { .. } => "transferred",
        })
        .collect();
    assert_eq!(
        kinds,
        ["added", "updated", "revoked", "transferred", "added"]
    );
}

#[test]
fn independent_stores_do_not_interfere() {
    let a = AccountId::new();
    let b = AccountId::new();
    let mut store_a = RecordStore::new(a).unwrap();
    let mut store_b = RecordStore::new(b).unwrap();

    store_a.create(a, "alice", "math101", "QmHashA").unwrap();
    store_b.create(b, "alice", "math101", "QmHashB").unwrap();

    assert!(store_a.verify("alice", "math101", "QmHashA"));
    assert!(!store_a.verify("alice", "math101", "QmHashB"));
    assert!(store_b.verify("alice", "math101", "QmHashB"));

    // Each store has its own authority.
    assert_eq!(
        store_a.create(b, "bob", "cs50", "QmHash").unwrap_err(),
        RegistryError::Unauthorized { caller: b }
    );
}
