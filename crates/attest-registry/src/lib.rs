//! # attest-registry — The Authenticated Record Store
//!
//! A minimal authenticated record store: a single authority publishes
//! tamper-evident proofs (content hashes) of records keyed by a derived
//! `(subject, category)` digest, and any party can verify a claimed proof
//! against the stored one.
//!
//! ## Record Lifecycle
//!
//! ```text
//! (absent) ──create──▶ Active ──update──▶ Active
//!                         │
//!                         └──revoke──▶ Revoked (terminal)
//! ```
//!
//! Revocation is a soft delete: the record keeps occupying its key with its
//! last-known contents readable. There is no reactivation and no
//! re-creation at a revoked key — the occupied slot is the immutable trace
//! that something was once attested there.
//!
//! ## Authorization
//!
//! Single-principal: one mutable [`AccountId`](attest_core::AccountId)
//! authority field with an explicit transfer operation is the entire
//! access-control model. Reads (`verify`, `get`) are public.
//!
//! ## Concurrency
//!
//! [`RecordStore`] itself is a plain synchronous state machine and assumes
//! the host serializes writes — the model inherited from running atop a
//! replicated-state-machine executor. Standalone hosts wrap it in
//! [`SharedRecordStore`], which supplies the equivalent guarantee with an
//! `RwLock`: fully serialized writes, concurrent reads, never a torn
//! record.

pub mod event;
pub mod record;
pub mod shared;
pub mod store;

// Re-export primary types for ergonomic imports.
pub use event::AuditEvent;
pub use record::{Record, RecordView};
pub use shared::SharedRecordStore;
pub use store::RecordStore;
