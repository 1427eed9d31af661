//! # attest-core — Foundational Types for the Attestation Registry
//!
//! This crate is the bedrock of the attestation registry. It defines the
//! primitive types every other crate in the workspace builds on; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`AccountId`] for caller
//!    and authority identities, [`RecordKey`] for derived record keys,
//!    [`Timestamp`] for UTC instants. No bare strings or integers where a
//!    domain type exists.
//!
//! 2. **Key derivation is the only way to make a `RecordKey`.** Lookup keys
//!    are SHA-256 digests over `(subject, category)` with a separator byte,
//!    so the registry never has to store or expose raw subject identifiers.
//!    [`RecordKey::derive()`] is pure and reproducible off-store by any
//!    verifier who knows the inputs.
//!
//! 3. **UTC-only timestamps at seconds precision.** The zero value is the
//!    unix epoch, which is what the read path reports for absent records.
//!
//! 4. **One error taxonomy.** [`RegistryError`] enumerates every way a
//!    registry operation can be rejected. All rejections are terminal;
//!    there is nothing transient to retry against.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attest-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod key;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::RegistryError;
pub use identity::AccountId;
pub use key::{KeyParseError, RecordKey};
pub use temporal::Timestamp;
