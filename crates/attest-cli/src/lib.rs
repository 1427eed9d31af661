//! # attest-cli — Registry Host Command-Line Interface
//!
//! A thin host for the attestation registry. The registry itself is
//! transport- and persistence-agnostic; this CLI supplies both in their
//! simplest form — a JSON snapshot file on disk and an `--as` flag standing
//! in for the host's authenticated-caller abstraction (the CLI is a trusted
//! host, the way a ledger executor is a trusted source of message senders).
//!
//! ## Subcommands
//!
//! - `init` — create a snapshot file with a fresh or given authority
//! - `add` / `update` / `revoke` / `transfer` — authority-only writes
//! - `verify` / `get` / `derive-key` — public reads
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `attest-registry` — no record or
//!   authorization logic here.
//! - Output is JSON on stdout; diagnostics go through `tracing` on stderr.

pub mod mutate;
pub mod query;
pub mod snapshot;
