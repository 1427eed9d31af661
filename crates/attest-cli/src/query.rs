//! # Read Subcommands
//!
//! `verify`, `get`, and `derive-key`. Reads need no caller identity — the
//! registry's read path is public.

use std::path::PathBuf;

use clap::Args;

use attest_core::RecordKey;

use crate::snapshot;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path of the registry snapshot file.
    #[arg(long)]
    pub store: PathBuf,

    /// Subject identifier.
    pub subject: String,

    /// Category label.
    pub category: String,

    /// Claimed content digest to check against the stored one.
    pub proof: String,
}

/// Arguments for the get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path of the registry snapshot file.
    #[arg(long)]
    pub store: PathBuf,

    /// Subject identifier.
    pub subject: String,

    /// Category label.
    pub category: String,
}

/// Arguments for the derive-key subcommand.
#[derive(Args, Debug)]
pub struct DeriveKeyArgs {
    /// Subject identifier.
    pub subject: String,

    /// Category label.
    pub category: String,
}

/// Check a claimed proof against the stored one. Returns the match result
/// so the binary can exit non-zero on mismatch.
pub fn verify(args: &VerifyArgs) -> anyhow::Result<bool> {
    let store = snapshot::load(&args.store)?;
    let matches = store.verify(&args.subject, &args.category, &args.proof);
    println!("{}", serde_json::json!({ "verified": matches }));
    Ok(matches)
}

/// Print the record at `(subject, category)`, zero-valued if absent.
pub fn get(args: &GetArgs) -> anyhow::Result<()> {
    let store = snapshot::load(&args.store)?;
    let view = store.get(&args.subject, &args.category);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

/// Print the derived key for `(subject, category)` — the same derivation
/// any off-store verifier can reproduce.
pub fn derive_key(args: &DeriveKeyArgs) -> anyhow::Result<()> {
    let key = RecordKey::derive(&args.subject, &args.category);
    println!("{}", serde_json::json!({ "key": key.to_hex() }));
    Ok(())
}
