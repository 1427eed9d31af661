//! # Write Subcommands
//!
//! `init`, `add`, `update`, `revoke`, and `transfer`. Each loads the
//! snapshot, applies one registry operation as the `--as` caller, and
//! saves the snapshot back. The registry's all-or-nothing semantics carry
//! over: a rejected operation leaves the snapshot file untouched.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;
use tracing::info;

use attest_core::AccountId;
use attest_registry::RecordStore;

use crate::snapshot;

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the registry snapshot file to create.
    #[arg(long)]
    pub store: PathBuf,

    /// Initial authority. A fresh account is generated when omitted.
    #[arg(long)]
    pub authority: Option<AccountId>,

    /// Overwrite an existing snapshot file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments shared by the add and update subcommands.
#[derive(Args, Debug)]
pub struct ProofArgs {
    /// Path of the registry snapshot file.
    #[arg(long)]
    pub store: PathBuf,

    /// Authenticated caller identity.
    #[arg(long = "as", value_name = "ACCOUNT")]
    pub caller: AccountId,

    /// Subject identifier (may be pre-hashed by the caller).
    pub subject: String,

    /// Category label.
    pub category: String,

    /// Content digest (hash/CID) of the attested artifact.
    pub proof: String,
}

/// Arguments for the revoke subcommand.
#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Path of the registry snapshot file.
    #[arg(long)]
    pub store: PathBuf,

    /// Authenticated caller identity.
    #[arg(long = "as", value_name = "ACCOUNT")]
    pub caller: AccountId,

    /// Subject identifier.
    pub subject: String,

    /// Category label.
    pub category: String,
}

/// Arguments for the transfer subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Path of the registry snapshot file.
    #[arg(long)]
    pub store: PathBuf,

    /// Authenticated caller identity (the current authority).
    #[arg(long = "as", value_name = "ACCOUNT")]
    pub caller: AccountId,

    /// The incoming authority.
    pub new_authority: AccountId,
}

/// Create a new snapshot file.
pub fn init(args: &InitArgs) -> anyhow::Result<()> {
    if args.store.exists() && !args.force {
        bail!(
            "snapshot {} already exists (use --force to overwrite)",
            args.store.display()
        );
    }
    let authority = args.authority.unwrap_or_default();
    let store = RecordStore::new(authority).context("initializing registry")?;
    snapshot::save(&args.store, &store)?;
    info!(%authority, path = %args.store.display(), "registry initialized");
    println!(
        "{}",
        serde_json::json!({ "authority": authority.as_uuid() })
    );
    Ok(())
}

/// Publish a new attestation record.
pub fn add(args: &ProofArgs) -> anyhow::Result<()> {
    let mut store = snapshot::load(&args.store)?;
    store
        .create(args.caller, &args.subject, &args.category, args.proof.clone())
        .context("create rejected")?;
    snapshot::save(&args.store, &store)
}

/// Replace the proof hash of an active record.
pub fn update(args: &ProofArgs) -> anyhow::Result<()> {
    let mut store = snapshot::load(&args.store)?;
    store
        .update(args.caller, &args.subject, &args.category, args.proof.clone())
        .context("update rejected")?;
    snapshot::save(&args.store, &store)
}

/// Revoke an active record.
pub fn revoke(args: &RevokeArgs) -> anyhow::Result<()> {
    let mut store = snapshot::load(&args.store)?;
    store
        .revoke(args.caller, &args.subject, &args.category)
        .context("revoke rejected")?;
    snapshot::save(&args.store, &store)
}

/// Hand registry authority to a successor.
pub fn transfer(args: &TransferArgs) -> anyhow::Result<()> {
    let mut store = snapshot::load(&args.store)?;
    store
        .transfer_authority(args.caller, args.new_authority)
        .context("transfer rejected")?;
    snapshot::save(&args.store, &store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_store(dir: &tempfile::TempDir) -> (PathBuf, AccountId) {
        let path = dir.path().join("registry.json");
        let authority = AccountId::new();
        let args = InitArgs {
            store: path.clone(),
            authority: Some(authority),
            force: false,
        };
        init(&args).unwrap();
        (path, authority)
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = init_store(&dir);
        let again = InitArgs {
            store: path,
            authority: None,
            force: false,
        };
        assert!(init(&again).is_err());
    }

    #[test]
    fn test_add_then_revoke_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let (path, authority) = init_store(&dir);

        add(&ProofArgs {
            store: path.clone(),
            caller: authority,
            subject: "alice".into(),
            category: "math101".into(),
            proof: "QmHash1".into(),
        })
        .unwrap();

        revoke(&RevokeArgs {
            store: path.clone(),
            caller: authority,
            subject: "alice".into(),
            category: "math101".into(),
        })
        .unwrap();

        let store = snapshot::load(&path).unwrap();
        assert!(!store.get("alice", "math101").active);
        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn test_rejected_write_leaves_snapshot_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = init_store(&dir);

        let intruder = AccountId::new();
        let result = add(&ProofArgs {
            store: path.clone(),
            caller: intruder,
            subject: "alice".into(),
            category: "math101".into(),
            proof: "QmHash1".into(),
        });
        assert!(result.is_err());

        let store = snapshot::load(&path).unwrap();
        assert!(store.is_empty());
        assert!(store.events().is_empty());
    }
}
