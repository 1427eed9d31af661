//! # Snapshot File IO
//!
//! Loads and saves the registry as a JSON snapshot file. The snapshot is
//! the serde form of [`RecordStore`] — records keyed by hex record key,
//! the authority, and the full audit trail.

use std::fs;
use std::path::Path;

use anyhow::Context;

use attest_registry::RecordStore;

/// Load a registry snapshot from `path`.
pub fn load(path: &Path) -> anyhow::Result<RecordStore> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading registry snapshot {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing registry snapshot {}", path.display()))
}

/// Write a registry snapshot to `path`, replacing any existing file.
pub fn save(path: &Path, store: &RecordStore) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(store).context("serializing registry snapshot")?;
    fs::write(path, data)
        .with_context(|| format!("writing registry snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::AccountId;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        let authority = AccountId::new();
        let mut store = RecordStore::new(authority).unwrap();
        store
            .create(authority, "alice", "math101", "QmHash1")
            .unwrap();
        save(&path, &store).unwrap();

        let restored = load(&path).unwrap();
        assert_eq!(restored.authority(), authority);
        assert!(restored.verify("alice", "math101", "QmHash1"));
        assert_eq!(restored.events().len(), 1);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("absent.json")).is_err());
    }
}
