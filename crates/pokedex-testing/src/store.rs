//! Preference store fixtures.

use pokedex_store::{Database, Error, KeyValueStore, MemoryStore, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Store that reads normally but refuses every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
    rejected_writes: AtomicUsize,
}

impl ReadOnlyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing the write rejection.
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .inner
            .set(key, value)
            .expect("memory store accepts writes");
        store
    }

    pub fn rejected_writes(&self) -> usize {
        self.rejected_writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        self.rejected_writes.fetch_add(1, Ordering::SeqCst);
        Err(Error::Unavailable(format!("write to {} rejected", key)))
    }
}

/// SQLite store in a temporary directory that lives as long as the fixture.
pub struct TempDatabase {
    dir: TempDir,
}

impl TempDatabase {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("pokedex.db")
    }

    /// Open (or reopen) the database, as a fresh process would.
    pub fn open(&self) -> anyhow::Result<Database> {
        Ok(Database::open(&self.path())?)
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
