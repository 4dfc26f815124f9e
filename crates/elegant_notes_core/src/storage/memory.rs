//! In-memory storage backend.
//!
//! # Responsibility
//! - Provide a zero-setup backend for fresh sessions and tests.

use super::{StorageBackend, StorageResult};
use std::collections::HashMap;

/// HashMap-backed key-value store. Contents do not survive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a backend pre-populated with one entry.
    ///
    /// Test helper for hydration scenarios.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::StorageBackend;

    #[test]
    fn write_then_read_round_trips() {
        let mut storage = MemoryStorage::new();
        storage.write("k", "v1").unwrap();
        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.read("missing").unwrap(), None);
    }
}
