//! In-memory storage backend for tests.
//!
//! Behaves like the filesystem backend but keeps everything in a map, logs
//! every call for assertions, and can be scripted to fail saves so the
//! error paths of callers are testable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use growth_core::{Error, Result, StoragePort};

/// One recorded storage operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCall {
    pub operation: &'static str,
    pub key: String,
}

/// In-memory [`StoragePort`] with a call log.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    call_log: Mutex<Vec<StorageCall>>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key before the store hydrates, as if a previous run
    /// had written it.
    pub fn seed(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Read the current value under a key without logging a call.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// All logged calls, in order.
    pub fn calls(&self) -> Vec<StorageCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of saves recorded for a key.
    pub fn save_count(&self, key: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == "save" && c.key == key)
            .count()
    }

    fn record(&self, operation: &'static str, key: &str) {
        self.call_log.lock().unwrap().push(StorageCall {
            operation,
            key: key.to_string(),
        });
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        self.record("load", key);
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        self.record("save", key);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("scripted save failure for {}", key)));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        storage.save("moods", "[]").await.unwrap();

        let loaded = storage.load("moods").await.unwrap();
        assert_eq!(loaded.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn absent_key_loads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("goals").await.unwrap(), None);
    }

    #[tokio::test]
    async fn scripted_failure_surfaces_as_storage_error() {
        let storage = MemoryStorage::new();
        storage.fail_saves(true);

        let err = storage.save("journal", "[]").await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[tokio::test]
    async fn call_log_tracks_operations_in_order() {
        let storage = MemoryStorage::new();
        storage.save("moods", "[]").await.unwrap();
        storage.load("moods").await.unwrap();
        storage.save("moods", "[1]").await.unwrap();

        let ops: Vec<&str> = storage.calls().iter().map(|c| c.operation).collect();
        assert_eq!(ops, vec!["save", "load", "save"]);
        assert_eq!(storage.save_count("moods"), 2);
    }
}
