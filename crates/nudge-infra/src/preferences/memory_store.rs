//! In-memory preference store
//!
//! A mutex-backed fake of the `PreferenceStorePort` for tests. Individual
//! operations can be made to fail so the persistence error paths of the
//! wizard and the home gate can be exercised without touching the disk.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use nudge_core::ports::PreferenceStorePort;

#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
    fail_remove: AtomicBool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail until cleared.
    pub fn fail_gets(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set` fail until cleared.
    pub fn fail_sets(&self, fail: bool) {
        self.fail_set.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `remove` fail until cleared.
    pub fn fail_removes(&self, fail: bool) {
        self.fail_remove.store(fail, Ordering::SeqCst);
    }

    /// Synchronous peek for assertions.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl PreferenceStorePort for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_get.load(Ordering::SeqCst) {
            anyhow::bail!("injected get failure for {key:?}");
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_set.load(Ordering::SeqCst) {
            anyhow::bail!("injected set failure for {key:?}");
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.fail_remove.load(Ordering::SeqCst) {
            anyhow::bail!("injected remove failure for {key:?}");
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
