//! File-based preference store
//!
//! This module provides a file-based implementation of the
//! `PreferenceStorePort`, persisting each key as its own file under a base
//! directory in the application data directory. Writes go through a
//! temporary file and a rename, so a key's file is always either its
//! previous contents or the fully written new contents.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use nudge_core::ports::PreferenceStorePort;

pub const DEFAULT_PREFERENCES_DIR: &str = "preferences";

pub struct FilePreferenceStore {
    base_dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at the given directory.
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Create a store under `<app_data_dir>/preferences`.
    pub fn with_defaults(app_data_dir: PathBuf) -> Self {
        Self {
            base_dir: app_data_dir.join(DEFAULT_PREFERENCES_DIR),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names, so nothing that could escape the base dir.
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!("invalid preference key: {key:?}");
        }
        Ok(self.base_dir.join(key))
    }

    async fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .with_context(|| format!("create preferences dir failed: {}", self.base_dir.display()))
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("read preference failed: {}", path.display()))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_base_dir().await?;

        let tmp_path = self.base_dir.join(format!(".{key}.tmp"));
        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("write preference failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("commit preference failed: {}", path.display()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove preference failed: {}", path.display()))
            }
        }
    }
}
