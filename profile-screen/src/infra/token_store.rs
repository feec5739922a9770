//! Bearer token source
//!
//! The screen never holds on to a token. Every request asks the injected
//! [`TokenProvider`] again, so a token rotated between two calls is picked
//! up by the second one.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// Key the login flow stores the bearer token under.
pub const TOKEN_KEY: &str = "token";

/// Capability handing out the current bearer token.
pub trait TokenProvider: Send + Sync + Debug {
    /// Read the token synchronously. `None` when nobody is logged in.
    fn token(&self) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("token store is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Persistent string key-value store backed by a JSON object on disk.
///
/// A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), TokenStoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.into());
        self.write_all(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(BTreeMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.get(TOKEN_KEY) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                warn!(
                    "[TokenStore] Failed to read {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }
}
