//! Configuration persistence.
//!
//! A narrow save/load seam standing in for browser local storage. The
//! configurator writes through on every change and treats failures as
//! non-fatal; the in-memory configuration stays the source of truth.

use shelfkit_core::StorageError;
use std::path::{Path, PathBuf};

use crate::model::Configuration;
use crate::serialization::{deserialize, serialize};

/// Persistence sink for the active configuration.
pub trait ConfigurationStore {
    /// Load the saved configuration, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Configuration>, StorageError>;

    /// Replace the saved configuration.
    fn save(&mut self, configuration: &Configuration) -> Result<(), StorageError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigurationStore for FileStore {
    fn load(&self) -> Result<Option<Configuration>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(deserialize(&content)?))
    }

    fn save(&mut self, configuration: &Configuration) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serialize(configuration))?;
        tracing::trace!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

/// In-process store. Can be told to fail every call, which is how tests
/// exercise an unavailable sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Configuration>,
    saves: usize,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already saved configuration.
    pub fn with_saved(configuration: Configuration) -> Self {
        Self {
            saved: Some(configuration),
            ..Self::default()
        }
    }

    /// A store whose every load and save fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<&Configuration> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ConfigurationStore for MemoryStore {
    fn load(&self) -> Result<Option<Configuration>, StorageError> {
        if self.unavailable {
            return Err(StorageError::unavailable("memory store disabled"));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, configuration: &Configuration) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::unavailable("memory store disabled"));
        }
        self.saved = Some(configuration.clone());
        self.saves += 1;
        Ok(())
    }
}
