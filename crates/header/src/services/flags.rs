//! Persisted key/value flags
//!
//! Flags are small string values that survive reloads. The header only uses
//! the dark-mode flag, stored as `"on"` / `"off"`.

use anyhow::{Context, Result};
use log::warn;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Key under which the dark-mode preference is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// Preferences filename in the ZinZen config directory
pub const PREFERENCES_FILE: &str = "preferences.json";

const FLAG_ON: &str = "on";
const FLAG_OFF: &str = "off";

/// Stored representation of a boolean flag
pub fn flag_value(enabled: bool) -> &'static str {
    if enabled { FLAG_ON } else { FLAG_OFF }
}

/// Read the persisted dark-mode preference (off when unset)
pub fn load_dark_mode(flags: &dyn FlagStore) -> bool {
    flags.get_flag(DARK_MODE_KEY).as_deref() == Some(FLAG_ON)
}

/// Trait for persisted flag storage
pub trait FlagStore: Send + Sync {
    /// Persist `value` under `key`
    fn set_flag(&self, key: &str, value: &str) -> Result<()>;

    /// Read a flag, if it was ever set
    fn get_flag(&self, key: &str) -> Option<String>;
}

/// In-memory implementation of FlagStore
///
/// Keeps a write log so callers can inspect every persisted change.
#[derive(Debug, Default)]
pub struct InMemoryFlagStore {
    values: RwLock<HashMap<String, String>>,
    writes: RwLock<Vec<(String, String)>>,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far as (key, value), oldest first
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FlagStore for InMemoryFlagStore {
    fn set_flag(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self.writes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn get_flag(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

/// Flag store persisted as a JSON object on disk
pub struct FileFlagStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileFlagStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. An unreadable file is logged and
    /// treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = if path.exists() {
            match config::load_json_file::<BTreeMap<String, String>>(&path) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable flag file: {:#}", e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// Open the store in the ZinZen config directory
    pub fn open_default() -> Result<Self> {
        let path = config::config_path(PREFERENCES_FILE)
            .context("Could not determine config directory")?;
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagStore for FileFlagStore {
    fn set_flag(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        config::save_json_file(&self.path, &*values)
    }

    fn get_flag(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flag_value() {
        assert_eq!(flag_value(true), "on");
        assert_eq!(flag_value(false), "off");
    }

    #[test]
    fn test_load_dark_mode() {
        let flags = InMemoryFlagStore::new();
        assert!(!load_dark_mode(&flags));

        flags.set_flag(DARK_MODE_KEY, "on").unwrap();
        assert!(load_dark_mode(&flags));

        flags.set_flag(DARK_MODE_KEY, "off").unwrap();
        assert!(!load_dark_mode(&flags));
        assert_eq!(flags.writes().len(), 2);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(PREFERENCES_FILE);

        let store = FileFlagStore::open(&path);
        assert_eq!(store.get_flag(DARK_MODE_KEY), None);
        store.set_flag(DARK_MODE_KEY, "on").unwrap();

        let reopened = FileFlagStore::open(&path);
        assert_eq!(reopened.get_flag(DARK_MODE_KEY).as_deref(), Some("on"));
        assert!(load_dark_mode(&reopened));
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json").unwrap();

        let store = FileFlagStore::open(&path);
        assert_eq!(store.get_flag(DARK_MODE_KEY), None);

        store.set_flag(DARK_MODE_KEY, "off").unwrap();
        assert_eq!(FileFlagStore::open(&path).get_flag(DARK_MODE_KEY).as_deref(), Some("off"));
    }
}
