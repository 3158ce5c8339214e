//! Configuration loading for ZinZen frontends
//!
//! Provides utilities for reading and writing JSON files in the shared
//! ZinZen config directory (~/.config/zinzen/).
//!
//! Call [`init`] at application startup to bootstrap the config directory.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Name of the application directory under the platform config dir
const APP_DIR: &str = "zinzen";

/// Initialize the ZinZen config directory.
///
/// Creates ~/.config/zinzen/ if it doesn't exist.
/// Call this once at application startup.
pub fn init() -> Result<PathBuf> {
    ensure_config_dir()
}

/// Get the ZinZen config directory (~/.config/zinzen/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Get the path to a config file within the ZinZen config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Load and parse a JSON config file from the ZinZen config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("Could not determine config directory")?;
    load_json_file(&path)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Check if a config file exists in the ZinZen config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.exists())
}

/// Ensure the ZinZen config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Save a value as pretty-printed JSON to an arbitrary path
///
/// Parent directories are created as needed.
pub fn save_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("zinzen"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path("preferences.json");
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("zinzen/preferences.json"));
    }

    #[test]
    fn test_save_and_load_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("flags.json");

        let mut flags = BTreeMap::new();
        flags.insert("darkMode".to_string(), "on".to_string());
        save_json_file(&path, &flags).unwrap();

        let loaded: BTreeMap<String, String> = load_json_file(&path).unwrap();
        assert_eq!(loaded.get("darkMode").map(String::as_str), Some("on"));
    }

    #[test]
    fn test_config_exists_missing_file() {
        assert!(!config_exists("no-such-file-7f3a.json"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let result: Result<BTreeMap<String, String>> =
            load_json_file(&tmp.path().join("missing.json"));
        assert!(result.is_err());
    }
}
