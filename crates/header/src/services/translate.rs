//! Translation lookup

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Maps translation keys to display strings
pub trait Translator: Send + Sync {
    /// Display string for `key`
    fn translate(&self, key: &str) -> String;
}

/// Translator backed by a fixed key/value table
///
/// Missing keys translate to themselves, so untranslated labels still render.
/// Deserializes from a flat JSON object of key/value strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticTranslator {
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add one translation
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Parse a flat JSON object of key/value strings
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse translation table")
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
