// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! The site persists a single user preference (the theme) by key. The
//! [`PreferenceStore`] trait is the seam: hosts with their own storage (a
//! browser's local storage, a test harness) provide an implementation, and
//! [`FileStore`] keeps the values in a CBOR file for native hosts.
//!
//! # Path Resolution
//!
//! 1. Use `FileStore::open_in()` with explicit directory override
//! 2. Set `NEXUS_SITE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// Key/value storage for user preferences.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError>;
}

/// Serialized preference map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Preferences {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// In-memory store; values live as long as the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    prefs: Preferences,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.prefs.insert(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.prefs.insert(key, value);
        Ok(())
    }
}

/// CBOR-file-backed store. Every `set` rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
    prefs: Preferences,
}

impl FileStore {
    /// Opens the store at the default location.
    ///
    /// Returns the store and an optional warning. A missing file is not a
    /// warning; an unreadable or corrupted one is, and yields an empty store.
    pub fn open() -> (Self, Option<StateError>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<StateError>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        });

        let Some(file_path) = path.as_deref() else {
            return (
                Self {
                    path,
                    prefs: Preferences::default(),
                },
                Some(StateError::NoDataDir),
            );
        };

        let (prefs, warning) = match read_preferences(file_path) {
            Ok(prefs) => (prefs, None),
            Err(err) => (Preferences::default(), Some(err)),
        };

        (Self { path, prefs }, warning)
    }

    /// Returns the state file location, if one could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<(), StateError> {
        let path = self.path.as_deref().ok_or(StateError::NoDataDir)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StateError::CreateDir(e.to_string()))?;
        }

        let file = fs::File::create(path).map_err(|e| StateError::Write(e.to_string()))?;
        ciborium::into_writer(&self.prefs, BufWriter::new(file))
            .map_err(|e| StateError::Write(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.prefs.insert(key, value);
        self.flush()
    }
}

fn read_preferences(path: &Path) -> Result<Preferences, StateError> {
    if !path.exists() {
        return Ok(Preferences::default());
    }

    let file = fs::File::open(path).map_err(|e| StateError::Parse(e.to_string()))?;
    ciborium::from_reader(BufReader::new(file)).map_err(|e| StateError::Parse(e.to_string()))
}
