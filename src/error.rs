// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    State(StateError),
}

/// Failures of the persisted preference store.
/// Each maps to a localized warning key so hosts can surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The data directory could not be determined.
    NoDataDir,
    /// The parent directory of the state file could not be created.
    CreateDir(String),
    /// The state file could not be written.
    Write(String),
    /// The state file exists but could not be decoded.
    Parse(String),
}

impl StateError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StateError::NoDataDir => "warning-state-path",
            StateError::CreateDir(_) => "warning-state-dir",
            StateError::Write(_) => "warning-state-write",
            StateError::Parse(_) => "warning-state-parse",
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::NoDataDir => write!(f, "No data directory available"),
            StateError::CreateDir(msg) => write!(f, "Cannot create state directory: {}", msg),
            StateError::Write(msg) => write!(f, "Cannot write state file: {}", msg),
            StateError::Parse(msg) => write!(f, "Cannot parse state file: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::State(e) => write!(f, "State Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StateError> for Error {
    fn from(err: StateError) -> Self {
        Error::State(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
