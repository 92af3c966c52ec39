// SPDX-License-Identifier: MPL-2.0
//! Site color theme.

use serde::{Deserialize, Serialize};

/// Color theme of the site. Only the two explicit modes exist; the OS
/// preference is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon shown on the toggle: the mode a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }

    /// Body class for this mode.
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ThemeMode::Light => None,
            ThemeMode::Dark => Some("dark-mode"),
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Reads a stored preference. Only the exact string `"dark"` selects
    /// dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}
