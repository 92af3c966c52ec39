// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration, including loading and saving
//! tuning values to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[scroll]` - Scroll-to-top threshold and scroll throttling
//! - `[counters]` - Statistic counter animation timing
//! - `[reveal]` - Scroll reveal observation and stagger
//! - `[toasts]` - Notification timing
//! - `[filter]` - Event search debounce
//!
//! Every field is optional; missing values fall back to [`defaults`] and
//! out-of-range values are clamped by the accessor methods.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NEXUS_SITE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nexus_site::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Scroll-to-top settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Offset in pixels past which the control appears.
    #[serde(default = "default_scroll_threshold", skip_serializing_if = "Option::is_none")]
    pub threshold_px: Option<f64>,

    /// Throttle window for scroll events in milliseconds (0 disables).
    #[serde(default = "default_scroll_throttle", skip_serializing_if = "Option::is_none")]
    pub throttle_ms: Option<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_scroll_threshold(),
            throttle_ms: default_scroll_throttle(),
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn threshold(&self) -> f64 {
        let threshold = self
            .threshold_px
            .filter(|px| !px.is_nan())
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD_PX);
        threshold.clamp(MIN_SCROLL_THRESHOLD_PX, MAX_SCROLL_THRESHOLD_PX)
    }

    #[must_use]
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(
            self.throttle_ms
                .unwrap_or(DEFAULT_SCROLL_THROTTLE_MS)
                .min(MAX_SCROLL_THROTTLE_MS),
        )
    }
}

/// Statistic counter animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountersConfig {
    /// Total animation duration in milliseconds.
    #[serde(default = "default_counter_duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Frame interval in milliseconds.
    #[serde(default = "default_counter_tick", skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,

    /// Intersection ratio that starts the animation (0.0 to 1.0).
    #[serde(
        default = "default_counter_visibility",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f64>,
}

impl Default for CountersConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
            tick_ms: default_counter_tick(),
            visibility_threshold: default_counter_visibility(),
        }
    }
}

impl CountersConfig {
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(
            self.tick_ms
                .unwrap_or(DEFAULT_COUNTER_TICK_MS)
                .max(MIN_COUNTER_TICK_MS),
        )
    }

    /// Animation duration, never shorter than a single tick.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let millis = self
            .duration_ms
            .unwrap_or(DEFAULT_COUNTER_DURATION_MS)
            .min(MAX_COUNTER_DURATION_MS);
        Duration::from_millis(millis).max(self.tick())
    }

    #[must_use]
    pub fn visibility_threshold(&self) -> f64 {
        clamp_ratio(
            self.visibility_threshold
                .unwrap_or(DEFAULT_COUNTER_VISIBILITY_THRESHOLD),
        )
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Intersection ratio that reveals an element (0.0 to 1.0).
    #[serde(
        default = "default_reveal_visibility",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f64>,

    /// Bottom root margin in pixels; negative values shrink the viewport.
    #[serde(
        default = "default_reveal_bottom_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom_margin_px: Option<f64>,

    /// Number of stagger buckets.
    #[serde(default = "default_reveal_buckets", skip_serializing_if = "Option::is_none")]
    pub stagger_buckets: Option<u32>,

    /// Delay per stagger bucket in milliseconds.
    #[serde(default = "default_reveal_step", skip_serializing_if = "Option::is_none")]
    pub stagger_step_ms: Option<u64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_reveal_visibility(),
            bottom_margin_px: default_reveal_bottom_margin(),
            stagger_buckets: default_reveal_buckets(),
            stagger_step_ms: default_reveal_step(),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn visibility_threshold(&self) -> f64 {
        clamp_ratio(
            self.visibility_threshold
                .unwrap_or(DEFAULT_REVEAL_VISIBILITY_THRESHOLD),
        )
    }

    #[must_use]
    pub fn bottom_margin(&self) -> f64 {
        let margin = self
            .bottom_margin_px
            .filter(|px| !px.is_nan())
            .unwrap_or(DEFAULT_REVEAL_BOTTOM_MARGIN_PX);
        margin.clamp(-MAX_REVEAL_BOTTOM_MARGIN_PX, MAX_REVEAL_BOTTOM_MARGIN_PX)
    }

    #[must_use]
    pub fn stagger_buckets(&self) -> u32 {
        self.stagger_buckets
            .unwrap_or(DEFAULT_REVEAL_STAGGER_BUCKETS)
            .clamp(1, MAX_REVEAL_STAGGER_BUCKETS)
    }

    #[must_use]
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(
            self.stagger_step_ms
                .unwrap_or(DEFAULT_REVEAL_STAGGER_STEP_MS)
                .min(MAX_REVEAL_STAGGER_STEP_MS),
        )
    }
}

/// Toast notification timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    #[serde(default = "default_toast_show_delay", skip_serializing_if = "Option::is_none")]
    pub show_delay_ms: Option<u64>,

    #[serde(
        default = "default_toast_auto_dismiss",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u64>,

    #[serde(
        default = "default_toast_hide_transition",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_transition_ms: Option<u64>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: default_toast_show_delay(),
            auto_dismiss_ms: default_toast_auto_dismiss(),
            hide_transition_ms: default_toast_hide_transition(),
        }
    }
}

impl ToastsConfig {
    #[must_use]
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(
            self.show_delay_ms
                .unwrap_or(DEFAULT_TOAST_SHOW_DELAY_MS)
                .min(MAX_TOAST_SHOW_DELAY_MS),
        )
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(
            self.auto_dismiss_ms
                .unwrap_or(DEFAULT_TOAST_AUTO_DISMISS_MS)
                .min(MAX_TOAST_AUTO_DISMISS_MS),
        )
    }

    #[must_use]
    pub fn hide_transition(&self) -> Duration {
        Duration::from_millis(
            self.hide_transition_ms
                .unwrap_or(DEFAULT_TOAST_HIDE_TRANSITION_MS)
                .min(MAX_TOAST_HIDE_TRANSITION_MS),
        )
    }
}

/// Event filter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Debounce window for search input in milliseconds (0 disables).
    #[serde(
        default = "default_search_debounce",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_debounce_ms: Option<u64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce(),
        }
    }
}

impl FilterConfig {
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(
            self.search_debounce_ms
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
                .min(MAX_SEARCH_DEBOUNCE_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub counters: CountersConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub filter: FilterConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

fn default_scroll_threshold() -> Option<f64> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

fn default_scroll_throttle() -> Option<u64> {
    Some(DEFAULT_SCROLL_THROTTLE_MS)
}

fn default_counter_duration() -> Option<u64> {
    Some(DEFAULT_COUNTER_DURATION_MS)
}

fn default_counter_tick() -> Option<u64> {
    Some(DEFAULT_COUNTER_TICK_MS)
}

fn default_counter_visibility() -> Option<f64> {
    Some(DEFAULT_COUNTER_VISIBILITY_THRESHOLD)
}

fn default_reveal_visibility() -> Option<f64> {
    Some(DEFAULT_REVEAL_VISIBILITY_THRESHOLD)
}

fn default_reveal_bottom_margin() -> Option<f64> {
    Some(DEFAULT_REVEAL_BOTTOM_MARGIN_PX)
}

fn default_reveal_buckets() -> Option<u32> {
    Some(DEFAULT_REVEAL_STAGGER_BUCKETS)
}

fn default_reveal_step() -> Option<u64> {
    Some(DEFAULT_REVEAL_STAGGER_STEP_MS)
}

fn default_toast_show_delay() -> Option<u64> {
    Some(DEFAULT_TOAST_SHOW_DELAY_MS)
}

fn default_toast_auto_dismiss() -> Option<u64> {
    Some(DEFAULT_TOAST_AUTO_DISMISS_MS)
}

fn default_toast_hide_transition() -> Option<u64> {
    Some(DEFAULT_TOAST_HIDE_TRANSITION_MS)
}

fn default_search_debounce() -> Option<u64> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("warning-config-load".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
