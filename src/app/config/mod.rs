// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[header]` - Sticky header scroll thresholds and nav scroll offset
//! - `[notifications]` - Toast entrance, auto-dismiss and exit timings
//! - `[content]` - Optional page content file
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! let (config, _warning) = config::load();
//! let timing = config.notifications.timing();
//! assert!(timing.auto_dismiss > timing.entrance_delay);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications::Timing;
use crate::ui::state::page::HeaderThresholds;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Initial theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Sticky header behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeaderConfig {
    #[serde(default)]
    pub scrolled_threshold: Option<f32>,

    #[serde(default)]
    pub hide_threshold: Option<f32>,

    /// Space left above a section when navigating to it.
    #[serde(default)]
    pub nav_offset: Option<f32>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: Some(DEFAULT_SCROLLED_THRESHOLD),
            hide_threshold: Some(DEFAULT_HIDE_THRESHOLD),
            nav_offset: Some(DEFAULT_NAV_OFFSET),
        }
    }
}

impl HeaderConfig {
    /// Resolves the configured thresholds, clamped to the supported range.
    #[must_use]
    pub fn thresholds(&self) -> HeaderThresholds {
        let clamp = |value: Option<f32>, default: f32| {
            value.unwrap_or(default).clamp(0.0, MAX_HEADER_THRESHOLD)
        };
        HeaderThresholds {
            scrolled: clamp(self.scrolled_threshold, DEFAULT_SCROLLED_THRESHOLD),
            hide: clamp(self.hide_threshold, DEFAULT_HIDE_THRESHOLD),
        }
    }

    #[must_use]
    pub fn nav_offset(&self) -> f32 {
        self.nav_offset
            .unwrap_or(DEFAULT_NAV_OFFSET)
            .clamp(0.0, MAX_HEADER_THRESHOLD)
    }
}

/// Toast lifecycle timings, in milliseconds.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub entrance_delay_ms: Option<u64>,

    #[serde(default)]
    pub auto_dismiss_ms: Option<u64>,

    #[serde(default)]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: Some(DEFAULT_ENTRANCE_DELAY_MS),
            auto_dismiss_ms: Some(DEFAULT_AUTO_DISMISS_MS),
            exit_transition_ms: Some(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl NotificationsConfig {
    /// Resolves the configured timings, clamped to the supported range.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let entrance = self
            .entrance_delay_ms
            .unwrap_or(DEFAULT_ENTRANCE_DELAY_MS)
            .min(MAX_TRANSITION_MS);
        let auto_dismiss = self
            .auto_dismiss_ms
            .unwrap_or(DEFAULT_AUTO_DISMISS_MS)
            .clamp(MIN_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS);
        let exit = self
            .exit_transition_ms
            .unwrap_or(DEFAULT_EXIT_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);

        Timing {
            entrance_delay: Duration::from_millis(entrance),
            auto_dismiss: Duration::from_millis(auto_dismiss),
            exit_transition: Duration::from_millis(exit),
        }
    }
}

/// Page content source.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// TOML file describing the page; the built-in page is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show the user.
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
                    tracing::warn!(path = %path.display(), %err, "failed to load settings, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
