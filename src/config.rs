//! Configuration file support for wheeldate.
//!
//! Configuration is loaded from `~/.config/wheeldate/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`WHEELDATE_CONFIG` selects the file)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheeldate/config.toml
//! [picker]
//! item_height = 50.0
//! visible_items = 5
//! convergence = 0.2
//! drag_ratio = 1.0
//! settle_distance = 1.0
//! year_span = 10
//!
//! [notifications]
//! desktop = false
//! toast_ttl_ms = 3000
//!
//! [input]
//! scroll_debounce_ms = 50
//! scroll_threshold = 1
//!
//! [frame]
//! tick_ms = 16
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::picker::calendar::MAX_YEAR_SPAN;
use crate::log;
use crate::notification::NotificationConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Wheel geometry and motion tuning
    pub picker: PickerConfig,

    /// Toast and desktop notification settings
    pub notifications: NotificationConfig,

    /// Host input tuning
    pub input: InputConfig,

    /// Render clock
    pub frame: FrameConfig,
}

/// Wheel geometry and motion tuning.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Height of one item, in pixels
    pub item_height: f64,

    /// Number of items visible in each wheel; the middle one is the selection
    pub visible_items: usize,

    /// Fraction of the remaining distance covered per frame
    pub convergence: f64,

    /// Wheel pixels moved per pointer pixel while dragging
    pub drag_ratio: f64,

    /// Remaining distance below which a wheel lands exactly on its slot
    pub settle_distance: f64,

    /// Years offered either side of the current year, at most 1000
    pub year_span: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_height: 50.0,
            visible_items: 5,
            convergence: 0.2,
            drag_ratio: 1.0,
            settle_distance: 1.0,
            year_span: 10,
        }
    }
}

impl PickerConfig {
    /// Pull out-of-range values back to something the wheels can run with.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.item_height.is_finite() && self.item_height >= 1.0) {
            self.item_height = defaults.item_height;
        }
        if self.visible_items == 0 {
            self.visible_items = defaults.visible_items;
        }
        if !(self.convergence > 0.0 && self.convergence <= 1.0) {
            self.convergence = defaults.convergence;
        }
        if !self.drag_ratio.is_finite() {
            self.drag_ratio = defaults.drag_ratio;
        }
        if !(self.settle_distance.is_finite() && self.settle_distance >= 0.0) {
            self.settle_distance = defaults.settle_distance;
        }
        self.year_span = self.year_span.min(MAX_YEAR_SPAN);
        self
    }
}

/// Host input tuning.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Window in which scroll events are merged into notches
    pub scroll_debounce_ms: u64,

    /// Scroll events per notch
    pub scroll_threshold: i32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            scroll_debounce_ms: 50,
            scroll_threshold: 1,
        }
    }
}

/// Render clock.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FrameConfig {
    /// Milliseconds between animation frames
    pub tick_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

impl Config {
    /// Load configuration from `WHEELDATE_CONFIG` or the default location.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    /// An explicit `--config` path goes through [`Config::read_from`] instead,
    /// where failures are reported.
    pub fn load() -> Self {
        let config_path = std::env::var("WHEELDATE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_path());

        if !config_path.exists() {
            return Self::default();
        }

        match Self::read_from(&config_path) {
            Ok(config) => {
                log::log(&format!("Loaded config from {}", config_path.display()));
                config
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                log::log(&format!("Config fallback to defaults: {}", e));
                Self::default()
            }
        }
    }

    /// Read and parse a specific config file.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(contents)?;
        config.picker = config.picker.sanitized();
        config.frame.tick_ms = config.frame.tick_ms.max(1);
        config.input.scroll_threshold = config.input.scroll_threshold.max(1);
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheeldate")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, desktop_notify: bool) -> Self {
        if desktop_notify {
            self.notifications.desktop = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.picker.item_height, 50.0);
        assert_eq!(config.picker.visible_items, 5);
        assert_eq!(config.picker.convergence, 0.2);
        assert_eq!(config.picker.drag_ratio, 1.0);
        assert_eq!(config.picker.year_span, 10);
        assert_eq!(config.frame.tick_ms, 16);
        assert!(!config.notifications.desktop);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [picker]
            item_height = 40.0
            convergence = 0.35
            year_span = 5

            [notifications]
            desktop = true
            toast_ttl_ms = 1500

            [frame]
            tick_ms = 33
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.picker.item_height, 40.0);
        assert_eq!(config.picker.convergence, 0.35);
        assert_eq!(config.picker.year_span, 5);
        // Unset keys keep their defaults
        assert_eq!(config.picker.visible_items, 5);
        assert!(config.notifications.desktop);
        assert_eq!(config.notifications.toast_ttl_ms, 1500);
        assert_eq!(config.frame.tick_ms, 33);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let toml = r#"
            [picker]
            item_height = 0.0
            visible_items = 0
            convergence = 1.5
            settle_distance = -2.0

            [input]
            scroll_threshold = 0
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.picker, PickerConfig::default());
        assert_eq!(config.input.scroll_threshold, 1);
    }

    #[test]
    fn test_huge_year_span_is_capped() {
        let config = Config::parse("[picker]\nyear_span = 3000000000\n").unwrap();
        assert_eq!(config.picker.year_span, MAX_YEAR_SPAN);

        let today = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let picker = crate::picker::WheelPicker::new(today, config.picker);
        assert_eq!(picker.selected().year, 2024);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::parse("[picker\nitem_height = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::read_from(Path::new("/nonexistent/wheeldate.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_cli_override() {
        let config = Config::default().with_overrides(true);
        assert!(config.notifications.desktop);
    }
}
