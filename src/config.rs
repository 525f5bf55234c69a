//! Host configuration for the demo binary.
//!
//! Settings live in `~/.segmented-counter/config.json`. A missing file means
//! defaults: the two counters of the sample screen (five blue segments, and
//! seven red segments starting at 2).

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::counter::layout::DEFAULT_SEGMENT_PADDING;
use crate::counter::style::{DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_SEGMENT_COLOR};
use crate::counter::{SegmentedCounter, DEFAULT_SEGMENT_COUNT};
use crate::error::{ConfigError, CounterResult};
use crate::geometry::Size;

/// The config directory name, relative to the home directory.
const CONFIG_DIR: &str = ".segmented-counter";

/// The config file name.
const CONFIG_FILE: &str = "config.json";

/// The log file name.
const LOG_FILE: &str = "segmented-counter.log";

/// Settings for one counter on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Label shown above the counter
    pub label: Option<String>,
    pub segment_count: usize,
    pub segment_padding: f64,
    pub border_color: Color,
    pub fill_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    /// Value applied after construction
    pub initial_value: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            label: None,
            segment_count: DEFAULT_SEGMENT_COUNT,
            segment_padding: DEFAULT_SEGMENT_PADDING,
            border_color: DEFAULT_SEGMENT_COLOR,
            fill_color: DEFAULT_SEGMENT_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            initial_value: 0,
        }
    }
}

impl CounterConfig {
    /// Build a counter from these settings, validating every property.
    pub fn build(&self, bounds: Size) -> CounterResult<SegmentedCounter> {
        let mut counter = SegmentedCounter::with_segment_count(bounds, self.segment_count)?;
        counter.set_segment_padding(self.segment_padding)?;
        counter.set_segment_border_width(self.border_width)?;
        counter.set_segment_corner_radius(self.corner_radius)?;
        counter.set_segment_border_color(self.border_color);
        counter.set_segment_fill_color(self.fill_color);
        counter.set_current_value(self.initial_value)?;
        Ok(counter)
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence
    pub log_level: String,
    pub counters: Vec<CounterConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            counters: vec![
                CounterConfig::default(),
                CounterConfig {
                    segment_count: 7,
                    border_color: Color::Red,
                    fill_color: Color::Red,
                    initial_value: 2,
                    ..CounterConfig::default()
                },
            ],
        }
    }
}

/// Where a loaded [`AppConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file existed at this path; built-in defaults apply
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::File(path) | ConfigSource::Defaults(path) => path,
        }
    }

    /// Log where the config came from. Call once the subscriber is installed.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => {
                tracing::info!(path = %path.display(), "loaded config file");
            }
            ConfigSource::Defaults(path) => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
            }
        }
    }
}

/// Locates, loads and saves the config file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Use `~/.segmented-counter`.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::with_dir(home.join(CONFIG_DIR)))
    }

    /// Use an explicit directory (tests, custom installs).
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.config_dir.join(LOG_FILE)
    }

    /// Load the config file, or defaults if it doesn't exist.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Like [`ConfigManager::load`], also reporting where the config came
    /// from. Loading runs before logging is set up, so callers log the
    /// source themselves afterwards.
    pub fn load_with_source(&self) -> Result<(AppConfig, ConfigSource), ConfigError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok((AppConfig::default(), ConfigSource::Defaults(path)));
        }

        let file = File::open(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        Ok((config, ConfigSource::File(path)))
    }

    /// Write `config` as pretty JSON, creating the directory if needed.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let path = self.config_path();
        let io_err = |source| ConfigError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.config_dir).map_err(io_err)?;
        let file = File::create(&path).map_err(io_err)?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config).map_err(|source| {
            ConfigError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CounterError;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_mirrors_sample_screen() {
        let config = AppConfig::default();
        assert_eq!(config.counters.len(), 2);
        assert_eq!(config.counters[0].segment_count, 5);
        assert_eq!(config.counters[1].segment_count, 7);
        assert_eq!(config.counters[1].initial_value, 2);
        assert_eq!(config.counters[1].fill_color, Color::Red);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("absent"));
        assert_eq!(manager.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("nested"));

        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        config.counters[0].label = Some("Effort".to_string());
        manager.save(&config).unwrap();

        assert!(manager.config_path().exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_dir(dir.path());
        fs::write(
            manager.config_path(),
            r#"{"counters": [{"segment_count": 3, "fill_color": "green"}]}"#,
        )
        .unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.counters.len(), 1);
        assert_eq!(config.counters[0].segment_count, 3);
        assert_eq!(config.counters[0].fill_color, Color::Green);
        assert_eq!(config.counters[0].segment_padding, DEFAULT_SEGMENT_PADDING);
    }

    #[test]
    fn test_load_reports_source() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_dir(dir.path());

        let (_, source) = manager.load_with_source().unwrap();
        assert_eq!(source, ConfigSource::Defaults(manager.config_path()));

        manager.save(&AppConfig::default()).unwrap();
        let (config, source) = manager.load_with_source().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::File(manager.config_path()));
        assert_eq!(source.path(), manager.config_path());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_dir(dir.path());
        fs::write(manager.config_path(), "{ not json").unwrap();

        assert!(matches!(manager.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_build_applies_settings() {
        let config = CounterConfig {
            segment_count: 7,
            segment_padding: 0.0,
            border_color: Color::Red,
            fill_color: Color::Yellow,
            border_width: 2.0,
            corner_radius: 0.0,
            initial_value: 2,
            label: None,
        };
        let counter = config.build(Size::new(70.0, 3.0)).unwrap();

        assert_eq!(counter.segment_count(), 7);
        assert_eq!(counter.current_value(), 2);
        assert_eq!(counter.segments()[1].fill(), Some(Color::Yellow));
        assert_eq!(counter.segments()[6].frame().x, 60.0);
        assert_eq!(counter.segment_border_width(), 2.0);
    }

    #[test]
    fn test_build_rejects_out_of_range_initial_value() {
        let config = CounterConfig {
            initial_value: 9,
            ..CounterConfig::default()
        };
        let err = config.build(Size::zero()).unwrap_err();
        assert!(matches!(err, CounterError::InvalidValue { value: 9, .. }));
    }
}
