// Configuration loading and parsing (config/settings.toml).
//
// Every field carries a serde default so a missing file or a partial file
// still yields a working configuration; validation only rejects values
// that would make the timers or grouping nonsensical.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Location of the settings file relative to the working directory.
const SETTINGS_PATH: &str = "config/settings.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub group: GroupConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Timing and default toggles for the draw engine.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawConfig {
    /// How often the cosmetic name cycling ticks, in milliseconds.
    #[serde(default = "default_cycle_tick_ms")]
    pub cycle_tick_ms: u64,
    /// Lower bound of the spin duration window, in milliseconds.
    #[serde(default = "default_spin_min_ms")]
    pub spin_min_ms: u64,
    /// Upper bound of the spin duration window, in milliseconds.
    #[serde(default = "default_spin_max_ms")]
    pub spin_max_ms: u64,
    /// Whether past winners stay eligible by default.
    #[serde(default)]
    pub allow_repeats: bool,
    /// Whether the celebration banner is shown by default.
    #[serde(default = "default_celebration")]
    pub celebration: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// Initial target group size.
    #[serde(default = "default_group_size")]
    pub default_size: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Destination directory for exported files. When omitted, the user's
    /// download directory is used (falling back to the working directory).
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_cycle_tick_ms() -> u64 {
    50
}

fn default_spin_min_ms() -> u64 {
    2000
}

fn default_spin_max_ms() -> u64 {
    3000
}

fn default_celebration() -> bool {
    true
}

fn default_group_size() -> usize {
    4
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            cycle_tick_ms: default_cycle_tick_ms(),
            spin_min_ms: default_spin_min_ms(),
            spin_max_ms: default_spin_max_ms(),
            allow_repeats: false,
            celebration: default_celebration(),
        }
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        GroupConfig {
            default_size: default_group_size(),
        }
    }
}

impl DrawConfig {
    pub fn cycle_tick(&self) -> Duration {
        Duration::from_millis(self.cycle_tick_ms)
    }

    pub fn spin_window(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.spin_min_ms),
            Duration::from_millis(self.spin_max_ms),
        )
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/settings.toml` under `base_dir`.
///
/// A missing file is not an error; the built-in defaults apply. A present
/// but unreadable/unparsable file is an error, so a typo never silently
/// falls back to defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(SETTINGS_PATH);
    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?
    } else {
        Config::default()
    };
    validate(&config)?;
    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::ReadError {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draw.cycle_tick_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "draw.cycle_tick_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.draw.spin_min_ms > config.draw.spin_max_ms {
        return Err(ConfigError::ValidationError {
            field: "draw.spin_min_ms".into(),
            message: format!(
                "must not exceed spin_max_ms ({} > {})",
                config.draw.spin_min_ms, config.draw.spin_max_ms
            ),
        });
    }

    if config.group.default_size == 0 {
        return Err(ConfigError::ValidationError {
            field: "group.default_size".into(),
            message: "must be at least 1".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_settings(dir: &Path, contents: &str) {
        let config_dir = dir.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("settings.toml"), contents).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draw.cycle_tick_ms, 50);
        assert_eq!(config.draw.spin_min_ms, 2000);
        assert_eq!(config.draw.spin_max_ms, 3000);
        assert!(!config.draw.allow_repeats);
        assert!(config.draw.celebration);
        assert_eq!(config.group.default_size, 4);
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn partial_file_fills_gaps_with_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(
            tmp.path(),
            "[draw]\nallow_repeats = true\n\n[group]\ndefault_size = 6\n",
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert!(config.draw.allow_repeats);
        assert_eq!(config.draw.cycle_tick_ms, 50);
        assert_eq!(config.group.default_size, 6);
    }

    #[test]
    fn export_dir_is_read() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(tmp.path(), "[export]\ndir = \"/tmp/groups\"\n");
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.export.dir.as_deref(), Some(Path::new("/tmp/groups")));
    }

    #[test]
    fn rejects_zero_cycle_tick() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(tmp.path(), "[draw]\ncycle_tick_ms = 0\n");
        let err = load_config_from(tmp.path()).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "draw.cycle_tick_ms");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn rejects_inverted_spin_window() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(tmp.path(), "[draw]\nspin_min_ms = 5000\nspin_max_ms = 100\n");
        let err = load_config_from(tmp.path()).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "draw.spin_min_ms");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn rejects_zero_group_size() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(tmp.path(), "[group]\ndefault_size = 0\n");
        let err = load_config_from(tmp.path()).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "group.default_size");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = tempfile::tempdir().unwrap();
        write_settings(tmp.path(), "this is not valid [[[ toml");
        let err = load_config_from(tmp.path()).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("settings.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }
    }

    #[test]
    fn spin_window_accessor_converts_to_durations() {
        let config = Config::default();
        let (min, max) = config.draw.spin_window();
        assert_eq!(min, Duration::from_millis(2000));
        assert_eq!(max, Duration::from_millis(3000));
        assert_eq!(config.draw.cycle_tick(), Duration::from_millis(50));
    }
}
