//! Configuration settings for agenda.
//!
//! Settings are loaded from `~/.agenda/config.yaml` (or the file given with
//! `--config`). A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::AgendaError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Store locations and load behaviour.
    pub storage: StorageConfig,
    /// Priority colors.
    pub theme: ThemeConfig,
    /// Completion chart settings.
    pub chart: ChartConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// What to do with a stored line that does not parse while loading a store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLinePolicy {
    /// Leave the line out and report it.
    #[default]
    Skip,
    /// Fail the whole operation.
    Abort,
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Active store; defaults to `~/.agenda/todo.txt`.
    pub todo_file: Option<PathBuf>,
    /// Archive store; defaults to `~/.agenda/done.txt`.
    pub archive_file: Option<PathBuf>,
    /// Handling of unparsable lines.
    pub on_invalid_line: InvalidLinePolicy,
}

/// Colors for the four styled priorities.
///
/// Values are color names understood by the terminal renderer
/// (`red`, `bright blue`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub band_a: String,
    pub band_b: String,
    pub band_c: String,
    pub band_d: String,
    /// Render priority `(A)` in bold as well.
    pub bold_band_a: bool,
}

/// Completion chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the longest bar in characters.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_bar_width() -> usize {
    40
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            band_a: "red".to_string(),
            band_b: "yellow".to_string(),
            band_c: "cyan".to_string(),
            band_d: "green".to_string(),
            bold_band_a: true,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, AgendaError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AgendaError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            AgendaError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Active store path: the configured override or the default under `paths`.
    #[must_use]
    pub fn todo_file(&self, paths: &Paths) -> PathBuf {
        self.storage
            .todo_file
            .clone()
            .unwrap_or_else(|| paths.todo_file.clone())
    }

    /// Archive store path: the configured override or the default under `paths`.
    #[must_use]
    pub fn archive_file(&self, paths: &Paths) -> PathBuf {
        self.storage
            .archive_file
            .clone()
            .unwrap_or_else(|| paths.archive_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.storage.on_invalid_line, InvalidLinePolicy::Skip);
        assert_eq!(config.theme.band_a, "red");
        assert!(config.theme.bold_band_a);
        assert_eq!(config.chart.bar_width, 40);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert!(config.storage.todo_file.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
general:
  default_output: json
  color: never
storage:
  archive_file: /srv/tasks/done.txt
  on_invalid_line: abort
theme:
  band_b: magenta
  bold_band_a: false
chart:
  bar_width: 20
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.general.default_output, OutputFormat::Json);
        assert_eq!(loaded.general.color, ColorSetting::Never);
        assert_eq!(loaded.storage.archive_file, Some(PathBuf::from("/srv/tasks/done.txt")));
        assert_eq!(loaded.storage.on_invalid_line, InvalidLinePolicy::Abort);
        assert_eq!(loaded.theme.band_b, "magenta");
        assert!(!loaded.theme.bold_band_a);
        assert_eq!(loaded.chart.bar_width, 20);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
storage:
  todo_file: /srv/tasks/todo.txt
theme:
  band_c: blue
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(
            config.storage.todo_file,
            Some(PathBuf::from("/srv/tasks/todo.txt"))
        );
        assert_eq!(config.theme.band_c, "blue");
        // Defaults should be used for missing fields
        assert_eq!(config.theme.band_a, "red");
        assert_eq!(config.storage.on_invalid_line, InvalidLinePolicy::Skip);
        assert_eq!(config.chart.bar_width, 40);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "storage:\n  on_invalid_line: explode\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, AgendaError::Config(_)));
    }

    #[test]
    fn test_store_paths_resolve_overrides() {
        let paths = Paths::with_root(PathBuf::from("/home/me/.agenda"));
        let mut config = Config::default();

        assert_eq!(config.todo_file(&paths), paths.todo_file);
        assert_eq!(config.archive_file(&paths), paths.archive_file);

        config.storage.archive_file = Some(PathBuf::from("/tmp/done.txt"));
        assert_eq!(config.archive_file(&paths), PathBuf::from("/tmp/done.txt"));
    }
}
