//! Global configuration for panject
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/panject/config.yaml

use anyhow::{Context, Result};
use panject_core::DEFAULT_GRAB_TOLERANCE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay defaults
    pub display: DisplayConfig,
    /// Pointer and timing settings
    pub interaction: InteractionConfig,
}

impl Config {
    /// Clamp all sections into their supported ranges
    pub fn validate(&mut self) {
        self.interaction.validate();
    }
}

/// Display configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the ABCD corner badges at startup (updated when toggled)
    pub show_corner_labels: bool,
}

/// Interaction configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Max pixel distance between pointer cell and control point to start a drag
    pub grab_tolerance: f32,
    /// How long the "Threshold" flash stays visible
    pub threshold_flash_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grab_tolerance: DEFAULT_GRAB_TOLERANCE,
            threshold_flash_ms: 1000,
        }
    }
}

impl InteractionConfig {
    pub const MIN_GRAB_TOLERANCE: f32 = 1.0;
    pub const MAX_GRAB_TOLERANCE: f32 = 64.0;
    pub const MIN_FLASH_MS: u64 = 100;
    pub const MAX_FLASH_MS: u64 = 10_000;

    /// Clamp values to supported ranges
    pub fn validate(&mut self) {
        if !self.grab_tolerance.is_finite() {
            self.grab_tolerance = DEFAULT_GRAB_TOLERANCE;
        }
        self.grab_tolerance = self
            .grab_tolerance
            .clamp(Self::MIN_GRAB_TOLERANCE, Self::MAX_GRAB_TOLERANCE);
        self.threshold_flash_ms = self
            .threshold_flash_ms
            .clamp(Self::MIN_FLASH_MS, Self::MAX_FLASH_MS);
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.threshold_flash_ms)
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/panject/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("panject")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> Config {
    let mut config: Config = read_yaml_or_default(path, "config");
    config.validate();
    log::info!(
        "Config: corner labels {}, grab tolerance {}px, flash {}ms",
        config.display.show_corner_labels,
        config.interaction.grab_tolerance,
        config.interaction.threshold_flash_ms
    );
    config
}

/// Read a YAML settings file, falling back to `T::default()`
///
/// A missing file is normal on first launch; unreadable or malformed files
/// are reported and otherwise ignored. `kind` names the file in log output.
pub(crate) fn read_yaml_or_default<T>(path: &Path, kind: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No {} at {:?}, using defaults", kind, path);
            return T::default();
        }
        Err(e) => {
            log::warn!("Cannot read {} {:?}: {}; using defaults", kind, path, e);
            return T::default();
        }
    };

    serde_yaml::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("Malformed {} {:?}: {}; using defaults", kind, path, e);
        T::default()
    })
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {:?}", parent))?;
    }
    let yaml = serde_yaml::to_string(config).context("cannot encode config")?;
    std::fs::write(path, yaml).with_context(|| format!("cannot write {:?}", path))?;
    log::debug!("Config written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.display.show_corner_labels);
        assert_eq!(config.interaction.grab_tolerance, 12.0);
        assert_eq!(config.interaction.flash_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn test_validation_clamps_values() {
        let mut interaction = InteractionConfig {
            grab_tolerance: 500.0,
            threshold_flash_ms: 5,
        };
        interaction.validate();
        assert_eq!(interaction.grab_tolerance, 64.0);
        assert_eq!(interaction.threshold_flash_ms, 100);

        let mut interaction = InteractionConfig {
            grab_tolerance: f32::NAN,
            threshold_flash_ms: 60_000,
        };
        interaction.validate();
        assert_eq!(interaction.grab_tolerance, 12.0);
        assert_eq!(interaction.threshold_flash_ms, 10_000);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("display:\n  show_corner_labels: true\n").unwrap();
        assert!(config.display.show_corner_labels);
        assert_eq!(config.interaction, InteractionConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "display: [not, a, map").unwrap();
        assert_eq!(load_config(&path), Config::default());
    }

    #[test]
    fn test_unreadable_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        let config: Config = read_yaml_or_default(dir.path(), "config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            display: DisplayConfig { show_corner_labels: true },
            interaction: InteractionConfig {
                grab_tolerance: 20.0,
                threshold_flash_ms: 1500,
            },
        };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path), config);
    }
}
