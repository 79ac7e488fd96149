//! Configuration and settings management for ShelfKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Grid dimensions (cell spacing, millimeters per unit)
//! - Module defaults (color of newly added modules)
//! - Display preferences (measurement system)
//! - Storage (where the working configuration is kept)

use serde::{Deserialize, Serialize};
pub use shelfkit_core::units::MeasurementSystem;
use shelfkit_core::constants::{DEFAULT_COLOR, GRID_UNIT_MM, UNIT_SPACING};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const APP_DIR: &str = "shelfkit";

/// Grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// World-space distance between adjacent cells
    pub unit_spacing: f64,
    /// Millimeters per grid unit
    pub unit_mm: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            unit_spacing: UNIT_SPACING,
            unit_mm: GRID_UNIT_MM,
        }
    }
}

/// Defaults for newly added modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSettings {
    /// Color of modules created with "add module"
    pub default_color: String,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Measurement system (Metric or Imperial)
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Explicit path of the working configuration file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub modules: ModuleSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// Falls back to defaults when no file is found.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!("No config directory: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |key: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        };

        positive("grid.unit_spacing", self.grid.unit_spacing)?;
        positive("grid.unit_mm", self.grid.unit_mm)?;

        if self.modules.default_color.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "modules.default_color".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }

    /// Default location of the settings file
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.toml"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Where the working configuration is persisted
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join("configuration.json"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}
