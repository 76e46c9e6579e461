//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::output::OutputFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/otbr-types)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("io", "openthread", "otbr-types")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default output format.
    pub default_output_format: OutputFormat,
    /// Enable verbose logging by default.
    pub verbose: bool,
    /// Print hex lanes in upper case.
    pub uppercase_hex: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: OutputFormat::Plain,
            verbose: false,
            uppercase_hex: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults
    /// when no settings file exists.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::new()?.settings_file();

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::new()?;
        fs::create_dir_all(&paths.config_dir)?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }
}
