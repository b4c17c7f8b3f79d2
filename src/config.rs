//! Configuration module for toolpack
//!
//! Configuration is stored as TOML in the user's config directory;
//! missing files fall back to defaults and are written out on first
//! load so users have something to edit.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ToolpackConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Ring the terminal bell when a countdown finishes
    #[serde(default = "default_bell")]
    pub bell: bool,

    /// Override for the notes file location
    #[serde(default)]
    pub notes_path: Option<PathBuf>,
}

const fn default_bell() -> bool {
    true
}

impl ToolpackConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("toolpack").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed,
    /// or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::new_default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Defaults with the serde-level defaults applied.
    #[must_use]
    pub const fn new_default() -> Self {
        Self {
            quiet: false,
            bell: true,
            notes_path: None,
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created,
    /// the configuration cannot be serialized, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Where the notes scratchpad is persisted.
    ///
    /// Honors `notes_path` when set; otherwise the platform data
    /// directory with a fallback to the current directory on platforms
    /// without one.
    #[must_use]
    pub fn notes_file(&self) -> PathBuf {
        if let Some(path) = &self.notes_path {
            return path.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toolpack")
            .join("notes.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_serialize_round_trip() {
        let config = ToolpackConfig::new_default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: ToolpackConfig = toml::from_str(&toml_string).unwrap();
        assert!(parsed.bell);
        assert!(!parsed.quiet);
        assert!(parsed.notes_path.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: ToolpackConfig = toml::from_str("").unwrap();
        assert!(parsed.bell);
        assert!(!parsed.quiet);
    }

    #[test]
    fn test_notes_file_override() {
        let config = ToolpackConfig {
            notes_path: Some(PathBuf::from("/tmp/my-notes.json")),
            ..ToolpackConfig::new_default()
        };
        assert_eq!(config.notes_file(), PathBuf::from("/tmp/my-notes.json"));
    }
}
