//! The persisted language settings document.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-compliant path helpers (`settings_path`, `config_dir`)
//! - The three persisted values: active provider id, per-language font
//!   assignments, and the alphabet (font descriptor) table

use crate::defaults;
use crate::error::ConfigError;
use crate::tongue_map::TongueMap;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted settings for the language system.
///
/// All fields default individually so older or partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSettings {
    /// Id of the active language provider (`<origin>.<name>`).
    #[serde(default = "defaults::language_provider")]
    pub language_provider: String,

    /// Mapping from language key to assigned font key.
    ///
    /// Entry order is the display order of the settings form rows and must
    /// survive a load/save cycle.
    #[serde(default)]
    pub languages: TongueMap,

    /// Mapping from font key to font-descriptor string.
    #[serde(default)]
    pub alphabets: BTreeMap<String, String>,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            language_provider: defaults::language_provider(),
            languages: TongueMap::new(),
            alphabets: BTreeMap::new(),
        }
    }
}

impl LanguageSettings {
    /// Load settings from the default path, creating the default document
    /// if no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::settings_path())
    }

    /// Load settings from an explicit path, creating the default document
    /// if no file exists there yet.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading language settings from {:?}", path);
            let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
            let settings: LanguageSettings =
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
            Ok(settings)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            settings.save_to_path(path)?;
            Ok(settings)
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::settings_path())
    }

    /// Save settings to an explicit path.
    ///
    /// Atomic save: writes to a temp file then renames, so a crash mid-write
    /// never leaves a truncated settings file behind.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the settings file path (using XDG convention).
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join(defaults::SETTINGS_FILE)
    }

    /// Get the configuration directory path (using XDG convention).
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(defaults::CONFIG_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/argot
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(defaults::CONFIG_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
    }
}
