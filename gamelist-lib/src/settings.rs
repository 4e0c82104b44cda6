//! Persisted defaults for the `generate` command.
//!
//! Stored at `~/.config/gamelist-gen/settings.toml` (or the platform's
//! equivalent config directory). Command-line flags always take precedence.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GamelistError;
use crate::scanner::normalize_extension;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub generate: GenerateSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSettings {
    /// Extensions used when none are given on the command line
    pub extensions: Vec<String>,
    /// Image folder used when `--images` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<PathBuf>,
    /// File name of the document written into the ROM folder
    pub output_name: String,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            image_dir: None,
            output_name: "gamelist.xml".to_string(),
        }
    }
}

impl Settings {
    /// The configured default extensions, normalized.
    pub fn extension_set(&self) -> BTreeSet<String> {
        self.generate
            .extensions
            .iter()
            .filter_map(|e| normalize_extension(e))
            .collect()
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamelist-gen").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file gives defaults; so does an
/// unparsable one, with a warning.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    match toml::from_str(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Save settings to the default location.
pub fn save_settings(settings: &Settings) -> Result<(), GamelistError> {
    save_settings_to(settings, &settings_path())
}

/// Save settings to `path`, atomically.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), GamelistError> {
    let serialized =
        toml::to_string_pretty(settings).map_err(|e| GamelistError::settings(e.to_string()))?;
    gamelist_frontend::write_atomically(path, serialized.as_bytes())
        .map_err(|e| GamelistError::settings(format!("{}: {}", path.display(), e)))
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
