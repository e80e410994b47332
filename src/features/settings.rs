//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Render the gallery with the dark theme
    pub dark_mode: bool,
    /// Skip the animation frame subscription entirely
    #[serde(default)]
    pub power_saving_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            power_saving_mode: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "motionlab", "Motionlab")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_and_animated() {
        let settings = Settings::default();
        assert!(!settings.dark_mode);
        assert!(!settings.power_saving_mode);
    }

    #[test]
    fn missing_power_saving_field_defaults_off() {
        let settings: Settings = serde_json::from_str(r#"{"dark_mode": true}"#).unwrap();
        assert!(settings.dark_mode);
        assert!(!settings.power_saving_mode);
    }

    #[test]
    fn roundtrips_through_file() {
        let dir = std::env::temp_dir().join("motionlab-settings-test");
        let path = dir.join("settings.json");

        let settings = Settings {
            dark_mode: true,
            power_saving_mode: true,
        };
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.dark_mode);
        assert!(loaded.power_saving_mode);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
