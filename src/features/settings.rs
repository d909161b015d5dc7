//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Which page components are mounted
    #[serde(default)]
    pub features: FeatureToggles,
    /// Root directory for slide images (defaults to the working directory)
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Interface language ("pt" or "en")
    pub language: String,
    /// Reduced-motion preference
    #[serde(default)]
    pub reduce_motion: bool,
    /// Power saving mode - also suppresses animation
    #[serde(default)]
    pub power_saving_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "pt".to_string(),
            reduce_motion: false,
            power_saving_mode: false,
        }
    }
}

/// Page components that can be switched off
///
/// A component whose toggle is off is never initialised, the same way a
/// missing mount point disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub decor_layer: bool,
    pub residential_carousel: bool,
    pub commercial_carousel: bool,
    pub mini_cta: bool,
    pub back_to_top: bool,
    pub reveal: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            decor_layer: true,
            residential_carousel: true,
            commercial_carousel: true,
            mini_cta: true,
            back_to_top: true,
            reveal: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        super::project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) => Self::load_or_create(&path),
            None => Self::default(),
        }
    }

    /// Load `path`; on first run write the defaults there so they can be edited
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Wrote default settings to {}", path.display()),
                Err(e) => tracing::warn!("Could not write default settings: {}", e),
            }
            return settings;
        }
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Directory slide image references are resolved against
    pub fn assets_root(&self) -> PathBuf {
        self.assets_dir.clone().unwrap_or_else(|| PathBuf::from("."))
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

impl std::error::Error for SettingsError {}
