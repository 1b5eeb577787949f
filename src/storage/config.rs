//! JSON Settings Management
//!
//! Reads and writes the connection settings file. Settings are validated on
//! both load and save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::ServerSettings;
use crate::utils::error::{BridgeError, BridgeResult};
use crate::utils::paths::{ensure_dir, settings_path};

/// Settings service bound to one settings file
#[derive(Debug)]
pub struct ConfigService {
    settings_path: PathBuf,
    settings: ServerSettings,
}

impl ConfigService {
    /// Load settings from the default location (~/.scanbridge/settings.json)
    pub fn load_default() -> BridgeResult<Self> {
        Self::load(settings_path()?)
    }

    /// Load settings from an explicit path
    pub fn load(path: impl Into<PathBuf>) -> BridgeResult<Self> {
        let settings_path = path.into();
        if !settings_path.exists() {
            return Err(BridgeError::config(format!(
                "Settings file not found: {}",
                settings_path.display()
            )));
        }
        let settings = Self::load_from_file(&settings_path)?;
        Ok(Self {
            settings_path,
            settings,
        })
    }

    /// Write `settings` to `path` and bind the service to it
    pub fn create(path: impl Into<PathBuf>, settings: ServerSettings) -> BridgeResult<Self> {
        let settings_path = path.into();
        if let Some(parent) = settings_path.parent() {
            ensure_dir(parent)?;
        }
        Self::save_to_file(&settings_path, &settings)?;
        Ok(Self {
            settings_path,
            settings,
        })
    }

    /// Load settings from a file
    fn load_from_file(path: &Path) -> BridgeResult<ServerSettings> {
        let content = fs::read_to_string(path)?;
        let settings: ServerSettings = serde_json::from_str(&content)?;
        settings.validate().map_err(BridgeError::config)?;
        Ok(settings)
    }

    /// Save settings to a file with pretty formatting
    fn save_to_file(path: &Path, settings: &ServerSettings) -> BridgeResult<()> {
        settings.validate().map_err(BridgeError::config)?;
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the current settings
    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Replace the settings and persist them
    pub fn update(&mut self, settings: ServerSettings) -> BridgeResult<()> {
        Self::save_to_file(&self.settings_path, &settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Reload settings from disk
    pub fn reload(&mut self) -> BridgeResult<()> {
        self.settings = Self::load_from_file(&self.settings_path)?;
        Ok(())
    }
}
