//! Cross-Platform Path Utilities
//!
//! Resolves the scanbridge settings directory (~/.scanbridge/).

use std::path::{Path, PathBuf};

use crate::utils::error::{BridgeError, BridgeResult};

/// Get the user's home directory
pub fn home_dir() -> BridgeResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| BridgeError::config("Could not determine home directory"))
}

/// Get the scanbridge directory (~/.scanbridge/)
pub fn scanbridge_dir() -> BridgeResult<PathBuf> {
    Ok(home_dir()?.join(".scanbridge"))
}

/// Get the default settings file path (~/.scanbridge/settings.json)
pub fn settings_path() -> BridgeResult<PathBuf> {
    Ok(scanbridge_dir()?.join("settings.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> BridgeResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
