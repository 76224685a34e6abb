//! Settings persistence and path resolution for `AppSettings`.
//!
//! Covers:
//! - `load_layered` (defaults file + user file, JSON)
//! - `save` (pretty JSON with atomic write)
//! - Platform config paths (`settings_path`, `settings_dir`)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::app_settings::AppSettings;
use crate::error::Result;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
const APP_DIR_NAME: &str = "termconf";

impl AppSettings {
    /// Load the optional defaults file, then the user file on top.
    ///
    /// A missing user file is not an error: the result is just the
    /// defaults. A missing defaults file that was explicitly given is.
    pub fn load_layered(defaults: Option<&Path>, user: &Path) -> Result<Self> {
        let mut docs = Vec::new();

        if let Some(defaults) = defaults {
            log::info!("Loading default settings from {:?}", defaults);
            docs.push(read_document(defaults)?);
        }

        match read_document(user) {
            Ok(doc) => {
                log::info!("Loading user settings from {:?}", user);
                docs.push(doc);
            }
            Err(crate::ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::info!("Settings file not found at {:?}, using defaults", user);
            }
            Err(e) => return Err(e),
        }

        Self::from_documents(&docs)
    }

    /// Load the user settings file from the platform config directory.
    pub fn load() -> Result<Self> {
        Self::load_layered(None, &Self::settings_path())
    }

    /// Save the full settings document to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.to_document())?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json.as_bytes())?;
        fs::rename(&temp_path, path)?;

        log::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the settings file path
    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join(SETTINGS_FILE_NAME)
    }

    /// Get the settings directory (`<config dir>/termconf`)
    pub fn settings_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(config_dir) => config_dir.join(APP_DIR_NAME),
            // Fallback if the config directory cannot be determined
            None => PathBuf::from("."),
        }
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
