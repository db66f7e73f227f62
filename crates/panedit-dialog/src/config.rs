//! Panel configuration persistence
//!
//! Reads and writes the panel's item list as toml. The dialog only talks to
//! the [`ConfigStore`] trait; this is the bundled file-backed implementation.

use std::path::{Path, PathBuf};

use panedit_core::prelude::*;
use panedit_core::PanelConfig;

use crate::collaborators::ConfigStore;

const PANEDIT_DIR: &str = ".panedit";
const PANEL_FILENAME: &str = "panel.toml";

/// File-backed [`ConfigStore`] storing the panel layout as toml.
#[derive(Debug)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Store rooted at an explicit base directory
    /// (`<base>/.panedit/panel.toml`).
    pub fn new(base_dir: &Path) -> Self {
        Self {
            path: base_dir.join(PANEDIT_DIR).join(PANEL_FILENAME),
        }
    }

    /// Store at the user-level default location
    /// (`~/.config/panedit/panel.toml`).
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("panedit").join(PANEL_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the panel configuration.
    ///
    /// A missing file is a fresh panel, not an error; an unreadable or
    /// unparsable file falls back to the default with a warning.
    pub fn load(&self) -> PanelConfig {
        if !self.path.exists() {
            debug!("No panel file at {:?}, using defaults", self.path);
            return PanelConfig::default();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("Loaded panel from {:?}", self.path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", self.path, e);
                    PanelConfig::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", self.path, e);
                PanelConfig::default()
            }
        }
    }
}

impl ConfigStore for TomlConfigStore {
    fn save(&mut self, config: &PanelConfig) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::config("panel path has no parent directory"))?;

        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize panel: {}", e)))?;
        let full_content = format!(
            "# panedit panel layout\n# Auto-generated - saved whenever the panel changes\n\n{}",
            content
        );

        // Atomic write: write to temp, then rename
        let temp_path = dir.join(".panel.toml.tmp");
        std::fs::write(&temp_path, &full_content)
            .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

        info!("Saved panel config to {:?}", self.path);
        Ok(())
    }
}
