//! Entry configuration persistence
//!
//! Stores user preferences in `~/.config/entry-kit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_UNDO_LIMIT;
use crate::util::text::TABULATOR_WIDTH;

/// Entry configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Char shown in place of each char of an obscured password
    #[serde(default = "default_password_mask")]
    pub password_mask: char,

    /// Maximum number of undo steps kept per entry
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,

    /// Tab stop width used by the monospace measure
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Rows a multi-line entry shows, and a page move covers
    #[serde(default = "default_visible_rows")]
    pub visible_rows: usize,
}

fn default_password_mask() -> char {
    '•'
}

fn default_undo_limit() -> usize {
    DEFAULT_UNDO_LIMIT
}

fn default_tab_width() -> usize {
    TABULATOR_WIDTH
}

fn default_visible_rows() -> usize {
    3
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            password_mask: default_password_mask(),
            undo_limit: default_undo_limit(),
            tab_width: default_tab_width(),
            visible_rows: default_visible_rows(),
        }
    }
}

impl EntryConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
