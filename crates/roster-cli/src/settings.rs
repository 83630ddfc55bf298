//! User settings - persisted preferences for the browser.
//!
//! Settings are read once at startup. A missing or unreadable file means
//! defaults; command-line flags override whatever the file says.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_core::{DEFAULT_PAGE_SIZE, DEFAULT_RECORD_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Application settings, serialized to TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting dataset.
    pub data: DataSettings,

    /// Table display.
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Number of synthetic records generated at startup.
    pub records: usize,

    /// Fixed seed for a reproducible dataset; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORD_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page.
    pub page_size: usize,

    /// Page sizes offered by the `size` command's help text.
    pub page_size_options: Vec<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            page_size_options: vec![5, 10, 20],
        }
    }
}

impl DisplaySettings {
    /// Configured page size, or the default when the file says `0`.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or_else(|| {
            warn!("page_size = 0 in settings, using {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        })
    }
}

impl Settings {
    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %path.display(), %error, "no settings file, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable settings file");
                Self::default()
            }
        }
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "Roster", "roster")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
