//! Paginator defaults loaded from a JSON config file.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PagerError, Result};

/// Items per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const CONFIG_PREFIX: &str = "pagewise";
const CONFIG_FILE: &str = "config.json";

/// Paginator settings that can be stored on disk.
///
/// ```json
/// { "page_size": 20, "header": "Players", "command": "/players" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    pub page_size: usize,
    pub header: Option<String>,
    pub command: Option<String>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            header: None,
            command: None,
        }
    }
}

impl PagerConfig {
    /// Load the config from an explicit path, or from the XDG config
    /// directory when `path` is `None`.
    ///
    /// An explicit path must exist. A missing file in the XDG location yields
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| PagerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PagerError::Configuration {
                message: "page_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns `$XDG_CONFIG_HOME/pagewise/config.json` if that file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }
}
