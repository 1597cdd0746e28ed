//! Static site metadata
//!
//! Loaded from `<config dir>/ragdesk/site.toml`. A missing file means
//! defaults; a file that exists but does not parse is an error.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/HKUDS/LightRAG";

/// Site-wide header metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title used when the session does not supply one
    pub title: Option<String>,
    /// Tooltip shown under the title
    pub description: Option<String>,
    /// Project repository linked from the header (administrators only)
    pub repository_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// `<config dir>/ragdesk/site.toml`, if a config dir exists on this platform
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ragdesk").join("site.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No site config, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;

        info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Load from an explicit path or the platform default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, CoreError> {
        match explicit.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
