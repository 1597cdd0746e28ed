//! Error types for ragdesk-core
//!
//! Header and visibility operations are total; errors only arise at the
//! edges (config files, parsing user-supplied identifiers).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ragdesk operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown tab identifier: {id}")]
    UnknownTab { id: String },

    #[error("Unknown role: {value} (expected admin or user)")]
    UnknownRole { value: String },
}

impl CoreError {
    /// Actionable hint for the user, if any
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::ConfigRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::ConfigParse { .. } => {
                Some("Validate TOML syntax (keys: title, description, repository_url)".to_string())
            }
            CoreError::UnknownTab { .. } => {
                Some("Valid tabs: documents, knowledge-graph, retrieval, api".to_string())
            }
            CoreError::UnknownRole { .. } => None,
        }
    }
}
