//! Session model owned by the auth store

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role granted to the signed-in account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(CoreError::UnknownRole {
                value: s.to_string(),
            }),
        }
    }
}

/// Session state as reported by the auth store
///
/// Read-only from the header's point of view. Every optional field degrades
/// to omitted UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    pub role: Option<Role>,
    /// No authenticated user (auth disabled server-side)
    pub guest_mode: bool,
    pub username: Option<String>,
    pub core_version: Option<String>,
    pub api_version: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SessionInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Holds only the non-administrative role
    pub fn is_user(&self) -> bool {
        self.role == Some(Role::User)
    }

    /// Guest session: no role and no logout control
    pub fn guest() -> Self {
        Self {
            guest_mode: true,
            ..Self::default()
        }
    }

    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Admin),
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn user(username: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn with_versions(mut self, core: impl Into<String>, api: impl Into<String>) -> Self {
        self.core_version = Some(core.into());
        self.api_version = Some(api.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `"v{core}/{api}"` when both versions are known
    pub fn version_label(&self) -> Option<String> {
        match (non_empty(&self.core_version), non_empty(&self.api_version)) {
            (Some(core), Some(api)) => Some(format!("v{}/{}", core, api)),
            _ => None,
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
