//! Top-level application tabs

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level navigable section of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Documents,
    KnowledgeGraph,
    Retrieval,
    Api,
}

impl Tab {
    /// All tabs in display order
    pub fn all() -> &'static [Tab] {
        &[Tab::Documents, Tab::KnowledgeGraph, Tab::Retrieval, Tab::Api]
    }

    /// Tab every role may use; the guard falls back to it
    pub fn fallback() -> Self {
        Tab::KnowledgeGraph
    }

    /// Stable identifier, also used as the visibility map key
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Documents => "documents",
            Tab::KnowledgeGraph => "knowledge-graph",
            Tab::Retrieval => "retrieval",
            Tab::Api => "api",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Documents => "Documents",
            Tab::KnowledgeGraph => "Knowledge Graph",
            Tab::Retrieval => "Retrieval",
            Tab::Api => "API",
        }
    }

    /// Whether only administrators may open this tab
    pub fn requires_admin(&self) -> bool {
        matches!(self, Tab::Documents | Tab::Api)
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Documents => '1',
            Tab::KnowledgeGraph => '2',
            Tab::Retrieval => '3',
            Tab::Api => '4',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Tab::all().iter().copied().find(|t| t.shortcut() == c)
    }

    /// Tabs a viewer with the given administrative flag may navigate to
    pub fn permitted(is_admin: bool) -> impl Iterator<Item = Tab> {
        Tab::all()
            .iter()
            .copied()
            .filter(move |t| is_admin || !t.requires_admin())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTab { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_roundtrip_through_from_str() {
        for tab in Tab::all() {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), *tab);
        }
    }

    #[test]
    fn test_unknown_tab_id_is_rejected() {
        let err = "settings".parse::<Tab>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownTab { id } if id == "settings"));
    }

    #[test]
    fn test_permitted_tabs_by_role() {
        let admin: Vec<Tab> = Tab::permitted(true).collect();
        assert_eq!(admin, Tab::all());

        let user: Vec<Tab> = Tab::permitted(false).collect();
        assert_eq!(user, vec![Tab::KnowledgeGraph, Tab::Retrieval]);
    }

    #[test]
    fn test_serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&Tab::KnowledgeGraph).unwrap();
        assert_eq!(json, "\"knowledge-graph\"");
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Tab::from_shortcut('4'), Some(Tab::Api));
        assert_eq!(Tab::from_shortcut('9'), None);
    }
}
