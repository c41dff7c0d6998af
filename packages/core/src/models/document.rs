//! Document Node
//!
//! The tree is stored as a flat, ordered sequence of `DocumentNode`s. Each node
//! points at its container through `parent_id`; a node without a parent sits at
//! the top level. Sibling order on screen is the order of the backing sequence.
//!
//! # Examples
//!
//! ```rust
//! use doctree_core::models::DocumentNode;
//!
//! let folder = DocumentNode::directory("1", "Document 1");
//! let file = DocumentNode::file("2", "Document 2").with_parent("1");
//!
//! assert!(folder.is_root());
//! assert_eq!(file.parent_id.as_deref(), Some("1"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

fn default_icon() -> String {
    "file".to_string()
}

/// Validation errors for a node collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Node at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Node '{node_id}' references missing parent '{parent_id}'")]
    DanglingParent { node_id: String, parent_id: String },

    #[error("Node '{0}' is its own ancestor")]
    CircularParent(String),
}

/// A single document in the tree.
///
/// # Fields
///
/// - `id`: Unique, stable identifier
/// - `name`: Display label
/// - `icon`: Display hint for the widget (defaults to `"file"`)
/// - `is_directory`: Presentational flag; does not restrict children
/// - `parent_id`: Containing node, `None` for a top-level node
/// - `expanded`: Whether the widget shows this node's children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub id: String,

    pub name: String,

    #[serde(default = "default_icon")]
    pub icon: String,

    #[serde(default)]
    pub is_directory: bool,

    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub expanded: bool,
}

impl DocumentNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: default_icon(),
            is_directory,
            parent_id: None,
            expanded: false,
        }
    }

    pub fn directory(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, true)
    }

    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, false)
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_child_of(&self, parent_id: &str) -> bool {
        self.parent_id.as_deref() == Some(parent_id)
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `query_lower` must already be lower-cased.
    pub fn name_contains(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    /// Check the collection-wide invariants: ids are non-empty and unique,
    /// every parent exists, and the parent graph has no cycles.
    pub fn validate_collection(nodes: &[DocumentNode]) -> Result<(), ValidationError> {
        let mut parents: HashMap<&str, Option<&str>> = HashMap::with_capacity(nodes.len());

        for (position, node) in nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(ValidationError::EmptyId { position });
            }
            if parents
                .insert(node.id.as_str(), node.parent_id.as_deref())
                .is_some()
            {
                return Err(ValidationError::DuplicateId(node.id.clone()));
            }
        }

        for node in nodes {
            if let Some(parent_id) = node.parent_id.as_deref() {
                if !parents.contains_key(parent_id) {
                    return Err(ValidationError::DanglingParent {
                        node_id: node.id.clone(),
                        parent_id: parent_id.to_string(),
                    });
                }
            }
        }

        for node in nodes {
            let mut seen = HashSet::new();
            let mut current = Some(node.id.as_str());
            while let Some(id) = current {
                if !seen.insert(id) {
                    return Err(ValidationError::CircularParent(node.id.clone()));
                }
                current = parents.get(id).copied().flatten();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_seed_record() {
        let node: DocumentNode = serde_json::from_str(
            r#"{"id":"2","name":"Document 2","icon":"file","isDirectory":false,"parentId":"1"}"#,
        )
        .unwrap();

        assert_eq!(node.id, "2");
        assert_eq!(node.parent_id.as_deref(), Some("1"));
        assert!(!node.is_directory);
        assert!(!node.expanded);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: DocumentNode =
            serde_json::from_str(r#"{"id":"9","name":"Loose","parentId":null}"#).unwrap();
        assert_eq!(node.icon, "file");
        assert!(node.is_root());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let node = DocumentNode::file("1", "Quarterly REPORT");
        assert!(node.name_contains("report"));
        assert!(!node.name_contains("summary"));
    }

    #[test]
    fn test_validate_accepts_tree() {
        let nodes = vec![
            DocumentNode::directory("1", "A"),
            DocumentNode::file("2", "B").with_parent("1"),
            DocumentNode::file("3", "C").with_parent("2"),
        ];
        assert!(DocumentNode::validate_collection(&nodes).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let nodes = vec![DocumentNode::file("1", "A"), DocumentNode::file("1", "B")];
        assert_eq!(
            DocumentNode::validate_collection(&nodes),
            Err(ValidationError::DuplicateId("1".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let nodes = vec![DocumentNode::file("1", "A"), DocumentNode::file("", "B")];
        assert_eq!(
            DocumentNode::validate_collection(&nodes),
            Err(ValidationError::EmptyId { position: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_dangling_parent() {
        let nodes = vec![DocumentNode::file("1", "A").with_parent("missing")];
        assert!(matches!(
            DocumentNode::validate_collection(&nodes),
            Err(ValidationError::DanglingParent { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_cycle() {
        let nodes = vec![
            DocumentNode::file("1", "A").with_parent("2"),
            DocumentNode::file("2", "B").with_parent("1"),
        ];
        assert!(matches!(
            DocumentNode::validate_collection(&nodes),
            Err(ValidationError::CircularParent(_))
        ));
    }
}
