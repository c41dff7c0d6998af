//! Error types for tree operations
//!
//! Every failure here aborts the operation and leaves the caller's node
//! sequence unchanged. The hosting UI treats an error as "ignore this drag".

use crate::models::ValidationError;
use thiserror::Error;

/// Errors that can occur while moving nodes
///
/// # Examples
///
/// ```rust
/// use doctree_core::operations::TreeOperationError;
///
/// let err = TreeOperationError::node_not_found("missing".to_string());
/// assert_eq!(err.to_string(), "Node 'missing' does not exist");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeOperationError {
    /// Moving or target id absent from the current node sequence
    #[error("Node '{node_id}' does not exist")]
    NodeNotFound { node_id: String },

    /// A drag event names a visual row the display cannot resolve to a node
    #[error("No node is rendered at row {row}")]
    RowNotFound { row: usize },

    /// The resulting node sequence would break the tree invariants
    #[error("Invalid tree state: {0}")]
    InvalidTree(#[from] ValidationError),
}

impl TreeOperationError {
    /// Create a NodeNotFound error
    pub fn node_not_found(node_id: String) -> Self {
        Self::NodeNotFound { node_id }
    }

    /// Create a RowNotFound error
    pub fn row_not_found(row: usize) -> Self {
        Self::RowNotFound { row }
    }
}
