//! Tree Mutator
//!
//! Computes the node sequence after a drag-and-drop move. The computation is
//! pure: the input slice is never touched and the caller writes the returned
//! sequence back into its own state.
//!
//! # Move rules
//!
//! 1. The moving node is taken out of the sequence.
//! 2. If the drop target sits below the moving node, the moving node's
//!    direct children are re-attached to its former parent first, so the
//!    moving node cannot become its own ancestor.
//! 3. No target: the node becomes top-level, is marked expanded and is
//!    appended to the end.
//! 4. `Into`: the node becomes the last child of the target.
//! 5. `BeforeOrAfter`: the node takes the target's parent and is spliced in at
//!    `target_index`.
//!
//! # Example
//!
//! ```rust
//! use doctree_core::models::DocumentNode;
//! use doctree_core::operations::{move_node, MoveRequest};
//!
//! let nodes = vec![
//!     DocumentNode::directory("a", "A"),
//!     DocumentNode::file("b", "B"),
//! ];
//!
//! let moved = move_node(&nodes, &MoveRequest::into_node("b", "a")).unwrap();
//! assert_eq!(moved[1].parent_id.as_deref(), Some("a"));
//! ```

use crate::models::{DocumentNode, DropMode};
use crate::operations::TreeOperationError;
use crate::store::is_descendant_in;

/// Description of a single drag-and-drop move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Node being relocated
    pub node_id: String,

    /// Drop target; `None` drops outside every existing node
    pub target_id: Option<String>,

    pub mode: DropMode,

    /// Splice position for sibling drops
    pub target_index: usize,

    /// Where the drag started, when known; used by the no-op guard
    pub source_index: Option<usize>,

    /// Whether the drag started and ended in the same list
    pub same_list: bool,
}

impl MoveRequest {
    pub fn new(
        node_id: impl Into<String>,
        target_id: Option<String>,
        mode: DropMode,
        target_index: usize,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            target_id,
            mode,
            target_index,
            source_index: None,
            same_list: true,
        }
    }

    /// Nest `node_id` as the last child of `target_id`
    pub fn into_node(node_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::new(node_id, Some(target_id.into()), DropMode::Into, 0)
    }

    /// Place `node_id` next to `target_id` at `target_index`
    pub fn beside(
        node_id: impl Into<String>,
        target_id: impl Into<String>,
        target_index: usize,
    ) -> Self {
        Self::new(
            node_id,
            Some(target_id.into()),
            DropMode::BeforeOrAfter,
            target_index,
        )
    }

    /// Drop `node_id` outside every node, making it top-level
    pub fn to_top_level(node_id: impl Into<String>) -> Self {
        Self::new(node_id, None, DropMode::BeforeOrAfter, 0)
    }

    pub fn from_index(mut self, source_index: usize) -> Self {
        self.source_index = Some(source_index);
        self
    }

    pub fn across_lists(mut self) -> Self {
        self.same_list = false;
        self
    }

    /// Reorder within one list that ends where it started
    fn is_noop_reorder(&self) -> bool {
        self.same_list
            && self.mode == DropMode::BeforeOrAfter
            && self.source_index == Some(self.target_index)
    }
}

fn position_of(nodes: &[DocumentNode], id: &str) -> Result<usize, TreeOperationError> {
    nodes
        .iter()
        .position(|node| node.id == id)
        .ok_or_else(|| TreeOperationError::node_not_found(id.to_string()))
}

/// Compute the node sequence after applying `request` to `nodes`.
///
/// Unknown moving or target ids fail with `NodeNotFound`, even when the
/// request would otherwise be a no-op. No-op cases
/// (unchanged reorder, stale "into" target, dropping a node into itself)
/// return a copy of the input.
pub fn move_node(
    nodes: &[DocumentNode],
    request: &MoveRequest,
) -> Result<Vec<DocumentNode>, TreeOperationError> {
    let from = position_of(nodes, &request.node_id)?;
    if let Some(target_id) = request.target_id.as_deref() {
        position_of(nodes, target_id)?;
    }

    if request.is_noop_reorder() {
        tracing::debug!(
            "Skipping move of '{}': drop position equals drag origin",
            request.node_id
        );
        return Ok(nodes.to_vec());
    }

    match (request.target_id.as_deref(), request.mode) {
        (None, DropMode::Into) => {
            tracing::debug!(
                "Skipping move of '{}': no node under the drop position",
                request.node_id
            );
            return Ok(nodes.to_vec());
        }
        (Some(target_id), DropMode::Into) if target_id == request.node_id => {
            tracing::debug!("Skipping move of '{}' into itself", request.node_id);
            return Ok(nodes.to_vec());
        }
        _ => {}
    }

    let mut result = nodes.to_vec();
    let mut moving = result.remove(from);
    let former_parent = moving.parent_id.clone();

    if let Some(target_id) = request.target_id.as_deref() {
        if is_descendant_in(nodes, &moving.id, target_id) {
            let mut promoted = 0;
            for node in result.iter_mut().filter(|node| node.is_child_of(&moving.id)) {
                node.parent_id = former_parent.clone();
                promoted += 1;
            }
            tracing::debug!(
                "Dropping '{}' below its descendant '{}': promoted {} child(ren) to {:?}",
                moving.id,
                target_id,
                promoted,
                former_parent
            );
        }
    }

    match (request.target_id.as_deref(), request.mode) {
        (None, _) => {
            moving.parent_id = None;
            moving.expanded = true;
            result.push(moving);
        }
        (Some(target_id), DropMode::Into) => {
            moving.parent_id = Some(target_id.to_string());
            result.push(moving);
        }
        (Some(target_id), DropMode::BeforeOrAfter) => {
            // Read the target's parent after promotion so a former child of
            // the moving node never hands the moving node back as a parent.
            moving.parent_id = if target_id == moving.id {
                former_parent
            } else {
                result
                    .iter()
                    .find(|node| node.id == target_id)
                    .and_then(|node| node.parent_id.clone())
            };
            let index = request.target_index.min(result.len());
            result.insert(index, moving);
        }
    }

    tracing::debug!(
        "Moved '{}' ({:?}) relative to {:?}",
        request.node_id,
        request.mode,
        request.target_id
    );
    Ok(result)
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "mover_test.rs"]
mod mover_test;
