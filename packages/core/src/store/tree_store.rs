//! Arena of document nodes
//!
//! The store owns every `DocumentNode`; parent links are plain ids, so the
//! structure cannot form ownership cycles. The backing `Vec` keeps insertion
//! order (which is sibling order on screen) and a side index maps ids to
//! positions.

use crate::models::{DocumentNode, ValidationError};
use crate::store::{DocumentSource, SourceError, VisibleRows};
use std::collections::HashMap;

/// True when `node_id` sits strictly below `ancestor_id` in `nodes`.
///
/// Walks parent links upwards; the walk is bounded by the collection size so
/// a malformed (cyclic) input cannot loop forever.
pub(crate) fn is_descendant_in(nodes: &[DocumentNode], ancestor_id: &str, node_id: &str) -> bool {
    let parents: HashMap<&str, Option<&str>> = nodes
        .iter()
        .map(|node| (node.id.as_str(), node.parent_id.as_deref()))
        .collect();

    let mut current = parents.get(node_id).copied().flatten();
    for _ in 0..nodes.len() {
        match current {
            Some(id) if id == ancestor_id => return true,
            Some(id) => current = parents.get(id).copied().flatten(),
            None => return false,
        }
    }
    false
}

/// Ordered document collection for one session
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    nodes: Vec<DocumentNode>,
    index: HashMap<String, usize>,
}

impl TreeStore {
    /// Build a store from an ordered node sequence, rejecting input that
    /// breaks the id-uniqueness or acyclicity invariants
    pub fn new(nodes: Vec<DocumentNode>) -> Result<Self, ValidationError> {
        DocumentNode::validate_collection(&nodes)?;
        let mut store = Self {
            nodes,
            index: HashMap::new(),
        };
        store.reindex();
        Ok(store)
    }

    /// Seed a store from a document source
    pub fn from_source(source: &dyn DocumentSource) -> Result<Self, SourceError> {
        let nodes = source.load()?;
        let store = Self::new(nodes)?;
        tracing::debug!("Seeded tree store with {} documents", store.len());
        Ok(store)
    }

    fn reindex(&mut self) {
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();
    }

    pub fn nodes(&self) -> &[DocumentNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DocumentNode> {
        self.position(id).map(|position| &self.nodes[position])
    }

    /// Position of a node in the backing sequence
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Direct children of `parent_id` (top-level nodes for `None`), in
    /// sequence order
    pub fn children<'a>(
        &'a self,
        parent_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a DocumentNode> + 'a {
        self.nodes
            .iter()
            .filter(move |node| node.parent_id.as_deref() == parent_id)
    }

    pub fn has_children(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.is_child_of(id))
    }

    /// Ids from the node's parent up to its top-level ancestor
    pub fn ancestors(&self, id: &str) -> Vec<&str> {
        let mut ancestors = Vec::new();
        let mut current = self.get(id).and_then(|node| node.parent_id.as_deref());
        while let Some(parent_id) = current {
            if ancestors.len() >= self.nodes.len() {
                break;
            }
            ancestors.push(parent_id);
            current = self.get(parent_id).and_then(|node| node.parent_id.as_deref());
        }
        ancestors
    }

    /// Nesting depth; top-level nodes are at depth 0
    pub fn depth(&self, id: &str) -> usize {
        self.ancestors(id).len()
    }

    /// True when `node_id` sits strictly below `ancestor_id`
    pub fn is_descendant(&self, ancestor_id: &str, node_id: &str) -> bool {
        self.ancestors(node_id)
            .iter()
            .any(|&id| id == ancestor_id)
    }

    /// Ids of every node below `id`, in sequence order
    pub fn descendant_ids(&self, id: &str) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|node| self.is_descendant(id, &node.id))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Swap in a new node sequence (e.g. the result of a move).
    ///
    /// The sequence is validated first; on error the store is unchanged.
    pub fn replace(&mut self, nodes: Vec<DocumentNode>) -> Result<(), ValidationError> {
        DocumentNode::validate_collection(&nodes)?;
        self.nodes = nodes;
        self.reindex();
        Ok(())
    }

    /// Expand or collapse one node, optionally cascading to its descendants.
    ///
    /// Returns `false` when the id is unknown.
    pub fn set_expanded(&mut self, id: &str, expanded: bool, recursive: bool) -> bool {
        let Some(position) = self.position(id) else {
            return false;
        };

        let targets = if recursive {
            self.descendant_ids(id)
        } else {
            Vec::new()
        };

        self.nodes[position].expanded = expanded;
        for target in targets {
            if let Some(position) = self.position(&target) {
                self.nodes[position].expanded = expanded;
            }
        }
        true
    }

    pub fn expand_all(&mut self) {
        self.nodes.iter_mut().for_each(|node| node.expanded = true);
    }

    pub fn collapse_all(&mut self) {
        self.nodes.iter_mut().for_each(|node| node.expanded = false);
    }

    /// Rows the widget currently shows, top to bottom
    pub fn visible_rows(&self) -> VisibleRows {
        VisibleRows::from_store(self)
    }
}
