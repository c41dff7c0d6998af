//! Visual row order
//!
//! The widget renders the tree top to bottom in pre-order: each top-level node
//! in sequence order, followed by its children when it is expanded, and so on.
//! Drag events carry row indices in this order, so the session resolves them
//! through a `RowLookup`.

use crate::store::TreeStore;
use std::collections::HashMap;

/// Resolves a visual row index to the id of the node rendered there
pub trait RowLookup {
    fn node_id_at(&self, row: usize) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: String,
    pub depth: usize,
}

/// Snapshot of the rows the widget shows for a given store state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows {
    rows: Vec<VisibleRow>,
}

impl VisibleRows {
    pub fn from_store(store: &TreeStore) -> Self {
        let mut children: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
        for (position, node) in store.nodes().iter().enumerate() {
            children
                .entry(node.parent_id.as_deref())
                .or_default()
                .push(position);
        }

        let mut rows = Vec::with_capacity(store.len());
        // (position, depth), popped from the back so push children reversed
        let mut stack: Vec<(usize, usize)> = children
            .get(&None::<&str>)
            .map(|roots| roots.iter().rev().map(|&p| (p, 0)).collect())
            .unwrap_or_default();

        while let Some((position, depth)) = stack.pop() {
            let node = &store.nodes()[position];
            rows.push(VisibleRow {
                id: node.id.clone(),
                depth,
            });
            if node.expanded {
                if let Some(kids) = children.get(&Some(node.id.as_str())) {
                    stack.extend(kids.iter().rev().map(|&p| (p, depth + 1)));
                }
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Visual row of a node, if it is currently shown
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }
}

impl RowLookup for VisibleRows {
    fn node_id_at(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|row| row.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentNode;
    use crate::store::StaticDocumentSource;

    fn ids(rows: &VisibleRows) -> Vec<&str> {
        rows.rows().iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn test_collapsed_tree_shows_roots_only() {
        let store = TreeStore::from_source(&StaticDocumentSource).unwrap();
        let rows = store.visible_rows();
        assert_eq!(ids(&rows), vec!["1", "4"]);
    }

    #[test]
    fn test_expanded_tree_is_preorder() {
        let mut store = TreeStore::from_source(&StaticDocumentSource).unwrap();
        store.expand_all();
        let rows = store.visible_rows();

        assert_eq!(ids(&rows), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(rows.rows()[1].depth, 1);
        assert_eq!(rows.rows()[3].depth, 0);
        assert_eq!(rows.node_id_at(4), Some("5"));
        assert_eq!(rows.node_id_at(5), None);
        assert_eq!(rows.row_of("4"), Some(3));
    }

    #[test]
    fn test_children_follow_parent_even_when_listed_first() {
        let mut store = TreeStore::new(vec![
            DocumentNode::file("child", "Child").with_parent("root"),
            DocumentNode::directory("root", "Root"),
        ])
        .unwrap();
        store.expand_all();

        assert_eq!(ids(&store.visible_rows()), vec!["root", "child"]);
    }
}
