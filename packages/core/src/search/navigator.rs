use crate::models::DocumentNode;

/// Query, matches and cursor behind the search box.
///
/// `matches` are snapshots of the nodes that matched, in sequence order, taken
/// when the query is set; call [`SearchNavigator::refresh`] after the node
/// sequence changes. The cursor is always a valid index into `matches` when
/// there are any, and 0 otherwise.
#[derive(Debug, Clone, Default)]
pub struct SearchNavigator {
    query: String,
    matches: Vec<DocumentNode>,
    cursor: usize,
}

impl SearchNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and recompute matches; the cursor goes back to the
    /// first match
    pub fn set_query(&mut self, query: &str, nodes: &[DocumentNode]) {
        self.query = query.to_lowercase();
        self.cursor = 0;

        if self.query.is_empty() {
            self.matches.clear();
            return;
        }

        self.matches = nodes
            .iter()
            .filter(|node| node.name_contains(&self.query))
            .cloned()
            .collect();

        tracing::debug!(
            "Search '{}' matched {} document(s)",
            self.query,
            self.matches.len()
        );
    }

    /// Re-run the current query against a changed node sequence.
    ///
    /// The cursor stays on the same document when it still matches.
    pub fn refresh(&mut self, nodes: &[DocumentNode]) {
        let current_id = self.current().map(|node| node.id.clone());
        let query = std::mem::take(&mut self.query);
        self.set_query(&query, nodes);

        if let Some(id) = current_id {
            if let Some(position) = self.matches.iter().position(|node| node.id == id) {
                self.cursor = position;
            }
        }
    }

    pub fn next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
    }

    pub fn prev(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.matches.len() - 1) % self.matches.len();
    }

    pub fn current(&self) -> Option<&DocumentNode> {
        self.matches.get(self.cursor)
    }

    /// Whether `id` is the highlighted search result
    pub fn is_current(&self, id: &str) -> bool {
        self.current().is_some_and(|node| node.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[DocumentNode] {
        &self.matches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Position label for the toolbar, e.g. `"2 / 5"`; `"0 / 0"` without matches
    pub fn position_label(&self) -> String {
        if self.matches.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.cursor + 1, self.matches.len())
        }
    }
}
