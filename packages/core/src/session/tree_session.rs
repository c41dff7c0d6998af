use crate::config::TreeViewConfig;
use crate::models::{DocumentNode, DragEvent, DropMode};
use crate::operations::{move_node, MoveRequest, TreeOperationError};
use crate::search::SearchNavigator;
use crate::store::{
    JsonDocumentSource, RowLookup, SourceError, StaticDocumentSource, TreeStore, VisibleRows,
};

/// Mutable state behind one tree view
#[derive(Debug, Clone)]
pub struct TreeSession {
    config: TreeViewConfig,
    store: TreeStore,
    search: SearchNavigator,
}

impl TreeSession {
    pub fn new(store: TreeStore, config: TreeViewConfig) -> Self {
        Self {
            config,
            store,
            search: SearchNavigator::new(),
        }
    }

    /// Seed a session from the configured source (built-in samples when the
    /// config names no seed file)
    pub fn from_config(config: TreeViewConfig) -> Result<Self, SourceError> {
        let store = match &config.seed_path {
            Some(path) => TreeStore::from_source(&JsonDocumentSource::new(path))?,
            None => TreeStore::from_source(&StaticDocumentSource)?,
        };
        Ok(Self::new(store, config))
    }

    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn nodes(&self) -> &[DocumentNode] {
        self.store.nodes()
    }

    pub fn search(&self) -> &SearchNavigator {
        &self.search
    }

    pub fn visible_rows(&self) -> VisibleRows {
        self.store.visible_rows()
    }

    /// Apply a move and write the result back.
    ///
    /// Returns whether the node sequence changed. On error the session is
    /// left untouched.
    pub fn apply_move(&mut self, request: &MoveRequest) -> Result<bool, TreeOperationError> {
        let moved = move_node(self.store.nodes(), request)?;
        if moved.as_slice() == self.store.nodes() {
            return Ok(false);
        }

        self.store.replace(moved)?;
        self.refresh_search();
        Ok(true)
    }

    /// Keep search snapshots in step with the store after any state change
    fn refresh_search(&mut self) {
        if !self.search.query().is_empty() {
            self.search.refresh(self.store.nodes());
        }
    }

    /// Handle a drag-completion event using the session's own row layout
    pub fn on_drag_end(&mut self, event: &DragEvent) -> Result<bool, TreeOperationError> {
        let rows = self.visible_rows();
        self.on_drag_end_with(event, &rows)
    }

    /// Handle a drag-completion event, resolving rows through the display
    pub fn on_drag_end_with(
        &mut self,
        event: &DragEvent,
        rows: &dyn RowLookup,
    ) -> Result<bool, TreeOperationError> {
        match self.translate_drag(event, rows) {
            Ok(Some(request)) => self.apply_move(&request).inspect_err(|e| {
                tracing::warn!("Ignoring drag {:?}: {}", event, e);
            }),
            Ok(None) => Ok(false),
            Err(e) => {
                tracing::warn!("Ignoring drag {:?}: {}", event, e);
                Err(e)
            }
        }
    }

    /// Turn a widget drag event into a move request; `None` means the drag
    /// should be dropped without touching state
    fn translate_drag(
        &self,
        event: &DragEvent,
        rows: &dyn RowLookup,
    ) -> Result<Option<MoveRequest>, TreeOperationError> {
        if event.is_noop() {
            return Ok(None);
        }

        let mode = event.drop_mode();
        if mode == DropMode::Into && !self.config.allow_drop_inside_item {
            tracing::debug!("Drop inside item disabled, ignoring drag");
            return Ok(None);
        }

        let moving_id = rows
            .node_id_at(event.from_index)
            .ok_or_else(|| TreeOperationError::row_not_found(event.from_index))?
            .to_string();
        let target_id = rows.node_id_at(event.target_row()).map(str::to_string);

        match (&target_id, mode) {
            (None, DropMode::Into) => return Ok(None),
            (Some(_), DropMode::BeforeOrAfter) if !self.config.allow_reordering => {
                tracing::debug!("Reordering disabled, ignoring drag");
                return Ok(None);
            }
            _ => {}
        }

        let mut request =
            MoveRequest::new(moving_id, target_id, mode, event.to_index).from_index(event.from_index);
        if !event.same_component() {
            request = request.across_lists();
        }
        Ok(Some(request))
    }

    pub fn on_search_input(&mut self, query: &str) {
        self.search.set_query(query, self.store.nodes());
    }

    pub fn next_result(&mut self) {
        self.search.next();
    }

    pub fn prev_result(&mut self) {
        self.search.prev();
    }

    pub fn current_result(&self) -> Option<&DocumentNode> {
        self.search.current()
    }

    pub fn expand_all(&mut self) {
        self.store.expand_all();
        self.refresh_search();
    }

    pub fn collapse_all(&mut self) {
        self.store.collapse_all();
        self.refresh_search();
    }

    /// Expand or collapse one node, cascading when the config asks for it
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> Result<(), TreeOperationError> {
        let recursive = self.config.expand_nodes_recursive;
        if self.store.set_expanded(id, expanded, recursive) {
            self.refresh_search();
            Ok(())
        } else {
            Err(TreeOperationError::node_not_found(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TreeSession {
        let mut session = TreeSession::from_config(TreeViewConfig::default()).unwrap();
        session.expand_all();
        session
    }

    fn ids(session: &TreeSession) -> Vec<&str> {
        session.nodes().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_drag_into_other_node() {
        // rows: 1, 2, 3, 4, 5 -> drop row 1 ("2") inside row 3 ("4")
        let mut session = session();
        let changed = session.on_drag_end(&DragEvent::within(1, 3, true)).unwrap();

        assert!(changed);
        assert_eq!(session.store().get("2").unwrap().parent_id.as_deref(), Some("4"));
        assert_eq!(ids(&session).last(), Some(&"2"));
    }

    #[test]
    fn test_drag_reorder_upwards() {
        // row 4 ("5") dropped at row 1: target row 1 ("2"), spliced at index 1
        let mut session = session();
        assert!(session.on_drag_end(&DragEvent::within(4, 1, false)).unwrap());

        assert_eq!(ids(&session), vec!["1", "5", "2", "3", "4"]);
        assert_eq!(session.store().get("5").unwrap().parent_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_drag_reorder_downwards_targets_next_row() {
        // row 1 ("2") dropped at row 2: target row shifts to 3 ("4")
        let mut session = session();
        assert!(session.on_drag_end(&DragEvent::within(1, 2, false)).unwrap());

        let moved = session.store().get("2").unwrap();
        assert!(moved.is_root());
        assert_eq!(ids(&session), vec!["1", "3", "2", "4", "5"]);
    }

    #[test]
    fn test_drag_past_last_row_goes_top_level() {
        let mut session = session();
        assert!(session.on_drag_end(&DragEvent::within(4, 5, false)).unwrap());

        let last = session.nodes().last().unwrap();
        assert_eq!(last.id, "5");
        assert!(last.is_root());
        assert!(last.expanded);
    }

    #[test]
    fn test_drag_inside_missing_row_is_ignored() {
        let mut session = session();
        let before = session.nodes().to_vec();

        assert!(!session.on_drag_end(&DragEvent::within(1, 10, true)).unwrap());
        assert_eq!(session.nodes(), before.as_slice());
    }

    #[test]
    fn test_drag_same_row_is_ignored() {
        let mut session = session();
        assert!(!session.on_drag_end(&DragEvent::within(2, 2, false)).unwrap());
    }

    #[test]
    fn test_drag_from_unknown_row_fails() {
        let mut session = session();
        let before = session.nodes().to_vec();

        let err = session.on_drag_end(&DragEvent::within(9, 0, false)).unwrap_err();
        assert_eq!(err, TreeOperationError::row_not_found(9));
        assert_eq!(session.nodes(), before.as_slice());
    }

    #[test]
    fn test_drop_inside_disabled() {
        let config = TreeViewConfig {
            allow_drop_inside_item: false,
            ..TreeViewConfig::default()
        };
        let mut session = TreeSession::from_config(config).unwrap();
        assert!(!session.config().allow_drop_inside_item);
        assert!(!session.on_drag_end(&DragEvent::within(1, 0, true)).unwrap());
    }

    #[test]
    fn test_drag_to_last_possible_row_goes_top_level() {
        let mut session = session();
        assert!(session
            .on_drag_end(&DragEvent::within(0, usize::MAX, false))
            .unwrap());

        let last = session.nodes().last().unwrap();
        assert_eq!(last.id, "1");
        assert!(last.is_root());
        assert_eq!(ids(&session), vec!["2", "3", "4", "5", "1"]);
    }

    #[test]
    fn test_reordering_disabled_still_allows_into() {
        let config = TreeViewConfig {
            allow_reordering: false,
            ..TreeViewConfig::default()
        };
        let mut session = TreeSession::from_config(config).unwrap();
        // collapsed rows: 1, 4
        assert!(!session.on_drag_end(&DragEvent::within(1, 0, false)).unwrap());
        assert!(session.on_drag_end(&DragEvent::within(1, 0, true)).unwrap());
        assert_eq!(session.store().get("4").unwrap().parent_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_search_follows_moves() {
        let mut session = session();
        session.on_search_input("Document 5");
        assert_eq!(session.search().position_label(), "1 / 1");

        session.on_drag_end(&DragEvent::within(4, 0, true)).unwrap();
        let current = session.current_result().unwrap();
        assert_eq!(current.id, "5");
        assert_eq!(current.parent_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_search_result_tracks_expansion() {
        let mut session = TreeSession::from_config(TreeViewConfig::default()).unwrap();
        session.on_search_input("document 1");
        assert!(!session.current_result().unwrap().expanded);

        session.expand_all();
        assert!(session.current_result().unwrap().expanded);

        session.set_expanded("1", false).unwrap();
        assert!(!session.current_result().unwrap().expanded);

        session.set_expanded("1", true).unwrap();
        session.collapse_all();
        assert!(!session.current_result().unwrap().expanded);
        assert_eq!(session.current_result().unwrap().id, "1");
    }

    #[test]
    fn test_search_navigation() {
        let mut session = session();
        session.on_search_input("DOCUMENT");
        assert_eq!(session.search().matches().len(), 5);

        session.prev_result();
        assert_eq!(session.current_result().unwrap().id, "5");
        session.next_result();
        assert_eq!(session.current_result().unwrap().id, "1");
    }

    #[test]
    fn test_set_expanded_cascades_by_config() {
        let mut session = TreeSession::from_config(TreeViewConfig::default()).unwrap();
        session.set_expanded("4", true).unwrap();
        assert!(session.store().get("5").unwrap().expanded);

        let err = session.set_expanded("missing", true).unwrap_err();
        assert!(matches!(err, TreeOperationError::NodeNotFound { .. }));
    }
}
