//! DocTree Core
//!
//! This crate provides the logic behind a drag-and-drop document tree view:
//! a flat, parent-pointer document store, the move computation that keeps the
//! tree acyclic, and case-insensitive search with cyclic result navigation.
//!
//! # Architecture
//!
//! - **Flat list with parent ids**: the tree is an ordered `Vec` of nodes whose
//!   `parent_id` references another node's id; sequence order is sibling order
//! - **Pure mutator**: moves are computed from a node slice into a new sequence
//! - **Explicit session state**: the hosting UI owns a `TreeSession`; there is
//!   no global state
//!
//! # Modules
//!
//! - [`models`] - Document nodes and drag event types
//! - [`store`] - Document sources, the node arena and visual row lookup
//! - [`operations`] - The Tree Mutator
//! - [`search`] - The Search Navigator
//! - [`session`] - Event handling over the owned UI state
//! - [`config`] - Tree view configuration

pub mod config;
pub mod models;
pub mod operations;
pub mod search;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, TreeViewConfig};
pub use models::*;
pub use operations::{move_node, MoveRequest, TreeOperationError};
pub use search::SearchNavigator;
pub use session::TreeSession;
pub use store::{DocumentSource, RowLookup, TreeStore, VisibleRows};
