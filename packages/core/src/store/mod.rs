//! Tree Store
//!
//! Holds the ordered document sequence for a session and answers read queries
//! over it:
//!
//! - `DocumentSource` - the collaborator that supplies the initial documents
//! - `TreeStore` - arena of nodes indexed by id, with parent links as ids
//! - `VisibleRows` - visual row order of the tree, used to resolve drag events

mod rows;
mod source;
mod tree_store;

pub use rows::{RowLookup, VisibleRow, VisibleRows};
pub use source::{DocumentSource, JsonDocumentSource, SourceError, StaticDocumentSource};
pub use tree_store::TreeStore;

pub(crate) use tree_store::is_descendant_in;
