//! UI Session State
//!
//! `TreeSession` is the explicit state container the hosting UI owns: the
//! document store, the search navigator and the configuration. Widget events
//! (drag completion, search input, toolbar buttons) are translated here into
//! Tree Mutator and Search Navigator calls.

mod tree_session;

pub use tree_session::TreeSession;
