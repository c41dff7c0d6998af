//! Data Models
//!
//! This module contains the data structures shared by the store, the mutator
//! and the search navigator:
//!
//! - `DocumentNode` - a single document in the flat, parent-pointer tree
//! - `DropMode` / `DragEvent` - what the display widget reports when a drag completes
//! - `ValidationError` - seed data that breaks the tree invariants

mod document;
mod drag;

pub use document::{DocumentNode, ValidationError};
pub use drag::{DragEvent, DropMode};
