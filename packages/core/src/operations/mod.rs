//! Tree Operations
//!
//! The Tree Mutator: given a flat node sequence and a drop description,
//! compute the sequence after the move.
//!
//! - [`move_node`] - pure move computation over a node slice
//! - [`MoveRequest`] - which node moves, where it lands and how
//! - [`TreeOperationError`] - failure conditions (unknown ids, unresolvable rows)

pub mod error;
pub mod mover;

pub use error::TreeOperationError;
pub use mover::{move_node, MoveRequest};
