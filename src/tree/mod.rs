//! Tree layer - records, nodes and the index built from them.
//!
//! # Components
//! - [`TreeIndex`] - The immutable index and its queries
//! - [`TreeStore`] - Query trait implemented by the index
//! - [`Record`] - Input/output record shape
//! - `Node` - A vertex in the tree arena (internal)

mod builder;
mod node;
mod record;
mod tree_index;

pub use record::{ItemType, ParentRef, Record};
pub use tree_index::{TreeIndex, TreeStore};
