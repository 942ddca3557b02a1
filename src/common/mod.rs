//! Common types and utilities shared across treeindex.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and build options
//! - Error types
//! - Identifiers (ItemId, NodeId)

pub mod config;
pub mod error;
mod item_id;
mod node_id;

pub use config::{DuplicatePolicy, RootPolicy, TreeConfig, ROOT_SENTINEL};
pub use error::{Error, Result};
pub use item_id::ItemId;
pub use node_id::NodeId;
