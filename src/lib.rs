//! treeindex - An immutable in-memory tree index over flat records.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          treeindex                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Query Layer (tree/)                      │   │
//! │  │  get_all | get_item | get_children | get_all_children    │   │
//! │  │                 | get_all_parents                        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Arena (tree/)  [built once]                 │   │
//! │  │   Vec<Node> in pre-order + ItemId → NodeId slot index    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Builder (tree/)                          │   │
//! │  │   parent → children map, cycle-guarded pre-order build   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │            Vec<Record> (in code, or JSON via serde)             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ItemId, NodeId, Error, config)
//! - [`tree`] - Records, nodes, construction and queries
//!
//! # Quick Start
//! ```
//! use treeindex::{ItemId, TreeIndex};
//!
//! let index = TreeIndex::from_json_str(r#"[
//!     {"id": 1, "parent": "root"},
//!     {"id": 2, "parent": 1, "type": "test"},
//!     {"id": 3, "parent": 2, "type": null}
//! ]"#).unwrap();
//!
//! let parents: Vec<_> = index.get_all_parents(3).into_iter().map(|r| r.id).collect();
//! assert_eq!(parents, vec![ItemId::from(1), ItemId::from(2)]);
//! ```

pub mod common;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DuplicatePolicy, RootPolicy, TreeConfig, ROOT_SENTINEL};
pub use common::{Error, ItemId, NodeId, Result};

pub use tree::{ItemType, ParentRef, Record, TreeIndex, TreeStore};
