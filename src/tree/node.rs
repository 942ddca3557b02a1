//! Node - a vertex in the tree arena.
//!
//! A [`Node`] mirrors one [`Record`] plus the arena links needed for
//! traversal:
//! - Parent slot (none for the root)
//! - Child slots in input order
//! - Depth and the end of its pre-order subtree range

use std::ops::Range;

use crate::common::{ItemId, NodeId};
use crate::tree::record::{ItemType, ParentRef, Record};

/// A node in the tree arena.
///
/// Nodes never hold references to each other; links are [`NodeId`] slots
/// into the owning arena. The `parent` field keeps the record's parent
/// *value* for output, `parent_slot` is the arena link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) id: ItemId,
    pub(crate) parent: ParentRef,
    pub(crate) item_type: ItemType,

    pub(crate) parent_slot: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) depth: usize,

    /// One past the last slot of this node's subtree.
    pub(crate) subtree_end: usize,
}

impl Node {
    /// Create a childless node from a record.
    pub fn new(record: &Record, parent_slot: Option<NodeId>, depth: usize) -> Self {
        Self {
            id: record.id.clone(),
            parent: record.parent.clone(),
            item_type: record.item_type.clone(),
            parent_slot,
            children: Vec::new(),
            depth,
            subtree_end: 0,
        }
    }

    /// Arena slots of the subtree below `slot`, excluding the node itself.
    #[inline]
    pub fn descendant_slots(&self, slot: NodeId) -> Range<usize> {
        slot.0 + 1..self.subtree_end
    }

    /// Rebuild the plain record this node was made from.
    ///
    /// The type tag is copied as-is, so an absent tag stays absent and a
    /// null tag stays null.
    pub fn to_record(&self) -> Record {
        Record {
            id: self.id.clone(),
            parent: self.parent.clone(),
            item_type: self.item_type.clone(),
        }
    }
}
