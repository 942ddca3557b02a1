//! Tree Index - the query surface over a built tree.
//!
//! The [`TreeIndex`] provides:
//! - One-shot construction from a flat record list
//! - Item, children, descendant and ancestor queries
//! - Diagnostics for records left out of the tree

use std::collections::HashMap;
use std::io::Read;

use crate::common::{ItemId, NodeId, Result, TreeConfig};
use crate::tree::builder;
use crate::tree::node::Node;
use crate::tree::record::Record;

/// Read-only hierarchy queries.
///
/// Every method returns freshly built records, never references into the
/// store. Unknown ids give an empty result, not an error.
pub trait TreeStore {
    /// All reachable records, root first, in pre-order.
    fn get_all(&self) -> Vec<Record>;

    /// The record with `id`, if it is in the tree.
    fn get_item(&self, id: &ItemId) -> Option<Record>;

    /// Direct children of `id`, in input order.
    fn get_children(&self, id: &ItemId) -> Vec<Record>;

    /// Every descendant of `id` in pre-order, excluding `id` itself.
    fn get_all_children(&self, id: &ItemId) -> Vec<Record>;

    /// Ancestors of `id` from the root down to its direct parent.
    fn get_all_parents(&self, id: &ItemId) -> Vec<Record>;
}

/// An immutable tree built from parent-referencing records.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                        TreeIndex                            │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │ slot_index   │  │     nodes: Vec<Node> (pre-order)  │   │
/// │  │ItemId → Nid  │─▶│  [root] [child] [grandchild] ...  │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐                                          │
/// │  │ unreachable  │                                          │
/// │  │ Vec<Record>  │                                          │
/// │  └──────────────┘                                          │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Because the arena is laid out in pre-order, a node's descendants are
/// the contiguous slots right after it, and `get_all` is a plain scan.
///
/// # Thread Safety
/// Nothing is mutated after construction, so the index is `Sync` and can
/// be queried from many threads without locks.
///
/// # Usage
/// ```
/// use treeindex::{ParentRef, Record, TreeIndex};
///
/// let index = TreeIndex::new(vec![
///     Record::new(1, ParentRef::Root),
///     Record::new(2, 1).with_type("test"),
///     Record::new(3, 2),
/// ])
/// .unwrap();
///
/// assert_eq!(index.get_children(1), vec![Record::new(2, 1).with_type("test")]);
/// assert_eq!(index.get_all_parents(3).len(), 2);
/// ```
#[derive(Debug)]
pub struct TreeIndex {
    /// Arena of nodes in pre-order.
    nodes: Vec<Node>,

    /// Maps ids to the first slot holding them in pre-order.
    slot_index: HashMap<ItemId, NodeId>,

    /// Input records with no path to the root.
    unreachable: Vec<Record>,

    max_depth: usize,
}

impl TreeIndex {
    /// Build an index with the default configuration.
    ///
    /// # Errors
    /// - `Error::DuplicateId` if two records share an id
    /// - `Error::MultipleRoots` if more than one record has parent `"root"`
    pub fn new(records: Vec<Record>) -> Result<Self> {
        Self::with_config(records, TreeConfig::default())
    }

    /// Build an index with explicit root and duplicate policies.
    ///
    /// # Errors
    /// - `Error::DuplicateId` if ids repeat under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject)
    /// - `Error::MultipleRoots` if the sentinel policy finds several roots
    /// - `Error::CyclicStructure` if some branch revisits an id
    /// - `Error::NodeLimitExceeded` if duplicated parent ids would copy subtrees
    ///   past the input record count
    pub fn with_config(records: Vec<Record>, config: TreeConfig) -> Result<Self> {
        let built = builder::build(&records, &config)?;

        let mut slot_index = HashMap::with_capacity(built.nodes.len());
        for (slot, node) in built.nodes.iter().enumerate() {
            slot_index
                .entry(node.id.clone())
                .or_insert(NodeId::new(slot));
        }

        Ok(Self {
            nodes: built.nodes,
            slot_index,
            unreachable: built.unreachable,
            max_depth: built.max_depth,
        })
    }

    /// Build an index from a JSON array of records.
    ///
    /// # Errors
    /// - `Error::Json` if the input is not an array of records
    /// - Any construction error from [`TreeIndex::new`]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Build an index from a reader yielding a JSON array of records.
    ///
    /// # Errors
    /// - `Error::Io` if reading from `reader` fails
    /// - `Error::Json` if the text read is not an array of records
    /// - Any construction error from [`TreeIndex::new`]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// All reachable records, root first, in pre-order.
    pub fn get_all(&self) -> Vec<Record> {
        self.nodes.iter().map(Node::to_record).collect()
    }

    /// The record with `id`, or `None` if it is not in the tree.
    pub fn get_item(&self, id: impl Into<ItemId>) -> Option<Record> {
        self.find(&id.into()).map(|slot| self.node(slot).to_record())
    }

    /// Direct children of `id`, in input order.
    ///
    /// Empty if `id` is unknown or a leaf.
    pub fn get_children(&self, id: impl Into<ItemId>) -> Vec<Record> {
        let Some(slot) = self.find(&id.into()) else {
            return Vec::new();
        };

        self.node(slot)
            .children
            .iter()
            .map(|&child| self.node(child).to_record())
            .collect()
    }

    /// Every descendant of `id` in pre-order, excluding `id` itself.
    ///
    /// Empty if `id` is unknown or a leaf.
    pub fn get_all_children(&self, id: impl Into<ItemId>) -> Vec<Record> {
        let Some(slot) = self.find(&id.into()) else {
            return Vec::new();
        };

        self.nodes[self.node(slot).descendant_slots(slot)]
            .iter()
            .map(Node::to_record)
            .collect()
    }

    /// Ancestors of `id`, from the root down to its direct parent.
    ///
    /// Only the branch that actually leads to `id` contributes. Empty if
    /// `id` is unknown or is the root.
    pub fn get_all_parents(&self, id: impl Into<ItemId>) -> Vec<Record> {
        let Some(slot) = self.find(&id.into()) else {
            return Vec::new();
        };

        let mut chain = Vec::with_capacity(self.node(slot).depth);
        let mut current = self.node(slot).parent_slot;
        while let Some(parent) = current {
            let node = self.node(parent);
            chain.push(node.to_record());
            current = node.parent_slot;
        }
        chain.reverse();
        chain
    }

    // ========================================================================
    // Public API: Introspection
    // ========================================================================

    /// The root record, if the tree is non-empty.
    pub fn root(&self) -> Option<Record> {
        self.nodes.first().map(Node::to_record)
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `id` is reachable from the root.
    pub fn contains(&self, id: impl Into<ItemId>) -> bool {
        self.slot_index.contains_key(&id.into())
    }

    /// Distance of `id` from the root (the root is at depth 0).
    pub fn depth_of(&self, id: impl Into<ItemId>) -> Option<usize> {
        self.slot_index
            .get(&id.into())
            .map(|&slot| self.node(slot).depth)
    }

    /// Depth of the deepest node, 0 for a lone root or an empty tree.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Input records that were left out because they cannot reach the root.
    ///
    /// Holds every input record when no root was found.
    pub fn unreachable(&self) -> &[Record] {
        &self.unreachable
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// First slot in pre-order holding `id`.
    fn find(&self, id: &ItemId) -> Option<NodeId> {
        self.slot_index.get(id).copied()
    }

    #[inline]
    fn node(&self, slot: NodeId) -> &Node {
        &self.nodes[slot.0]
    }
}

impl TreeStore for TreeIndex {
    fn get_all(&self) -> Vec<Record> {
        TreeIndex::get_all(self)
    }

    fn get_item(&self, id: &ItemId) -> Option<Record> {
        TreeIndex::get_item(self, id)
    }

    fn get_children(&self, id: &ItemId) -> Vec<Record> {
        TreeIndex::get_children(self, id)
    }

    fn get_all_children(&self, id: &ItemId) -> Vec<Record> {
        TreeIndex::get_all_children(self, id)
    }

    fn get_all_parents(&self, id: &ItemId) -> Vec<Record> {
        TreeIndex::get_all_parents(self, id)
    }
}
