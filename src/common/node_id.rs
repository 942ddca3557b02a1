//! Arena slot identifier type.

use std::fmt;

/// Identifies a node slot in the tree arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Node>`
/// 2. Direct indexing without casting: `nodes[node_id.0]`
/// 3. Slots are assigned in pre-order, so the root is always slot 0
///
/// # Example
/// ```
/// use treeindex::NodeId;
///
/// let node_id = NodeId::new(5);
/// assert_eq!(node_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Slot of the root node in a non-empty tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
