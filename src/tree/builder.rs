//! Tree construction.
//!
//! Records are indexed by parent id in one pass, then the tree is grown
//! depth-first from the root with an explicit stack. Nodes land in the
//! arena in pre-order, which lets every subtree be addressed as a
//! contiguous slot range.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::common::{DuplicatePolicy, Error, ItemId, NodeId, Result, RootPolicy, TreeConfig};
use crate::tree::node::Node;
use crate::tree::record::{ParentRef, Record};

/// Output of a successful build.
#[derive(Debug, Default)]
pub(crate) struct BuiltTree {
    /// Arena in pre-order; slot 0 is the root when non-empty.
    pub nodes: Vec<Node>,

    /// Input records that never made it into the tree, in input order.
    pub unreachable: Vec<Record>,

    pub max_depth: usize,
}

enum Visit {
    Enter {
        record: usize,
        parent_slot: Option<NodeId>,
        depth: usize,
    },
    Exit(NodeId),
}

/// Build the arena for `records` under `config`.
///
/// # Errors
/// - `Error::DuplicateId` if ids repeat and the policy rejects duplicates
/// - `Error::MultipleRoots` if more than one record uses the sentinel parent
/// - `Error::CyclicStructure` if a branch revisits an id
/// - `Error::NodeLimitExceeded` if the arena would outgrow the record count
pub(crate) fn build(records: &[Record], config: &TreeConfig) -> Result<BuiltTree> {
    if config.duplicate_policy == DuplicatePolicy::Reject {
        check_unique_ids(records)?;
    }

    let Some(root) = find_root(records, &config.root_policy)? else {
        debug!(records = records.len(), "No root record found, index is empty");
        return Ok(BuiltTree {
            unreachable: records.to_vec(),
            ..BuiltTree::default()
        });
    };

    // parent id -> child record indices, input order
    let mut children_of: HashMap<&ItemId, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let ParentRef::Item(parent) = &record.parent {
            children_of.entry(parent).or_default().push(idx);
        }
    }

    let mut nodes: Vec<Node> = Vec::with_capacity(records.len());
    let mut placed = vec![false; records.len()];
    let mut on_path: HashSet<&ItemId> = HashSet::new();
    let mut max_depth = 0;

    let mut stack = vec![Visit::Enter {
        record: root,
        parent_slot: None,
        depth: 0,
    }];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter {
                record,
                parent_slot,
                depth,
            } => {
                let rec = &records[record];
                if !on_path.insert(&rec.id) {
                    warn!(id = %rec.id, depth, "Parent chain revisits an id on the same branch");
                    return Err(Error::CyclicStructure { id: rec.id.clone() });
                }
                // Each record yields at most one node unless duplicated parent
                // ids copy subtrees, which can grow without bound.
                if nodes.len() == records.len() {
                    warn!(limit = records.len(), id = %rec.id, "Tree exceeds node limit");
                    return Err(Error::NodeLimitExceeded {
                        limit: records.len(),
                    });
                }

                let slot = NodeId::new(nodes.len());
                nodes.push(Node::new(rec, parent_slot, depth));
                if let Some(parent) = parent_slot {
                    nodes[parent.0].children.push(slot);
                }
                placed[record] = true;
                max_depth = max_depth.max(depth);

                stack.push(Visit::Exit(slot));
                if let Some(children) = children_of.get(&rec.id) {
                    // Reversed so the first child is popped first
                    for &child in children.iter().rev() {
                        stack.push(Visit::Enter {
                            record: child,
                            parent_slot: Some(slot),
                            depth: depth + 1,
                        });
                    }
                }
            }
            Visit::Exit(slot) => {
                let end = nodes.len();
                let node = &mut nodes[slot.0];
                node.subtree_end = end;
                on_path.remove(&node.id);
            }
        }
    }

    let unreachable: Vec<Record> = records
        .iter()
        .zip(&placed)
        .filter_map(|(record, &is_placed)| (!is_placed).then(|| record.clone()))
        .collect();

    for record in &unreachable {
        warn!(id = %record.id, parent = %record.parent, "Record is not reachable from the root");
    }

    debug!(
        nodes = nodes.len(),
        unreachable = unreachable.len(),
        max_depth,
        "Built tree index"
    );

    Ok(BuiltTree {
        nodes,
        unreachable,
        max_depth,
    })
}

fn check_unique_ids(records: &[Record]) -> Result<()> {
    let mut seen: HashSet<&ItemId> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(Error::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}

/// Index of the root record, or `None` if there is none.
fn find_root(records: &[Record], policy: &RootPolicy) -> Result<Option<usize>> {
    match policy {
        RootPolicy::FixedId(id) => Ok(records.iter().position(|r| &r.id == id)),
        RootPolicy::Sentinel => {
            let mut roots = records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_root());

            let Some((idx, first)) = roots.next() else {
                return Ok(None);
            };
            if let Some((_, second)) = roots.next() {
                return Err(Error::MultipleRoots {
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
            Ok(Some(idx))
        }
    }
}
