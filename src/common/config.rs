//! Configuration for building a tree index.

use crate::common::ItemId;

/// Parent value that marks a record as the tree root.
pub const ROOT_SENTINEL: &str = "root";

/// Root id used by the fixed-id policy in [`TreeConfig::reference`].
pub const REFERENCE_ROOT_ID: i64 = 1;

/// How the root record is located.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RootPolicy {
    /// The unique record whose parent is [`ROOT_SENTINEL`].
    ///
    /// Zero matches give an empty tree; more than one is an error.
    #[default]
    Sentinel,

    /// The first record whose id equals this value, whatever its parent.
    FixedId(ItemId),
}

/// What to do when two input records share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail construction with [`Error::DuplicateId`](crate::Error::DuplicateId).
    #[default]
    Reject,

    /// Keep every record as its own node. Lookups return the first match
    /// in pre-order.
    FirstWins,
}

/// Construction options for [`TreeIndex`](crate::TreeIndex).
///
/// # Example
/// ```
/// use treeindex::{DuplicatePolicy, RootPolicy, TreeConfig};
///
/// let config = TreeConfig::default().with_duplicate_policy(DuplicatePolicy::FirstWins);
/// assert_eq!(config.root_policy, RootPolicy::Sentinel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeConfig {
    pub root_policy: RootPolicy,
    pub duplicate_policy: DuplicatePolicy,
}

impl TreeConfig {
    /// Locate the root by id `1` and resolve duplicates by list order.
    pub fn reference() -> Self {
        Self {
            root_policy: RootPolicy::FixedId(ItemId::Int(REFERENCE_ROOT_ID)),
            duplicate_policy: DuplicatePolicy::FirstWins,
        }
    }

    pub fn with_root_policy(mut self, root_policy: RootPolicy) -> Self {
        self.root_policy = root_policy;
        self
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }
}
