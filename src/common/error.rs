//! Error types for treeindex.

use thiserror::Error;

use crate::common::ItemId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors when building a [`TreeIndex`](crate::TreeIndex).
///
/// Queries never fail. Every variant here is raised either while the tree
/// is being constructed or while records are being loaded.
#[derive(Debug, Error)]
pub enum Error {
    /// A parent chain revisited an id already on the current branch.
    ///
    /// Only reachable when the root is chosen by id or duplicate ids are
    /// allowed; the sentinel root can never sit inside a cycle.
    #[error("cyclic structure detected at item {id}")]
    CyclicStructure { id: ItemId },

    /// The tree would hold more nodes than there are input records.
    ///
    /// Only reachable with duplicate ids allowed, when a duplicated parent
    /// id makes its children appear under every copy.
    #[error("tree exceeds node limit of {limit}")]
    NodeLimitExceeded { limit: usize },

    /// The same id appears on more than one input record.
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// More than one record claims the `"root"` sentinel as its parent.
    #[error("multiple root records: {first} and {second}")]
    MultipleRoots { first: ItemId, second: ItemId },

    /// Records could not be decoded from JSON.
    #[error("invalid record json: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading records.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
