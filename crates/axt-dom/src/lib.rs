//! axt DOM
//!
//! Immutable snapshot document model. A snapshot is a flat list of
//! element declarations (children-list or parent-ref form); building it
//! normalizes containment into an arena tree and runs integrity checks.

mod snapshot;
mod tree;

pub use snapshot::{ElementDecl, Snapshot};
pub use tree::{DomTree, MAX_DEPTH, MAX_NODES, Node, NodeId};

/// Structural failure while building a tree from a snapshot.
///
/// These abort tree construction: no accessibility tree can be derived
/// from a snapshot whose containment is not a single rooted tree.
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("duplicate element id: {0}")]
    DuplicateId(String),

    #[error("element {by} references unknown id {referenced}")]
    UnknownId { referenced: String, by: String },

    #[error("conflicting containment declarations for {0}")]
    Inconsistent(String),

    #[error("containment cycle through {0}")]
    Cycle(String),

    #[error("multiple roots: {first} and {second}")]
    MultipleRoots { first: String, second: String },

    #[error("snapshot has no root element")]
    NoRoot,

    #[error("tree deeper than {limit} at {id}")]
    TooDeep { id: String, limit: usize },

    #[error("snapshot has {count} elements, limit is {limit}")]
    TooLarge { count: usize, limit: usize },
}
