//! graphkit - Minimum Spanning Trees and Shortest Paths on Hand-Rolled Containers
//!
//! This library implements Kruskal's minimum spanning tree and Dijkstra's
//! single-source shortest path over undirected weighted graphs. Both algorithms
//! run on the containers in [`data_structures`]: a separate-chaining hash
//! dictionary, a 4-ary array heap and an arena-backed disjoint set.
//!
//! A bounded-heap top-K selection ([`top_k_sort`]) is provided alongside.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::searcher::top_k_sort;
pub use data_structures::{ArrayHeap, ChainedHashSet, DisjointSet, HashDictionary};
/// Re-export main types for convenient use
pub use graph::{Edge, WeightedEdge, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Edge weight must be non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("Vertex not found in graph: {0}")]
    UnknownVertex(String),

    #[error("Item is already tracked by the disjoint set")]
    DuplicateItem,

    #[error("Item is not tracked by the disjoint set")]
    UntrackedItem,

    #[error("Items already belong to the same set")]
    AlreadyUnited,

    #[error("Key not found in dictionary")]
    KeyNotFound,

    #[error("Container is empty")]
    EmptyContainer,

    #[error("No path exists from start to end")]
    NoPathExists,
}

/// Broad classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed caller input
    InvalidArgument,
    /// Dictionary lookup or removal of an absent key
    KeyNotFound,
    /// Inspection or removal on an empty heap
    EmptyContainer,
    /// The end vertex is unreachable from the start vertex
    NoPathExists,
}

impl Error {
    /// Returns the kind this error belongs to
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidWeight(_)
            | Error::UnknownVertex(_)
            | Error::DuplicateItem
            | Error::UntrackedItem
            | Error::AlreadyUnited => ErrorKind::InvalidArgument,
            Error::KeyNotFound => ErrorKind::KeyNotFound,
            Error::EmptyContainer => ErrorKind::EmptyContainer,
            Error::NoPathExists => ErrorKind::NoPathExists,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
