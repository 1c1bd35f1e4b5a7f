//! Type definitions for extracted mesh topology.

/// An undirected edge between two vertex indices.
///
/// Stored canonically with `lo < hi` so that the same geometric edge hashes
/// and compares equal no matter which face or winding direction produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub lo: u32,
    pub hi: u32,
}

impl Edge {
    /// Build the canonical form of the edge between vertices `a` and `b`.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The two vertex indices, lowest first.
    pub fn endpoints(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }
}

/// Errors that can occur during topology extraction
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Mesh has no position attribute")]
    NoPositions,
    #[error("Mesh is not a triangle list")]
    NotTriangleList,
}
