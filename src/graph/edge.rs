//! Directed weighted edges

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Handle to an edge, valid for the graph that minted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in its graph's edge list
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed edge with an integer weight
///
/// Identity is the [`EdgeId`]: two edges with the same endpoints and weight
/// are still different edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    weight: i64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: NodeId, to: NodeId, weight: i64) -> Self {
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source node
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Target node
    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }
}
