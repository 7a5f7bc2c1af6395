//! Shared types used across all AntRoute crates.

use crate::error::{AntRouteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Travel cost of an edge. Always at least 1.
pub type Cost = u16;

/// Dense identifier for a node in the graph.
///
/// Ids index straight into the adjacency arena, so a graph whose largest id
/// is `n` has `n + 1` rows. Id `0` is the "unset" sentinel of interactive
/// front-ends; the search itself treats it like any other node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u16);

impl NodeId {
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Position of this node in the adjacency arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Inverse of [`NodeId::index`]. `None` past the id range.
    pub fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }
}

impl From<u16> for NodeId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected, weighted edge.
///
/// Equality and hashing ignore endpoint order: `1 - 2 (5)` equals
/// `2 - 1 (5)` but not `1 - 2 (6)`. The stored order is still kept,
/// because edges produced by the translator and by snapshots read as
/// `node_a → node_b`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawEdge", into = "RawEdge")]
pub struct Edge {
    node_a: NodeId,
    node_b: NodeId,
    cost: Cost,
}

impl Edge {
    /// Create an edge. Rejects a zero cost.
    pub fn new(node_a: u16, node_b: u16, cost: Cost) -> Result<Self> {
        if cost == 0 {
            return Err(AntRouteError::zero_cost(node_a, node_b));
        }
        Ok(Self::directed(NodeId(node_a), NodeId(node_b), cost))
    }

    /// Build a list of edges from `(node_a, node_b, cost)` triples.
    pub fn from_triples(triples: &[(u16, u16, Cost)]) -> Result<Vec<Self>> {
        triples
            .iter()
            .map(|&(a, b, cost)| Self::new(a, b, cost))
            .collect()
    }

    /// Crate-internal constructor for costs already known to be positive.
    pub(crate) fn directed(from: NodeId, to: NodeId, cost: Cost) -> Self {
        Self {
            node_a: from,
            node_b: to,
            cost,
        }
    }

    pub fn node_a(&self) -> NodeId {
        self.node_a
    }

    pub fn node_b(&self) -> NodeId {
        self.node_b
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The same edge read in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::directed(self.node_b, self.node_a, self.cost)
    }

    /// Whether this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.node_a == a && self.node_b == b) || (self.node_a == b && self.node_b == a)
    }

    /// Endpoints with the smaller id first.
    fn canonical(&self) -> (NodeId, NodeId) {
        if self.node_a <= self.node_b {
            (self.node_a, self.node_b)
        } else {
            (self.node_b, self.node_a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
        self.cost.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.node_a, self.node_b, self.cost)
    }
}

/// Wire form of an [`Edge`], validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawEdge {
    node_a: u16,
    node_b: u16,
    cost: Cost,
}

impl TryFrom<RawEdge> for Edge {
    type Error = AntRouteError;

    fn try_from(raw: RawEdge) -> Result<Self> {
        Edge::new(raw.node_a, raw.node_b, raw.cost)
    }
}

impl From<Edge> for RawEdge {
    fn from(edge: Edge) -> Self {
        Self {
            node_a: edge.node_a.0,
            node_b: edge.node_b.0,
            cost: edge.cost,
        }
    }
}
